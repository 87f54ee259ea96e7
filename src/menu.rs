//! Mobile Menu State
//!
//! Visibility flag for the collapsible navigation panel.

/// Whether the mobile navigation panel is shown. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuVisibility(bool);

impl MenuVisibility {
    pub fn is_open(self) -> bool {
        self.0
    }

    /// Hamburger button: flip open/closed
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn close(&mut self) {
        self.0 = false;
    }

    /// Picking a destination always dismisses the panel
    pub fn select_item(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuVisibility::default().is_open());
    }

    #[test]
    fn test_toggle_twice() {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_from_open() {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_open_then_select_item() {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.select_item();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_item_while_closed_stays_closed() {
        let mut menu = MenuVisibility::default();
        menu.select_item();
        assert!(!menu.is_open());
    }
}

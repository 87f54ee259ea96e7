//! Sources of the current instant.

/// Anything that can report "now" as epoch milliseconds
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock of the browser (`Date.now()`)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_ms(&self) -> i64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeLeft;
    use std::cell::Cell;

    #[test]
    fn test_closure_clock_drives_countdown() {
        let now = Cell::new(0_i64);
        let clock = || now.get();
        let target = 2 * crate::MS_PER_SECOND;

        assert_eq!(TimeLeft::between(target, clock.now_ms()).seconds, 2);
        now.set(1_500);
        assert_eq!(TimeLeft::between(target, clock.now_ms()).seconds, 0);
        now.set(2_000);
        assert!(TimeLeft::between(target, clock.now_ms()).is_zero());
    }
}

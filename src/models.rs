//! Site Models
//!
//! Plain records behind every repeated block on the page.

use crate::icon_paths as icons;

/// Navigation entry shared by the desktop bar and the mobile panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Kind of a timeline milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Registration,
    Event,
    Deadline,
    Announcement,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Đăng ký",
            Self::Event => "Sự kiện",
            Self::Deadline => "Hạn chót",
            Self::Announcement => "Thông báo",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Registration => "badge badge-green",
            Self::Event => "badge badge-blue",
            Self::Deadline => "badge badge-red",
            Self::Announcement => "badge badge-yellow",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Registration => icons::ICON_USER_ADD,
            Self::Event => icons::ICON_CALENDAR,
            Self::Deadline => icons::ICON_CLOCK,
            Self::Announcement => icons::ICON_MEGAPHONE,
        }
    }
}

/// Timeline milestone. Listed in chronological order by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEvent {
    /// dd/mm/yyyy
    pub date: &'static str,
    /// hh:mm
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Beginner => "badge badge-green",
            Self::Intermediate => "badge badge-yellow",
            Self::Advanced => "badge badge-red",
        }
    }
}

/// Hackathon challenge card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    /// Display string, currency included
    pub prize: &'static str,
    /// SVG path data
    pub icon: &'static str,
}

/// Icon + title + description row (tracks and experience points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptionPoint {
    /// Image URL
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Numbered card in the About section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data
    pub icon: &'static str,
}

/// Technology focus area tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusArea {
    pub emoji: &'static str,
    pub title: &'static str,
    pub topics: &'static str,
}

/// Headline figure with a caption (e.g. "48 giờ" / "Thời gian thi đấu")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Facebook,
    Linkedin,
    Email,
}

impl SocialIcon {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Facebook => icons::ICON_FACEBOOK,
            Self::Linkedin => icons::ICON_LINKEDIN,
            Self::Email => icons::ICON_EMAIL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

impl SocialLink {
    /// mailto: links stay in the current tab
    pub fn opens_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_badges_are_distinct() {
        let all = [
            EventCategory::Registration,
            EventCategory::Event,
            EventCategory::Deadline,
            EventCategory::Announcement,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.badge_class(), b.badge_class());
                assert_ne!(a.label(), b.label());
                assert_ne!(a.icon(), b.icon());
            }
        }
    }

    #[test]
    fn test_icons_are_path_data() {
        assert_eq!(EventCategory::Deadline.icon(), icons::ICON_CLOCK);
        assert_eq!(SocialIcon::Email.icon(), icons::ICON_EMAIL);
        assert!(SocialIcon::Linkedin.icon().starts_with('M'));
    }

    #[test]
    fn test_difficulty_label() {
        assert_eq!(Difficulty::Beginner.label(), "Beginner");
        assert_eq!(Difficulty::Advanced.badge_class(), "badge badge-red");
    }

    #[test]
    fn test_mailto_stays_in_tab() {
        let email = SocialLink { label: "mail", url: "mailto:a@b.c", icon: SocialIcon::Email };
        let fb = SocialLink { label: "fb", url: "https://facebook.com/x", icon: SocialIcon::Facebook };
        assert!(!email.opens_new_tab());
        assert!(fb.opens_new_tab());
    }
}

//! UI Components
//!
//! One component per page section, plus shared pieces.

pub mod icons;
mod section;
mod countdown_panel;
mod header;
mod hero;
mod about;
mod descriptions;
mod challenges;
mod timeline;
mod footer;

pub use section::{SectionHeader, StatGrid};
pub use countdown_panel::CountdownPanel;
pub use header::Header;
pub use hero::Hero;
pub use about::About;
pub use descriptions::Descriptions;
pub use challenges::Challenges;
pub use timeline::Timeline;
pub use footer::Footer;

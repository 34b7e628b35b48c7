//! Static site content supplied to the presentational components.
//!
//! - **profile**: name, tagline, email, and external links
//! - **navigation**: nav card entries and navbar links in display order
//! - **messages**: copy-field status strings
//! - **resume**: education, experience, projects, and skills data

pub mod messages;
pub mod navigation;
pub mod profile;
pub mod resume;

pub use navigation::{nav_cards, nav_links, NavCardEntry, NavLink};
pub use profile::PROFILE;
pub use resume::RESUME;

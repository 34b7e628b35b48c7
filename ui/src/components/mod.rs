//! User Interface Components
//!
//! Reusable Dioxus components for the portfolio site:
//!
//! - **button**: primary action button with icon and optional title
//! - **copy_field**: copy-to-clipboard field with transient status feedback
//! - **icon_link**: anchor wrapping an icon, for external profiles
//! - **icons**: inline SVG icon set (Lucide geometry)
//! - **nav_bar**: fixed top navbar with page links and quick actions
//! - **nav_card**: router link rendered as a card with icon and description

pub mod button;
pub mod copy_field;
pub mod icon_link;
pub mod icons;
pub mod nav_bar;
pub mod nav_card;

pub use button::{Button, ButtonVariant};
pub use copy_field::CopyFieldButton;
pub use icon_link::IconLink;
pub use nav_bar::NavBar;
pub use nav_card::NavCard;

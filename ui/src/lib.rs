//! Shared UI for the portfolio site: pages, components, content constants,
//! and the copy-to-clipboard behavior.

pub mod components;
pub mod content;
pub mod features;
pub mod pages;
pub mod services;
pub mod utils;

pub use pages::Route;

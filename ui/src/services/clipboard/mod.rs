//! Clipboard write capability behind an injectable trait.
//!
//! The browser clipboard is ambient, process-wide state. Components never
//! touch `navigator.clipboard` directly; they go through [`ClipboardWrite`]
//! so the capability can be swapped for a fake in tests.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "web")]
pub mod navigator;

#[cfg(feature = "web")]
pub use navigator::NavigatorClipboard;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No usable clipboard capability, or merely probing for it raised.
    #[error("clipboard capability is unavailable")]
    Unavailable,

    /// The capability exists but the platform denied or failed the write.
    #[error("clipboard write rejected: {reason}")]
    WriteRejected { reason: String },
}

/// Asynchronous "write text" operation over whatever clipboard backs it.
///
/// `?Send` because the browser implementation awaits a `JsFuture`.
#[async_trait(?Send)]
pub trait ClipboardWrite {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

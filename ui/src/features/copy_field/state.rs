//! Transient view state for the copy field.
//!
//! The status is ephemeral UI state owned by one component instance: it is
//! created as `Idle`, moves only on a user activation or an expired reset,
//! and is discarded on unmount. Reset timers are correlated through
//! [`ResetToken`] so a stale timer from an earlier activation can never
//! flick the field back to `Idle` underneath a newer outcome.

use crate::content::messages;
use crate::services::clipboard::ClipboardError;

/// Why a copy attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFailure {
    /// The platform clipboard capability is absent or inaccessible.
    ClipboardUnsupported,
    /// The capability existed but the write itself was denied or failed.
    CopyRejected,
}

impl CopyFailure {
    /// User-facing message shown in the status region.
    pub fn message(&self) -> &'static str {
        match self {
            CopyFailure::ClipboardUnsupported => messages::CLIPBOARD_NOT_SUPPORTED,
            CopyFailure::CopyRejected => messages::COPY_FAILED,
        }
    }
}

impl From<ClipboardError> for CopyFailure {
    fn from(error: ClipboardError) -> Self {
        match error {
            ClipboardError::Unavailable => CopyFailure::ClipboardUnsupported,
            ClipboardError::WriteRejected { .. } => CopyFailure::CopyRejected,
        }
    }
}

/// Tri-valued visual state. At most one of `Copied`/`Failed` is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed(CopyFailure),
}

/// Correlates an auto-reset timer with the transition that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

/// Milliseconds a `Copied`/`Failed` outcome stays visible before reset.
pub const RESET_DELAY_MS: u32 = 3000;

#[derive(Debug, Default)]
pub struct CopyFieldState {
    status: CopyStatus,
    generation: u64,
}

impl CopyFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    /// Record the outcome of a copy attempt, superseding whatever was shown.
    ///
    /// The returned token belongs to this transition only; any token handed
    /// out earlier is invalidated, which is what cancels the earlier timer.
    pub fn settle(&mut self, outcome: Result<(), CopyFailure>) -> ResetToken {
        self.status = match outcome {
            Ok(()) => CopyStatus::Copied,
            Err(failure) => CopyStatus::Failed(failure),
        };
        self.generation += 1;
        ResetToken(self.generation)
    }

    /// Return to `Idle` if `token` still names the current transition.
    ///
    /// A stale token means a newer activation already took over the field;
    /// its own timer will handle the reset.
    pub fn reset_if_current(&mut self, token: ResetToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.status = CopyStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(CopyFieldState::new().status(), CopyStatus::Idle);
    }

    #[test]
    fn settle_success_shows_copied() {
        let mut state = CopyFieldState::new();
        state.settle(Ok(()));
        assert_eq!(state.status(), CopyStatus::Copied);
    }

    #[test]
    fn settle_failure_shows_reason() {
        let mut state = CopyFieldState::new();
        state.settle(Err(CopyFailure::CopyRejected));
        assert_eq!(
            state.status(),
            CopyStatus::Failed(CopyFailure::CopyRejected)
        );
    }

    #[test]
    fn new_outcome_replaces_prior_one() {
        let mut state = CopyFieldState::new();
        state.settle(Err(CopyFailure::ClipboardUnsupported));
        state.settle(Ok(()));
        assert_eq!(state.status(), CopyStatus::Copied);

        state.settle(Err(CopyFailure::CopyRejected));
        assert_eq!(
            state.status(),
            CopyStatus::Failed(CopyFailure::CopyRejected)
        );
    }

    #[test]
    fn current_token_resets_to_idle() {
        let mut state = CopyFieldState::new();
        let token = state.settle(Ok(()));
        assert!(state.reset_if_current(token));
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut state = CopyFieldState::new();
        let first = state.settle(Ok(()));
        let second = state.settle(Err(CopyFailure::CopyRejected));

        // The first activation's timer fires after the second took over.
        assert!(!state.reset_if_current(first));
        assert_eq!(
            state.status(),
            CopyStatus::Failed(CopyFailure::CopyRejected)
        );

        assert!(state.reset_if_current(second));
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[test]
    fn failure_messages_are_exact() {
        assert_eq!(
            CopyFailure::ClipboardUnsupported.message(),
            "Your browser does not support clipboard operations."
        );
        assert_eq!(
            CopyFailure::CopyRejected.message(),
            "Copy failed. Please try again later."
        );
    }

    #[test]
    fn clipboard_errors_map_to_failures() {
        assert_eq!(
            CopyFailure::from(ClipboardError::Unavailable),
            CopyFailure::ClipboardUnsupported
        );
        assert_eq!(
            CopyFailure::from(ClipboardError::WriteRejected {
                reason: "denied".to_string()
            }),
            CopyFailure::CopyRejected
        );
    }
}

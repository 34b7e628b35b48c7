//! Copy attempt execution, decoupled from the rendered component.

use super::state::CopyFailure;
use crate::services::clipboard::ClipboardWrite;

/// Directive returned by a caller-supplied pre-activation handler.
///
/// `Skip` tells the field the caller handled the activation itself and the
/// copy attempt must not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyActivation {
    Continue,
    Skip,
}

/// Issue one write of `value` through the given clipboard capability.
pub async fn write_with(
    clipboard: &dyn ClipboardWrite,
    value: &str,
) -> Result<(), CopyFailure> {
    clipboard
        .write_text(value)
        .await
        .map_err(CopyFailure::from)
}

/// Run one activation against the given clipboard, honoring the caller
/// directive first.
///
/// `None` means the caller handled the activation itself: no write is
/// issued and the visible state must not move.
pub async fn activate_with(
    directive: CopyActivation,
    clipboard: &dyn ClipboardWrite,
    value: &str,
) -> Option<Result<(), CopyFailure>> {
    match directive {
        CopyActivation::Skip => None,
        CopyActivation::Continue => Some(write_with(clipboard, value).await),
    }
}

/// Browser-clipboard counterpart of [`activate_with`].
///
/// `Skip` stops before the capability is even probed, so a skipped
/// activation touches nothing.
#[cfg(feature = "web")]
pub async fn activate_browser_copy(
    directive: CopyActivation,
    value: &str,
) -> Option<Result<(), CopyFailure>> {
    if directive == CopyActivation::Skip {
        return None;
    }
    Some(copy_to_browser_clipboard(value).await)
}

/// Acquire the browser clipboard and attempt to copy `value`.
///
/// Acquisition failure and write rejection both come back as a
/// [`CopyFailure`]; nothing escapes this boundary.
#[cfg(feature = "web")]
pub async fn copy_to_browser_clipboard(value: &str) -> Result<(), CopyFailure> {
    use crate::services::clipboard::NavigatorClipboard;

    let clipboard = NavigatorClipboard::acquire().map_err(CopyFailure::from)?;
    write_with(&clipboard, value).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clipboard::ClipboardError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    enum FakeOutcome {
        Resolve,
        Reject,
        Unavailable,
    }

    struct FakeClipboard {
        outcome: FakeOutcome,
        written: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(outcome: FakeOutcome) -> Self {
            Self {
                outcome,
                written: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClipboardWrite for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.borrow_mut().push(text.to_string());
            match self.outcome {
                FakeOutcome::Resolve => Ok(()),
                FakeOutcome::Reject => Err(ClipboardError::WriteRejected {
                    reason: "write not allowed".to_string(),
                }),
                FakeOutcome::Unavailable => Err(ClipboardError::Unavailable),
            }
        }
    }

    #[tokio::test]
    async fn resolved_write_succeeds_with_exact_value() {
        let clipboard = FakeClipboard::new(FakeOutcome::Resolve);
        let result = write_with(&clipboard, "hello@example.com").await;
        assert_eq!(result, Ok(()));
        assert_eq!(*clipboard.written.borrow(), ["hello@example.com"]);
    }

    #[tokio::test]
    async fn rejected_write_maps_to_copy_rejected() {
        let clipboard = FakeClipboard::new(FakeOutcome::Reject);
        let result = write_with(&clipboard, "hello@example.com").await;
        assert_eq!(result, Err(CopyFailure::CopyRejected));
        assert_eq!(
            result.unwrap_err().message(),
            "Copy failed. Please try again later."
        );
    }

    #[tokio::test]
    async fn skip_directive_issues_no_write_and_no_transition() {
        use crate::features::copy_field::{CopyFieldState, CopyStatus};

        let clipboard = FakeClipboard::new(FakeOutcome::Resolve);
        let outcome =
            activate_with(CopyActivation::Skip, &clipboard, "hello@example.com").await;

        assert_eq!(outcome, None);
        assert!(clipboard.written.borrow().is_empty());

        // Without an outcome there is nothing to settle, exactly as the
        // component wires it, so the field never leaves idle.
        let mut state = CopyFieldState::new();
        if let Some(outcome) = outcome {
            state.settle(outcome);
        }
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[tokio::test]
    async fn continue_directive_proceeds_with_the_write() {
        let clipboard = FakeClipboard::new(FakeOutcome::Resolve);
        let outcome =
            activate_with(CopyActivation::Continue, &clipboard, "hello@example.com").await;

        assert_eq!(outcome, Some(Ok(())));
        assert_eq!(*clipboard.written.borrow(), ["hello@example.com"]);
    }

    #[tokio::test]
    async fn unavailable_capability_maps_to_unsupported() {
        let clipboard = FakeClipboard::new(FakeOutcome::Unavailable);
        let result = write_with(&clipboard, "hello@example.com").await;
        assert_eq!(result, Err(CopyFailure::ClipboardUnsupported));
        assert_eq!(
            result.unwrap_err().message(),
            "Your browser does not support clipboard operations."
        );
    }
}

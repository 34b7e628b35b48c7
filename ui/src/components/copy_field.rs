use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::console_error;
use crate::features::copy_field::{
    CopyActivation, CopyFailure, CopyFieldState, CopyStatus, RESET_DELAY_MS,
};

#[derive(Props, PartialEq, Clone)]
pub struct CopyFieldButtonProps {
    /// Text shown in the field and written to the clipboard on activation.
    pub value: String,
    #[props(default)]
    pub class: String,
    /// Runs before the copy attempt; returning [`CopyActivation::Skip`]
    /// suppresses the attempt entirely.
    #[props(default)]
    pub on_activate: Option<Callback<MouseEvent, CopyActivation>>,
}

#[cfg(feature = "web")]
async fn attempt_copy(
    directive: CopyActivation,
    value: &str,
) -> Option<Result<(), CopyFailure>> {
    crate::features::copy_field::activate_browser_copy(directive, value).await
}

#[cfg(not(feature = "web"))]
async fn attempt_copy(
    directive: CopyActivation,
    _value: &str,
) -> Option<Result<(), CopyFailure>> {
    match directive {
        CopyActivation::Skip => None,
        CopyActivation::Continue => Some(Err(CopyFailure::ClipboardUnsupported)),
    }
}

/// Displays a value with a copy affordance and reflects the outcome of the
/// last copy attempt for [`RESET_DELAY_MS`] before returning to idle.
///
/// Failures never escape: both an unusable clipboard and a rejected write
/// end up as a transient message in the status region. Overlapping
/// activations each issue their own write; whichever settles last owns the
/// visible state, and only its reset timer is honored.
#[component]
pub fn CopyFieldButton(props: CopyFieldButtonProps) -> Element {
    let mut state = use_signal(CopyFieldState::new);

    let value = props.value.clone();
    let on_activate = props.on_activate;

    let handle_activation = move |event: MouseEvent| {
        let directive = match &on_activate {
            Some(handler) => handler.call(event),
            None => CopyActivation::Continue,
        };

        let value = value.clone();
        spawn(async move {
            // `Skip` yields no outcome: no write was issued and the visible
            // state must not move.
            let Some(outcome) = attempt_copy(directive, &value).await else {
                return;
            };
            if let Err(failure) = &outcome {
                console_error!("Copy to clipboard failed: {}", failure.message());
            }

            // The token ties this activation to its own reset timer; a newer
            // activation invalidates it so a stale timer cannot flick the
            // field back to idle. Dropping the task on unmount cancels the
            // pending reset outright.
            let token = state.write().settle(outcome);
            TimeoutFuture::new(RESET_DELAY_MS).await;
            state.write().reset_if_current(token);
        });
    };

    let status = state.read().status();
    let status_message = match status {
        CopyStatus::Failed(failure) => failure.message(),
        _ => "",
    };

    rsx! {
        div {
            class: "copy-field-wrapper",

            button {
                class: "copy-field {props.class}",
                r#type: "button",
                onclick: handle_activation,
                span { "{props.value}" }
                if status == CopyStatus::Copied {
                    CheckIcon { class: "icon copy-field-success" }
                } else {
                    CopyIcon {}
                }
            }

            span {
                class: "copy-field-status",
                role: "status",
                aria_live: "polite",
                "{status_message}"
            }
        }
    }
}

//! `navigator.clipboard` backed implementation of [`ClipboardWrite`].

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use super::{ClipboardError, ClipboardWrite};
use crate::console_warn;

/// Handle to the browser clipboard, acquired once per copy attempt.
pub struct NavigatorClipboard {
    inner: web_sys::Clipboard,
}

impl NavigatorClipboard {
    /// Probe `navigator.clipboard` and return a handle if it is usable.
    ///
    /// The property is read through `Reflect` rather than the typed binding:
    /// some environments define a throwing getter, and a throw while probing
    /// must be indistinguishable from the property being absent.
    pub fn acquire() -> Result<Self, ClipboardError> {
        let navigator: JsValue = window()
            .map(|w| w.navigator().into())
            .ok_or(ClipboardError::Unavailable)?;

        let property = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| {
                console_warn!("Accessing navigator.clipboard raised an error");
                ClipboardError::Unavailable
            })?;

        if property.is_undefined() || property.is_null() {
            return Err(ClipboardError::Unavailable);
        }

        let inner = property
            .dyn_into::<web_sys::Clipboard>()
            .map_err(|_| ClipboardError::Unavailable)?;

        Ok(Self { inner })
    }
}

#[async_trait(?Send)]
impl ClipboardWrite for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        JsFuture::from(self.inner.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::WriteRejected {
                reason: err
                    .as_string()
                    .unwrap_or_else(|| format!("{:?}", err)),
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn acquire_finds_the_browser_clipboard() {
        // Browsers running the test harness serve it from a secure context,
        // so navigator.clipboard is defined even if writes would be denied.
        assert!(NavigatorClipboard::acquire().is_ok());
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Transient message line for validation feedback.
pub struct StatusLine {
    element: HtmlElement,
}

impl StatusLine {
    pub fn attach(document: &Document, selector: &str) -> Result<Self, JsValue> {
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(selector))?
            .dyn_into::<HtmlElement>()?;

        Ok(Self { element })
    }

    /// Show `message` and schedule a one-shot clear after `clear_after_ms`.
    ///
    /// Timers are not cancelled: if a second message lands before the first
    /// timer fires, both timers clear the line and the late one is a no-op.
    pub fn show_transient(&self, message: &str, clear_after_ms: u32) -> Result<(), JsValue> {
        self.element.set_text_content(Some(message));

        let element = self.element.clone();
        let clear = Closure::once_into_js(move || {
            element.set_text_content(Some(""));
        });

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.unchecked_ref(),
            clear_after_ms as i32,
        )?;

        Ok(())
    }
}

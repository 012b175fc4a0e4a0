//! Document-level key routing for a mounted tour.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use carousel::Command;
use carousel::keys::command_for_key;

/// Modifier and focus context of a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Focus is inside an input, textarea or contenteditable element.
    pub in_text_field: bool,
    /// Focus is on a button, link or select, which activate on Enter.
    pub on_control: bool,
}

/// Carousel command for a key, or `None` when the key should be left to
/// the browser.
#[must_use]
pub fn tour_command(key: &str, context: KeyContext) -> Option<Command> {
    if context.ctrl || context.alt || context.meta || context.in_text_field {
        return None;
    }
    if context.on_control && key == "Enter" {
        return None;
    }
    command_for_key(key)
}

#[cfg(feature = "hydrate")]
pub fn context_of(ev: &leptos::ev::KeyboardEvent) -> KeyContext {
    use wasm_bindgen::JsCast as _;

    let target = ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok());
    let tag = target.as_ref().map(|el| el.tag_name()).unwrap_or_default();
    let is_tag = |name: &str| tag.eq_ignore_ascii_case(name);
    let in_text_field =
        is_tag("input") || is_tag("textarea") || target.as_ref().is_some_and(web_sys::HtmlElement::is_content_editable);
    let on_control = is_tag("button") || is_tag("a") || is_tag("select");
    KeyContext { ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key(), in_text_field, on_control }
}

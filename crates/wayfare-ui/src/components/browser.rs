//! Browser glue shared by the link components.

use crate::core::click::ClickInput;
use gloo::console;
use gloo::utils::window;
use web_sys::MouseEvent;

/// Copies the fields the click logic needs out of a DOM event.
pub(crate) fn click_input(event: &MouseEvent) -> ClickInput {
    ClickInput {
        button: event.button(),
        meta_key: event.meta_key(),
        ctrl_key: event.ctrl_key(),
        shift_key: event.shift_key(),
        alt_key: event.alt_key(),
    }
}

pub(crate) fn open_new_context(url: &str) {
    match window().open_with_url(url) {
        Ok(Some(_)) => {}
        Ok(None) => console::warn!("new browsing context was blocked", url),
        Err(err) => console::error!("window.open failed", url, err),
    }
}

pub(crate) fn navigate_current(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        console::error!("location update failed", url, err);
    }
}

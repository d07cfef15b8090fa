//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::core::error::DirectionsError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Open `url` in a new browsing context (`target="_blank"`).
pub fn open_in_new_tab(url: &str) -> Result<(), DirectionsError> {
    let window = window().ok_or(DirectionsError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        // Popup blockers return null instead of throwing
        Ok(None) | Err(_) => Err(DirectionsError::OpenFailed),
    }
}

/// Smoothly scroll the element with the given DOM id into view, if present.
pub fn scroll_into_view(id: &str) {
    if let Some(document) = window().and_then(|w| w.document())
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

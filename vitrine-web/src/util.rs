//! Small browser helpers

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the element with the given id into view.
/// Missing elements are a no-op, not an error.
pub fn scroll_to(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

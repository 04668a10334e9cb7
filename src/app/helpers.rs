//! Shared page-mutation helpers.
//!
//! This module contains helper functions that operate on marker classes
//! and are used across multiple controllers.

use crate::page::{ElementId, Page};

/// Set a marker class to a desired on/off state.
///
/// Class-list mutation is idempotent at the backend, so callers may apply
/// the same state repeatedly without churn.
pub fn set_marker<P: Page>(page: &mut P, el: ElementId, class: &str, on: bool) {
    if on {
        page.add_class(el, class);
    } else {
        page.remove_class(el, class);
    }
}

/// Remove a marker class from every element in a slice.
pub fn clear_markers<P: Page>(page: &mut P, els: &[ElementId], class: &str) {
    for el in els {
        page.remove_class(*el, class);
    }
}

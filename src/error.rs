//! Runtime error taxonomy.
//!
//! Failures here are feature-scoped, never page-fatal: the composition
//! root logs them and disables the affected controller.

use thiserror::Error;

use crate::page::PageError;

/// Errors surfaced while wiring or running a controller.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A selector the controller depends on matched nothing.
    #[error("required element not found: {selector}")]
    ElementNotFound {
        /// The selector that came up empty.
        selector: &'static str,
    },

    /// The page backend refused a listener registration or removal.
    #[error("listener operation failed: {0}")]
    Listener(#[from] PageError),

    /// Configuration could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),
}

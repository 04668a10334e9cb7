//! Pure state and configuration types (no backend dependencies).

pub mod config;
pub mod constants;
pub mod state;

pub use config::RuntimeConfig;
pub use state::{MenuState, ScrollPosture};

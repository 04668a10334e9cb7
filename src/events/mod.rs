//! Event system for decoupled inter-module communication.
//!
//! This module provides a simple publish/subscribe mechanism using Rust's
//! standard library `mpsc` channels. It enables:
//!
//! - **Decoupled architecture**: Sources publish events without knowing who handles them
//! - **Thread safety**: Multiple publishers can send events concurrently
//! - **Testability**: Event types are pure Rust enums, easily testable without a backend
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Clicks    │     │   Scroll    │     │   Resize    │
//! │  (backend)  │     │  (backend)  │     │  (backend)  │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │                   │                   │
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │                 (App::tick, host-paced)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global bus: the composition root ([`crate::app::App`]) owns
//! the `EventBus` and hands out publisher handles to sources.
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`PageEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use types::PageEvent;

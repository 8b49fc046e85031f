//! # Solution Matcher Node Runtime
//!
//! Wires the [`matcher_core::MatcherService`] onto the
//! [`matcher_bus::MatcherBus`] and runs the event loop.
//!
//! ## Event flow
//!
//! ```text
//! /input ───────┐
//!               ▼
//!          ┌──────────────────┐   tick (1 s)   ┌───────────┐
//! /target ─→  MatcherHandler  ├───────────────→│ /solution │
//!          └──────────────────┘                └───────────┘
//! ```
//!
//! Inbound handling and tick evaluation are arms of one `select!` loop
//! in a single task, so they are mutually exclusive: an update that
//! lands before a tick fires is fully visible to that tick, and no
//! update is ever applied mid-search.

pub mod config;
pub mod handler;
pub mod runtime;

pub use config::{load_config, NodeConfig};
pub use handler::MatcherHandler;
pub use runtime::MatcherRuntime;

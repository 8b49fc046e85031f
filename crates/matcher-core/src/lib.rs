//! # matcher-core
//!
//! The **SolutionMatcher** component: holds the most recently received
//! search array and target value, and on every periodic tick runs an
//! exhaustive pair-sum search over the current state.
//!
//! ## Overview
//!
//! - **Latest-value semantics**: each inbound update replaces the stored
//!   array or target wholesale; nothing is appended or merged.
//! - **Arrival gating**: ticks are no-ops until both inputs have arrived
//!   at least once. Arrival is monotonic: once seen, never forgotten.
//! - **Deterministic tie-break**: the search enumerates index pairs with
//!   `i` ascending and `j` ascending from `i + 1`, so the result is
//!   always the lexicographically smallest matching pair.
//! - **Read-only ticks**: evaluation never mutates state, so an
//!   unchanged (array, target) pair yields the identical solution on
//!   every subsequent tick.
//!
//! ```text
//! /input ──┐
//!          ├──→ [ MatcherState ] ──tick──→ find_pair ──→ /solution
//! /target ─┘
//! ```
//!
//! This crate is pure domain logic: no I/O, no channels, no timers. The
//! runtime crate owns the event loop and drives [`MatcherService`].

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod domain;
pub mod service;

pub use domain::{find_pair, MatcherState, Solution};
pub use service::{MatcherConfig, MatcherService};

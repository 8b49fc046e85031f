//! # Solution Matcher Test Suite
//!
//! Cross-crate tests driving the full choreography: publish on `/input`
//! and `/target`, let the paused-clock ticks fire, and observe
//! `/solution`.
//!
//! ```bash
//! cargo test -p matcher-tests
//! ```
//!
//! Unit tests for the search, the state machine, and the bus live in
//! their own crates; this suite covers end-to-end behavior only.

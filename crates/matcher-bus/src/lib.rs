//! # Matcher Bus - Channel Layer for the Solution Matcher
//!
//! In-process publish/subscribe bus carrying the three channel bindings
//! the matcher exposes to collaborators:
//!
//! | Channel     | Direction | Payload                          |
//! |-------------|-----------|----------------------------------|
//! | `/input`    | inbound   | full replacement search array    |
//! | `/target`   | inbound   | replacement target value         |
//! | `/solution` | outbound  | index pair `[i, j]` with `i < j` |
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Publisher   │                    │  Matcher     │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  MatcherBus  │ ─────────┘
//!                  └──────────────┘  subscribe(TopicSet)
//! ```
//!
//! One broadcast channel carries all three topics; each subscription
//! names the topics it wants in a [`TopicSet`] and discards the rest on
//! its own side. Delivery is best-effort: a subscriber that falls
//! behind the buffer capacity loses the oldest events, and an event
//! published with no subscribers at all is dropped.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod bus;
pub mod events;

// Re-export main types
pub use bus::{EventPublisher, EventStream, MatcherBus, Subscription, SubscriptionError};
pub use events::{MatcherEvent, Topic, TopicSet};

/// Maximum events buffered per subscriber before the oldest are lost.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

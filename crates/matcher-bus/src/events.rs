//! Messages and channel topics.

use serde::{Deserialize, Serialize};

/// All messages that can be published to the bus.
///
/// Payloads mirror the wire shape of the channels: the search array and
/// the emitted solution are both sequences of 8-bit signed integers, the
/// target is a single one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatcherEvent {
    /// Full replacement for the search array, delivered on `/input`.
    ///
    /// Any length and content is legal, including empty and
    /// single-element arrays (which can never produce a solution).
    InputArray(Vec<i8>),

    /// Replacement target value, delivered on `/target`.
    Target(i8),

    /// A solved index pair `[i, j]` with `i < j`, delivered on
    /// `/solution`. Always exactly two elements.
    Solution(Vec<i8>),
}

impl MatcherEvent {
    /// The topic this event is delivered on.
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::InputArray(_) => Topic::Input,
            Self::Target(_) => Topic::Target,
            Self::Solution(_) => Topic::Solution,
        }
    }
}

/// The three channel bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// The `/input` channel.
    Input,
    /// The `/target` channel.
    Target,
    /// The `/solution` channel.
    Solution,
}

impl Topic {
    /// The channel name as advertised to collaborators.
    #[must_use]
    pub fn channel(self) -> &'static str {
        match self {
            Self::Input => "/input",
            Self::Target => "/target",
            Self::Solution => "/solution",
        }
    }
}

/// The set of topics a subscriber wants delivered.
///
/// With exactly three channels a fixed set of flags is enough; there is
/// no list to allocate and membership is a field read. The two sets the
/// system actually uses are provided as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSet {
    input: bool,
    target: bool,
    solution: bool,
}

impl TopicSet {
    /// Every channel.
    pub const ALL: Self = Self {
        input: true,
        target: true,
        solution: true,
    };

    /// The matcher's own subscription: both inbound channels, but not
    /// its own output.
    pub const INBOUND: Self = Self {
        input: true,
        target: true,
        solution: false,
    };

    /// A single-topic set.
    #[must_use]
    pub const fn only(topic: Topic) -> Self {
        Self {
            input: matches!(topic, Topic::Input),
            target: matches!(topic, Topic::Target),
            solution: matches!(topic, Topic::Solution),
        }
    }

    /// This set, extended with one more topic.
    #[must_use]
    pub const fn with(self, topic: Topic) -> Self {
        Self {
            input: self.input || matches!(topic, Topic::Input),
            target: self.target || matches!(topic, Topic::Target),
            solution: self.solution || matches!(topic, Topic::Solution),
        }
    }

    /// Whether a topic is in the set.
    #[must_use]
    pub const fn contains(self, topic: Topic) -> bool {
        match topic {
            Topic::Input => self.input,
            Topic::Target => self.target,
            Topic::Solution => self.solution,
        }
    }

    /// Whether an event's topic is in the set.
    #[must_use]
    pub fn accepts(self, event: &MatcherEvent) -> bool {
        self.contains(event.topic())
    }
}

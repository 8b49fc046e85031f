//! Latest-value state owned by the matcher.

/// The matcher's owned state: the most recent array, the most recent
/// target, and whether each has ever arrived.
///
/// Updates replace wholesale; there are no append semantics and stale
/// data is never merged back in. Arrival is monotonic: neither flag is
/// ever reset for the life of the component.
#[derive(Debug, Default)]
pub struct MatcherState {
    /// Most recently received search array.
    values: Vec<i8>,

    /// Most recently received target; `None` until the first `/target`
    /// message arrives.
    target: Option<i8>,

    /// Whether an array has ever arrived. Needed separately from the
    /// vector itself because an empty array is a legal first message.
    array_received: bool,
}

impl MatcherState {
    /// Fresh state: nothing arrived yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored array and mark it as arrived.
    pub fn apply_input(&mut self, values: Vec<i8>) {
        self.values = values;
        self.array_received = true;
    }

    /// Replace the stored target and mark it as arrived.
    pub fn apply_target(&mut self, target: i8) {
        self.target = Some(target);
    }

    /// Both inputs have arrived at least once.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.array_received && self.target.is_some()
    }

    /// The current array.
    #[must_use]
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    /// The current target, if one has arrived.
    #[must_use]
    pub fn target(&self) -> Option<i8> {
        self.target
    }
}

//! Change detection for values that are observed on every render.

/// Remembers the last value it observed and reports when a new one arrives.
///
/// Rendering may happen any number of times for the same input. Side effects that must run once
/// per input keep one of these around and only fire when [`ChangeWatch::observe`] returns `true`.
#[derive(Debug, Clone)]
pub struct ChangeWatch<K> {
    last: Option<K>,
}

impl<K> Default for ChangeWatch<K> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: PartialEq + Clone> ChangeWatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` and return whether it differs from the previously observed one.
    ///
    /// The first observation always counts as a change.
    pub fn observe(&mut self, value: &K) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }
}

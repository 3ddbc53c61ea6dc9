//! Bounded history of state snapshots for debugging

use std::collections::VecDeque;

use serde::Serialize;

use crate::error::Result;
use crate::state::InteractionState;

/// One recorded state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugSnapshot {
    /// Sequence number since mount
    pub id: usize,
    pub state: InteractionState,
}

/// Keeps the last `capacity` snapshots
#[derive(Clone, Debug)]
pub struct DebugHistory {
    entries: VecDeque<DebugSnapshot>,
    capacity: usize,
    next_id: usize,
}

impl DebugHistory {
    /// Create an empty history; a zero capacity is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Append a snapshot, evicting the oldest beyond capacity
    pub fn record(&mut self, state: &InteractionState) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(DebugSnapshot {
            id: self.next_id,
            state: state.clone(),
        });
        self.next_id += 1;
    }

    /// Retained snapshots, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &DebugSnapshot> {
        self.entries.iter()
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON of the retained snapshots
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_entries() {
        let mut history = DebugHistory::new(5);
        let mut state = InteractionState::default();
        for i in 0..8 {
            state.query_text = format!("q{}", i);
            history.record(&state);
        }
        assert_eq!(history.len(), 5);
        let ids: Vec<usize> = history.snapshots().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert_eq!(
            history.snapshots().last().map(|s| s.state.query_text.as_str()),
            Some("q7")
        );
    }

    #[test]
    fn test_json_output() {
        let mut history = DebugHistory::new(0);
        history.record(&InteractionState::new("Ma", None));
        let json = history.to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["id"], 0);
        assert_eq!(value[0]["state"]["query_text"], "Ma");
        assert_eq!(value[0]["state"]["highlighted_index"], serde_json::Value::Null);
    }
}

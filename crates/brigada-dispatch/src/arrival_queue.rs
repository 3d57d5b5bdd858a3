//! First-come, first-served record of calls.

use std::collections::VecDeque;

use brigada_types::{EmergencyCall, EmergencyId};

use crate::call_table::CallTable;

/// Calls in the order they were registered. Nothing is ever dequeued.
#[derive(Debug, Clone, Default)]
pub struct ArrivalQueue {
    ids: VecDeque<EmergencyId>,
}

impl ArrivalQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            ids: VecDeque::new(),
        }
    }

    /// Append a call at the back.
    pub fn enqueue(&mut self, id: EmergencyId) {
        self.ids.push_back(id);
    }

    /// Calls front to back, resolved against the call table.
    pub fn to_sequence(&self, calls: &CallTable) -> Vec<EmergencyCall> {
        self.ids
            .iter()
            .filter_map(|&id| calls.get(id).cloned())
            .collect()
    }

    /// Number of queued calls.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

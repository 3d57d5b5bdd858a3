//! Owned table of emergency calls keyed by id.
//!
//! This is the only place a call record lives. The priority and arrival
//! queues hold ids and resolve records here, so a status change is seen
//! by every view at once.

use std::collections::BTreeMap;

use brigada_types::{CallStatus, EmergencyCall, EmergencyId};

/// Arena of emergency calls.
#[derive(Debug, Clone, Default)]
pub struct CallTable {
    calls: BTreeMap<EmergencyId, EmergencyCall>,
}

impl CallTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            calls: BTreeMap::new(),
        }
    }

    /// Store a call. A call with the same id is replaced.
    pub fn insert(&mut self, call: EmergencyCall) {
        self.calls.insert(call.id, call);
    }

    /// Look up a call.
    pub fn get(&self, id: EmergencyId) -> Option<&EmergencyCall> {
        self.calls.get(&id)
    }

    /// Change the status of a call. Returns `false` if the id is unknown.
    ///
    /// Callers outside this crate go through
    /// [`PriorityDispatchQueue::update_status`](crate::PriorityDispatchQueue::update_status).
    pub(crate) fn set_status(&mut self, id: EmergencyId, status: CallStatus) -> bool {
        match self.calls.get_mut(&id) {
            Some(call) => {
                call.status = status;
                true
            }
            None => false,
        }
    }

    /// Number of calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

//! Priority ordering of emergency calls.
//!
//! Keys are kept in a [`BTreeSet`] ordered highest priority first, with
//! the lower (older) id winning ties. Records themselves stay in the
//! [`CallTable`]; the queue never dequeues.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use brigada_types::{CallStatus, EmergencyCall, EmergencyId, Severity, VegetationType};

use crate::call_table::CallTable;

/// Priority score of a call: severity scaled by the vegetation weight.
pub fn compute_priority(severity: Severity, vegetation: VegetationType) -> f64 {
    f64::from(severity.get()) * vegetation.weight()
}

/// Ordering key for a call in the priority queue.
#[derive(Debug, Clone, Copy)]
struct DispatchKey {
    priority: f64,
    id: EmergencyId,
}

impl Ord for DispatchKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for DispatchKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DispatchKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DispatchKey {}

/// Non-destructive priority view over every registered call.
#[derive(Debug, Clone, Default)]
pub struct PriorityDispatchQueue {
    keys: BTreeSet<DispatchKey>,
}

impl PriorityDispatchQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }

    /// Index a call by its priority.
    pub fn insert(&mut self, call: &EmergencyCall) {
        self.keys.insert(DispatchKey {
            priority: call.priority,
            id: call.id,
        });
    }

    /// Ids in dispatch order.
    pub fn ids(&self) -> impl Iterator<Item = EmergencyId> + '_ {
        self.keys.iter().map(|k| k.id)
    }

    /// Every call in dispatch order. The queue is left untouched.
    pub fn snapshot_ordered(&self, calls: &CallTable) -> Vec<EmergencyCall> {
        self.ids().filter_map(|id| calls.get(id).cloned()).collect()
    }

    /// Find a queued call.
    pub fn find_by_id<'a>(
        &self,
        id: EmergencyId,
        calls: &'a CallTable,
    ) -> Option<&'a EmergencyCall> {
        if self.contains(id) {
            calls.get(id)
        } else {
            None
        }
    }

    /// Change the status of a queued call. Returns `false` if the call is
    /// not in the queue.
    ///
    /// This is the only way a call's status changes. Status is not part of
    /// the ordering key, so the queue itself is not modified; the write
    /// lands in the shared call table and every view resolving through it
    /// sees the new value.
    pub fn update_status(
        &self,
        id: EmergencyId,
        status: CallStatus,
        calls: &mut CallTable,
    ) -> bool {
        self.contains(id) && calls.set_status(id, status)
    }

    /// Whether a call with this id has been queued.
    pub fn contains(&self, id: EmergencyId) -> bool {
        self.keys.iter().any(|k| k.id == id)
    }

    /// Number of queued calls.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn call(id: u64, severity: u8, vegetation: VegetationType) -> EmergencyCall {
        let severity = Severity::new(severity).unwrap();
        EmergencyCall {
            id: EmergencyId(id),
            location: "Zona Norte".to_owned(),
            severity,
            vegetation_type: vegetation,
            weather_condition: "dry".to_owned(),
            priority: compute_priority(severity, vegetation),
            status: CallStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn build(calls: &[EmergencyCall]) -> (PriorityDispatchQueue, CallTable) {
        let mut queue = PriorityDispatchQueue::new();
        let mut table = CallTable::new();
        for c in calls {
            queue.insert(c);
            table.insert(c.clone());
        }
        (queue, table)
    }

    #[test]
    fn priority_formula() {
        let p = compute_priority(Severity::new(4).unwrap(), VegetationType::MataAtlantica);
        assert!((p - 6.0).abs() < 1e-9);
        let p = compute_priority(Severity::new(5).unwrap(), VegetationType::Pantanal);
        assert!((p - 10.0).abs() < 1e-9);
    }

    #[test]
    fn orders_by_descending_priority() {
        let (queue, table) = build(&[
            call(1, 3, VegetationType::Cerrado),
            call(2, 5, VegetationType::Pantanal),
            call(3, 2, VegetationType::Other),
        ]);
        let ids: Vec<u64> = queue
            .snapshot_ordered(&table)
            .iter()
            .map(|c| c.id.into_inner())
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn ties_break_on_lower_id() {
        let (queue, table) = build(&[
            call(7, 2, VegetationType::Other),
            call(3, 2, VegetationType::Other),
            call(5, 2, VegetationType::Other),
        ]);
        let ids: Vec<u64> = queue.ids().map(EmergencyId::into_inner).collect();
        assert_eq!(ids, vec![3, 5, 7]);
        assert_eq!(queue.snapshot_ordered(&table).len(), 3);
    }

    #[test]
    fn snapshot_is_non_destructive() {
        let (queue, table) = build(&[
            call(1, 1, VegetationType::Other),
            call(2, 4, VegetationType::Cerrado),
        ]);
        let first = queue.snapshot_ordered(&table);
        let second = queue.snapshot_ordered(&table);
        assert_eq!(first, second);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn update_status_is_visible_in_snapshot() {
        let (queue, mut table) = build(&[call(1, 3, VegetationType::Cerrado)]);
        assert!(queue.update_status(EmergencyId(1), CallStatus::InProgress, &mut table));
        assert!(!queue.update_status(EmergencyId(9), CallStatus::InProgress, &mut table));
        assert_eq!(
            queue
                .find_by_id(EmergencyId(1), &table)
                .map(|c| c.status),
            Some(CallStatus::InProgress)
        );
        assert!(queue.find_by_id(EmergencyId(9), &table).is_none());
    }
}

//! Append-only ledger of affected areas.
//!
//! Entries form a singly linked sequence stored in an arena: each node
//! holds the index of its successor, and the ledger tracks both ends so
//! appends are O(1). Lookups walk from the head.

use brigada_types::{AffectedArea, AreaStatus, EmergencyId};

#[derive(Debug, Clone)]
struct AreaNode {
    area: AffectedArea,
    next: Option<usize>,
}

/// Ledger of areas, one per emergency, in registration order.
#[derive(Debug, Clone, Default)]
pub struct AreaLedger {
    nodes: Vec<AreaNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl AreaLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Append an area at the tail.
    pub fn append(
        &mut self,
        emergency_id: EmergencyId,
        location: impl Into<String>,
        status: AreaStatus,
    ) {
        let index = self.nodes.len();
        self.nodes.push(AreaNode {
            area: AffectedArea {
                emergency_id,
                location: location.into(),
                status,
            },
            next: None,
        });
        match self.tail.and_then(|t| self.nodes.get_mut(t)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Change the status of the first area recorded for an emergency.
    /// Returns `false` if no area matches.
    pub fn update_status(&mut self, emergency_id: EmergencyId, status: AreaStatus) -> bool {
        let Some(index) = self.position(emergency_id) else {
            return false;
        };
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.area.status = status;
                true
            }
            None => false,
        }
    }

    /// Iterate areas head to tail. Each call starts a fresh walk.
    pub const fn all(&self) -> Areas<'_> {
        Areas {
            nodes: self.nodes.as_slice(),
            cursor: self.head,
        }
    }

    /// First area recorded for an emergency.
    pub fn find_by_id(&self, emergency_id: EmergencyId) -> Option<&AffectedArea> {
        self.all().find(|a| a.emergency_id == emergency_id)
    }

    /// Number of areas.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the ledger is empty.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, emergency_id: EmergencyId) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.nodes.get(index)?;
            if node.area.emergency_id == emergency_id {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }
}

/// Borrowing iterator over an [`AreaLedger`].
#[derive(Debug, Clone)]
pub struct Areas<'a> {
    nodes: &'a [AreaNode],
    cursor: Option<usize>,
}

impl<'a> Iterator for Areas<'a> {
    type Item = &'a AffectedArea;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> AreaLedger {
        let mut ledger = AreaLedger::new();
        ledger.append(EmergencyId(1), "Zona Norte", AreaStatus::Active);
        ledger.append(EmergencyId(2), "Mata Alta", AreaStatus::Active);
        ledger.append(EmergencyId(3), "Zona Sul", AreaStatus::Active);
        ledger
    }

    #[test]
    fn iterates_in_append_order() {
        let ledger = ledger();
        let ids: Vec<u64> = ledger.all().map(|a| a.emergency_id.into_inner()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Restartable.
        assert_eq!(ledger.all().count(), 3);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn empty_ledger_yields_nothing() {
        let ledger = AreaLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.all().next(), None);
        assert!(ledger.find_by_id(EmergencyId(1)).is_none());
    }

    #[test]
    fn update_status_touches_one_area() {
        let mut ledger = ledger();
        assert!(ledger.update_status(EmergencyId(2), AreaStatus::Resolved));
        assert!(!ledger.update_status(EmergencyId(9), AreaStatus::Resolved));
        let statuses: Vec<AreaStatus> = ledger.all().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![AreaStatus::Active, AreaStatus::Resolved, AreaStatus::Active]
        );
        assert_eq!(
            ledger.find_by_id(EmergencyId(2)).map(|a| a.location.as_str()),
            Some("Mata Alta")
        );
    }
}

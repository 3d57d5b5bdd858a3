//! Per-team history of actions.

use std::collections::BTreeMap;

use brigada_types::{EmergencyId, TeamAction, TeamId};
use chrono::Utc;

/// Action history keyed by team. Each team's entries are stored oldest
/// first and read back newest first.
#[derive(Debug, Clone, Default)]
pub struct TeamActionLog {
    entries: BTreeMap<TeamId, Vec<TeamAction>>,
}

impl TeamActionLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record an action stamped with the current time.
    pub fn push(
        &mut self,
        team_id: TeamId,
        emergency_id: Option<EmergencyId>,
        description: impl Into<String>,
    ) {
        self.entries.entry(team_id).or_default().push(TeamAction {
            team_id,
            emergency_id,
            description: description.into(),
            timestamp: Utc::now(),
        });
    }

    /// A team's actions, most recent first. Empty for a team with no
    /// history.
    pub fn history(&self, team_id: TeamId) -> impl Iterator<Item = &TeamAction> {
        self.entries
            .get(&team_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .rev()
    }

    /// Total number of recorded actions.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

//! Roster of field teams and their availability.

use brigada_types::{Team, TeamId, TeamStatus};

/// Default roster as `(id, name, home_base)`. Every team starts available.
pub const DEFAULT_ROSTER: &[(u32, &str, &str)] = &[
    (1, "Equipe Alpha", "Base Central"),
    (2, "Equipe Bravo", "Base Central"),
    (3, "Equipe Charlie", "Vila Verde"),
];

/// Fixed roster of teams. Teams are never added or removed after
/// construction; only their status changes.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Create a registry from a seed roster.
    pub const fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Create a registry holding the default three teams.
    pub fn with_default_roster() -> Self {
        Self::new(
            DEFAULT_ROSTER
                .iter()
                .map(|&(id, name, home_base)| Team {
                    id: TeamId(id),
                    name: name.to_owned(),
                    home_base: home_base.to_owned(),
                    status: TeamStatus::Available,
                })
                .collect(),
        )
    }

    /// Look up a team.
    pub fn find_by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Change a team's status. Returns `false` if the team is unknown.
    pub fn set_status(&mut self, id: TeamId, status: TeamStatus) -> bool {
        match self.teams.iter_mut().find(|t| t.id == id) {
            Some(team) => {
                team.status = status;
                true
            }
            None => false,
        }
    }

    /// All teams in roster order.
    pub const fn all(&self) -> &[Team] {
        self.teams.as_slice()
    }

    /// Number of teams.
    pub const fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the roster is empty.
    pub const fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

//! Type-safe numeric identifier wrappers.
//!
//! Emergencies and teams are both addressed by small integers at the
//! boundary. Wrapping them prevents passing a team id where an emergency
//! id is expected.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around an unsigned integer with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub $inner);

        impl $name {
            /// Return the inner numeric value.
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of an emergency call. Assigned by the coordinator,
    /// strictly increasing from 1 and never reused.
    EmergencyId(u64)
}

define_id! {
    /// Identifier of a field team in the roster.
    TeamId(u32)
}

impl EmergencyId {
    /// The first identifier handed out by a fresh coordinator.
    pub const FIRST: Self = Self(1);

    /// The identifier that follows this one.
    ///
    /// Saturates at `u64::MAX`, which no process lifetime can reach.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

//! Dispatch core for the Brigada wildfire dispatch engine.
//!
//! Calls are stored once in a [`CallTable`]; the priority and arrival
//! queues index it by id, so every view reports the same status. The
//! [`DispatchCoordinator`] owns every structure and the [`DispatchEngine`]
//! serializes access to it behind one lock.
//!
//! # Modules
//!
//! - [`action_log`] -- Per-team action history, newest first.
//! - [`area_ledger`] -- Append-only ledger of affected areas.
//! - [`arrival_queue`] -- Calls in registration order.
//! - [`call_table`] -- The single owned store of call records.
//! - [`config`] -- Configuration loading from `brigada-config.yaml`.
//! - [`coordinator`] -- Emergency creation, team assignment, queries.
//! - [`engine`] -- Thread-safe shared handle to the coordinator.
//! - [`error`] -- [`DispatchError`] and its failure report mapping.
//! - [`priority_queue`] -- Calls ordered by priority.
//! - [`team_registry`] -- The team roster.

pub mod action_log;
pub mod area_ledger;
pub mod arrival_queue;
pub mod call_table;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod priority_queue;
pub mod team_registry;

pub use action_log::TeamActionLog;
pub use area_ledger::{AreaLedger, Areas};
pub use arrival_queue::ArrivalQueue;
pub use call_table::CallTable;
pub use config::{ConfigError, DispatchConfig, LoggingConfig, MapConfig, TeamConfig};
pub use coordinator::DispatchCoordinator;
pub use engine::DispatchEngine;
pub use error::DispatchError;
pub use priority_queue::{PriorityDispatchQueue, compute_priority};
pub use team_registry::{DEFAULT_ROSTER, TeamRegistry};

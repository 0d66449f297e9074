//! Process (simulation input) model.
//!
//! A process describes a single unit of CPU demand: when it becomes
//! eligible to run, how much CPU time it needs, and how important it is.
//! All descriptors are known up front — there are no dynamic arrivals.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable per simulation run: every policy operates on its own
/// working copy and never mutates the caller's data.
///
/// # Time Representation
/// All times are integer ticks relative to a simulation epoch (t=0).
/// The consumer defines what one tick means (ms, time slice, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive, stable identity key).
    pub id: u32,
    /// Human-readable name (display only, never consulted by policies).
    pub name: String,
    /// Tick at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (>= 1).
    pub burst_time: i64,
    /// Scheduling priority. Lower value = higher priority; only the two
    /// priority policies consult this field.
    pub priority: i32,
}

impl Process {
    /// Creates a new process with the given identity and timing.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

//! Simulation result models.
//!
//! A `SchedulingResult` bundles the timeline a policy produced with the
//! derived per-process metrics and set-wide averages. It is a plain value
//! owned by the caller — the engine retains nothing across runs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | End of the process's last slice |
//! | Turnaround time | Completion - arrival |
//! | Waiting time | Turnaround - burst |
//! | Response time | Start of first slice - arrival |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// Per-process performance metrics.
///
/// Carries the input descriptor fields (denormalized for query
/// convenience) plus the four derived times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Required CPU time.
    pub burst_time: i64,
    /// Scheduling priority.
    pub priority: i32,
    /// End tick of the process's last execution slice.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`. Negative only if the policy is buggy.
    pub waiting_time: i64,
    /// Start tick of the first slice minus arrival. Negative only if the
    /// policy is buggy.
    pub response_time: i64,
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Per-process metrics, in input order (not execution order).
    pub processes: Vec<ProcessResult>,
    /// Execution slices, ordered by non-decreasing start time.
    pub timeline: Timeline,
    /// Arithmetic mean of waiting times.
    pub average_waiting_time: f64,
    /// Arithmetic mean of turnaround times.
    pub average_turnaround_time: f64,
}

impl ProcessResult {
    /// Builds a result record from a process and its observed slice bounds.
    pub(crate) fn derive(process: &Process, first_start: i64, completion: i64) -> Self {
        let turnaround_time = completion - process.arrival_time;
        Self {
            id: process.id,
            name: process.name.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time: completion,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        }
    }
}

impl SchedulingResult {
    /// Latest completion tick across the whole timeline (0 when empty).
    ///
    /// Timeline renderers use this for horizontal scaling.
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|ev| ev.end_time).max().unwrap_or(0)
    }
}

//! Simulation entry points.
//!
//! Maps a policy identifier to its implementation, validates the input,
//! runs the simulation, and aggregates metrics.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::run_policy;
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let result = run_policy("roundRobin", &processes, 2).unwrap();
//! assert_eq!(result.timeline.len(), 8);
//! assert_eq!(result.makespan(), 16);
//! ```

mod metrics;

pub use metrics::aggregate;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SchedulingResult};
use crate::policies::{
    Fcfs, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, SchedulingPolicy, Sjf, Srtf,
};
use crate::validation::{validate_processes, ValidationError};

/// Identifier of a scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyId {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Round robin with a caller-supplied time quantum.
    RoundRobin,
    /// Priority, non-preemptive.
    PriorityNonPreemptive,
    /// Priority, preemptive.
    PriorityPreemptive,
}

impl PolicyId {
    /// Every policy, in presentation order. Comparison views iterate this.
    pub const ALL: [PolicyId; 6] = [
        PolicyId::Fcfs,
        PolicyId::Sjf,
        PolicyId::Srtf,
        PolicyId::RoundRobin,
        PolicyId::PriorityNonPreemptive,
        PolicyId::PriorityPreemptive,
    ];

    /// Wire identifier of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyId::Fcfs => "fcfs",
            PolicyId::Sjf => "sjf",
            PolicyId::Srtf => "srtf",
            PolicyId::RoundRobin => "roundRobin",
            PolicyId::PriorityNonPreemptive => "priorityNonPreemptive",
            PolicyId::PriorityPreemptive => "priorityPreemptive",
        }
    }

    /// Parses a wire identifier. `None` for anything unrecognized.
    pub fn parse(id: &str) -> Option<Self> {
        PolicyId::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

/// Runs one policy over the process set and aggregates metrics.
///
/// The input is validated first; simulation never starts on malformed
/// data. Each call works on its own private copy of the process set, so
/// concurrent calls share no mutable state and the caller's slice is
/// never mutated. `time_quantum` is consulted only by `RoundRobin`.
pub fn simulate(
    policy: PolicyId,
    processes: &[Process],
    time_quantum: i64,
) -> Result<SchedulingResult, Vec<ValidationError>> {
    validate_processes(processes)?;

    let timeline = match policy {
        PolicyId::Fcfs => Fcfs.run(processes),
        PolicyId::Sjf => Sjf.run(processes),
        PolicyId::Srtf => Srtf.run(processes),
        PolicyId::RoundRobin => RoundRobin::new(time_quantum).run(processes),
        PolicyId::PriorityNonPreemptive => PriorityNonPreemptive.run(processes),
        PolicyId::PriorityPreemptive => PriorityPreemptive.run(processes),
    };

    Ok(aggregate(processes, timeline))
}

/// String-keyed entry point for presentation layers.
///
/// Unrecognized identifiers silently fall back to FCFS; this is
/// documented behavior, not an error. Callers that want a hard failure
/// on bad identifiers should go through [`PolicyId::parse`] and
/// [`simulate`] instead.
pub fn run_policy(
    policy_id: &str,
    processes: &[Process],
    time_quantum: i64,
) -> Result<SchedulingResult, Vec<ValidationError>> {
    let policy = PolicyId::parse(policy_id).unwrap_or(PolicyId::Fcfs);
    simulate(policy, processes, time_quantum)
}

/// Runs every policy once over the same process set.
///
/// Backs comparison views that rank policies by average waiting or
/// turnaround time. Input is validated before any policy runs.
pub fn compare_all(
    processes: &[Process],
    time_quantum: i64,
) -> Result<Vec<(PolicyId, SchedulingResult)>, Vec<ValidationError>> {
    validate_processes(processes)?;
    let mut results = Vec::with_capacity(PolicyId::ALL.len());
    for policy in PolicyId::ALL {
        results.push((policy, simulate(policy, processes, time_quantum)?));
    }
    Ok(results)
}

//! Shortest Remaining Time First scheduling.
//!
//! # Algorithm
//!
//! The preemptive counterpart of SJF: at every decision point the arrived
//! process with the least *remaining* burst runs, capped at the next
//! arrival so a newcomer is always re-evaluated at the correct instant.
//! Consecutive segments of the same process coalesce into one timeline
//! event.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::{run_preemptive, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Shortest Remaining Time First (preemptive SJF).
///
/// Optimal average waiting time on a single CPU when burst times are
/// known, at the cost of preempting long jobs whenever a shorter one
/// arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        run_preemptive(processes, |_, remaining| remaining)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

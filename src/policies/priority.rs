//! Priority scheduling, non-preemptive and preemptive.
//!
//! Both variants select the arrived process with the lowest priority
//! value (lower = more important). The non-preemptive variant shares the
//! SJF control flow with the selection key swapped; the preemptive
//! variant shares the SRTF flow, re-evaluating at every arrival boundary
//! whether or not the newcomer actually outranks the running process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use super::{run_nonpreemptive, run_preemptive, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Priority scheduling (non-preemptive).
///
/// Once a process starts it runs to completion, even if a more important
/// process arrives mid-burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl SchedulingPolicy for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        run_nonpreemptive(processes, |p| p.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }
}

/// Priority scheduling (preemptive).
///
/// A newly arrived process with a lower priority value immediately takes
/// the CPU from the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl SchedulingPolicy for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY-P"
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        run_preemptive(processes, |p, _| p.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (preemptive)"
    }
}

//! Shortest Job First scheduling.
//!
//! # Algorithm
//!
//! At each decision point, run the arrived process with the smallest burst
//! time to completion. Ties go to the earliest arrival (scan order of the
//! arrival-sorted pool). Idle gaps are skipped to the next arrival.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::{run_nonpreemptive, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Shortest Job First (non-preemptive).
///
/// Provably minimizes average waiting time among non-preemptive policies
/// when all processes arrive together, but a long job that starts before
/// a shorter one arrives still runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        run_nonpreemptive(processes, |p| p.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEvent;

    #[test]
    fn test_default_dataset() {
        // Matches FCFS here: only P1 has arrived at t=0, and at t=5
        // P2 (burst 3) beats P3 (burst 8).
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let timeline = Sjf.run(&processes);
        assert_eq!(
            timeline,
            vec![
                TimelineEvent::new(1, 0, 5),
                TimelineEvent::new(2, 5, 8),
                TimelineEvent::new(3, 8, 16),
            ]
        );
    }

    #[test]
    fn test_shortest_wins_decision_point() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ];
        let timeline = Sjf.run(&processes);
        // P1 runs first (only arrival at t=0); at t=8 the shorter P3 beats P2.
        assert_eq!(
            timeline,
            vec![
                TimelineEvent::new(1, 0, 8),
                TimelineEvent::new(3, 8, 10),
                TimelineEvent::new(2, 10, 14),
            ]
        );
    }

    #[test]
    fn test_equal_bursts_earliest_arrival_wins() {
        let processes = vec![
            Process::new(1, 0, 6),
            Process::new(2, 1, 3),
            Process::new(3, 2, 3),
        ];
        let order: Vec<u32> = Sjf.run(&processes).iter().map(|ev| ev.process_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_idle_gap_skipped() {
        let processes = vec![Process::new(1, 5, 2), Process::new(2, 20, 1)];
        let timeline = Sjf.run(&processes);
        assert_eq!(
            timeline,
            vec![TimelineEvent::new(1, 5, 7), TimelineEvent::new(2, 20, 21)]
        );
    }
}

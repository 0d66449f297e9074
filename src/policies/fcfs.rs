//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival time (equal arrivals keep input order).
//! 2. Run each process to completion in that order.
//! 3. If the CPU is idle when the next process arrives later, skip the
//!    clock ahead to that arrival.
//!
//! Exactly one timeline event per process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use super::{sorted_by_arrival, SchedulingPolicy};
use crate::models::{Process, Timeline, TimelineEvent};

/// First-Come-First-Served (non-preemptive).
///
/// The simplest policy and the dispatcher's fallback. Prone to the convoy
/// effect: one long early arrival delays every later short process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let pool = sorted_by_arrival(processes);
        let mut timeline = Timeline::new();
        let mut current_time: i64 = 0;

        for p in pool {
            if current_time < p.arrival_time {
                current_time = p.arrival_time;
            }
            timeline.push(TimelineEvent::new(
                p.id,
                current_time,
                current_time + p.burst_time,
            ));
            current_time += p.burst_time;
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let timeline = Fcfs.run(&processes);
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
    fn test_idle_gap_skipped() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 4)];
        let timeline = Fcfs.run(&processes);
        // The gap [2, 10) produces no event.
        assert_eq!(
            timeline,
            vec![TimelineEvent::new(1, 0, 2), TimelineEvent::new(2, 10, 14)]
        );
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new(3, 0, 1),
            Process::new(1, 0, 1),
            Process::new(2, 0, 1),
        ];
        let order: Vec<u32> = Fcfs.run(&processes).iter().map(|ev| ev.process_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_out_of_order_input() {
        let processes = vec![Process::new(2, 6, 2), Process::new(1, 0, 3)];
        let timeline = Fcfs.run(&processes);
        assert_eq!(
            timeline,
            vec![TimelineEvent::new(1, 0, 3), TimelineEvent::new(2, 6, 8)]
        );
    }

    #[test]
    fn test_one_event_per_process() {
        let processes: Vec<Process> = (1..=5).map(|i| Process::new(i, i as i64, 2)).collect();
        let timeline = Fcfs.run(&processes);
        assert_eq!(timeline.len(), processes.len());
    }
}

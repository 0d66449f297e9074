//! Round robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue with a fixed time quantum:
//!
//! 1. Enqueue every not-yet-seen process whose arrival is <= now, in
//!    arrival order.
//! 2. If the queue is empty, idle-skip to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`; one
//!    timeline event per slice.
//! 4. Enqueue processes that arrived *during* the slice before requeueing
//!    the preempted process itself. This arrivals-before-self ordering is
//!    the standard fairness convention and changes the output versus the
//!    requeue-self-first variant.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::{HashMap, HashSet, VecDeque};

use super::{sorted_by_arrival, SchedulingPolicy};
use crate::models::{Process, Timeline, TimelineEvent};

/// Round robin (preemptive, fixed quantum).
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time slice per turn, in ticks. Values below 1 are treated as 1.
    pub time_quantum: i64,
}

impl RoundRobin {
    /// Creates a round robin policy with the given time quantum.
    pub fn new(time_quantum: i64) -> Self {
        Self { time_quantum }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self { time_quantum: 2 }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let quantum = self.time_quantum.max(1);
        let pool = sorted_by_arrival(processes);
        let mut remaining: HashMap<u32, i64> =
            pool.iter().map(|p| (p.id, p.burst_time)).collect();
        let mut enqueued: HashSet<u32> = HashSet::new();
        let mut queue: VecDeque<u32> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut current_time: i64 = 0;

        while !queue.is_empty() || enqueued.len() < pool.len() {
            // Intake everything that has arrived by now, in arrival order.
            for p in &pool {
                if p.arrival_time <= current_time && !enqueued.contains(&p.id) {
                    queue.push_back(p.id);
                    enqueued.insert(p.id);
                }
            }

            let Some(id) = queue.pop_front() else {
                // Queue drained but arrivals are pending: idle-skip.
                if let Some(p) = pool.iter().find(|p| !enqueued.contains(&p.id)) {
                    current_time = p.arrival_time;
                }
                continue;
            };

            let rem = remaining.get(&id).copied().unwrap_or(0);
            let run_len = quantum.min(rem);
            let slice_start = current_time;
            timeline.push(TimelineEvent::new(id, slice_start, slice_start + run_len));
            current_time += run_len;
            if let Some(r) = remaining.get_mut(&id) {
                *r = rem - run_len;
            }

            // Arrivals within (slice_start, current_time] go in ahead of
            // the process that just used up its quantum.
            for p in &pool {
                if p.arrival_time > slice_start
                    && p.arrival_time <= current_time
                    && !enqueued.contains(&p.id)
                {
                    queue.push_back(p.id);
                    enqueued.insert(p.id);
                }
            }

            if remaining.get(&id).copied().unwrap_or(0) > 0 {
                queue.push_back(id);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

//! Scheduling policy implementations.
//!
//! # Policies
//!
//! - **Non-preemptive**: FCFS, SJF, priority
//! - **Preemptive**: SRTF, round robin, priority
//!
//! # Selection Key Convention
//! The greedy policies select the arrived process with the **minimum** key
//! (burst time for SJF, remaining burst for SRTF, priority value for the
//! priority pair). Ties are broken by scan order over the arrival-sorted
//! pool: the earlier arrival wins, and equal arrivals fall back to input
//! order (the working copy is stably sorted).
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::collections::HashMap;
use std::fmt::Debug;

use crate::models::{Process, Timeline, TimelineEvent};

/// A CPU scheduling policy.
///
/// A policy consumes a process set and produces an execution timeline.
/// It works on its own private copy: the caller's slice is never mutated
/// and no state is retained across runs, so concurrent runs are safe.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Whether the policy may interrupt a running process.
    fn preemptive(&self) -> bool {
        false
    }

    /// Simulates the policy over the process set.
    ///
    /// Returns the execution slices ordered by non-decreasing start time.
    /// Idle gaps are skipped, never emitted as events.
    fn run(&self, processes: &[Process]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Stable arrival-order working copy.
///
/// Equal arrivals keep their input-relative order, which is what makes the
/// scan-order tie-break reproducible.
pub(crate) fn sorted_by_arrival(processes: &[Process]) -> Vec<Process> {
    let mut pool = processes.to_vec();
    pool.sort_by_key(|p| p.arrival_time);
    pool
}

/// Index of the arrived process with the strictly smallest key, scanning
/// the pool in order. `None` if nothing has arrived yet.
fn select_min<K: Ord>(
    pool: &[Process],
    current_time: i64,
    key: impl Fn(&Process) -> K,
) -> Option<usize> {
    let mut selected: Option<usize> = None;
    for (i, p) in pool.iter().enumerate() {
        if p.arrival_time > current_time {
            continue;
        }
        let better = match selected {
            None => true,
            Some(j) => key(p) < key(&pool[j]),
        };
        if better {
            selected = Some(i);
        }
    }
    selected
}

/// Earliest arrival among processes not yet eligible at `current_time`.
fn next_arrival(pool: &[Process], current_time: i64) -> Option<i64> {
    pool.iter()
        .map(|p| p.arrival_time)
        .filter(|&at| at > current_time)
        .min()
}

/// Shared skeleton for the non-preemptive greedy policies (SJF, priority).
///
/// At each decision point, runs the arrived process with the minimum key
/// to completion (one event per process). If nothing has arrived, skips
/// `current_time` ahead to the next arrival instead of stepping tick by
/// tick.
pub(crate) fn run_nonpreemptive<K: Ord>(
    processes: &[Process],
    key: impl Fn(&Process) -> K,
) -> Timeline {
    let mut pool = sorted_by_arrival(processes);
    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;

    while !pool.is_empty() {
        let Some(idx) = select_min(&pool, current_time, &key) else {
            // Nothing has arrived: idle-skip to the next arrival.
            if let Some(at) = pool.iter().map(|p| p.arrival_time).min() {
                current_time = at;
            }
            continue;
        };

        let chosen = pool.remove(idx);
        timeline.push(TimelineEvent::new(
            chosen.id,
            current_time,
            current_time + chosen.burst_time,
        ));
        current_time += chosen.burst_time;
    }

    timeline
}

/// Shared skeleton for the arrival-capped preemptive policies
/// (SRTF, priority preemptive).
///
/// The key is evaluated over `(process, remaining_burst)`. Each slice runs
/// for `min(remaining, time to next arrival)`, so the policy re-evaluates
/// at every arrival boundary — the only instants at which the winner can
/// change. Consecutive same-process segments are coalesced into a single
/// event; an event is emitted only when the running process changes or
/// completes.
pub(crate) fn run_preemptive<K: Ord>(
    processes: &[Process],
    key: impl Fn(&Process, i64) -> K,
) -> Timeline {
    let mut pool = sorted_by_arrival(processes);
    let mut remaining: HashMap<u32, i64> =
        pool.iter().map(|p| (p.id, p.burst_time)).collect();
    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;
    // Currently running process and the start of its open (unemitted) slice.
    let mut running: Option<(u32, i64)> = None;

    while !pool.is_empty() {
        let keyed = |p: &Process| key(p, remaining.get(&p.id).copied().unwrap_or(0));
        let Some(idx) = select_min(&pool, current_time, keyed) else {
            if let Some(at) = pool.iter().map(|p| p.arrival_time).min() {
                current_time = at;
            }
            continue;
        };
        let chosen_id = pool[idx].id;

        // The winner changed: close the previous slice and open a new one.
        match running {
            Some((last_id, slice_start)) if last_id != chosen_id => {
                timeline.push(TimelineEvent::new(last_id, slice_start, current_time));
                running = Some((chosen_id, current_time));
            }
            None => running = Some((chosen_id, current_time)),
            _ => {}
        }

        // Run until completion or the next arrival, whichever comes first.
        let mut run_len = remaining.get(&chosen_id).copied().unwrap_or(0);
        if let Some(at) = next_arrival(&pool, current_time) {
            if current_time + run_len > at {
                run_len = at - current_time;
            }
        }

        if let Some(rem) = remaining.get_mut(&chosen_id) {
            *rem -= run_len;
        }
        current_time += run_len;

        if remaining.get(&chosen_id).copied().unwrap_or(0) <= 0 {
            pool.remove(idx);
            if let Some((_, slice_start)) = running.take() {
                timeline.push(TimelineEvent::new(chosen_id, slice_start, current_time));
            }
        }
    }

    timeline
}

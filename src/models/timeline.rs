//! Execution timeline (Gantt sequence) model.
//!
//! A timeline is the ordered list of contiguous execution slices a policy
//! produced. Idle gaps are simply absent from the sequence — they are
//! never represented as events.

use serde::{Deserialize, Serialize};

/// One contiguous execution slice of a single process.
///
/// A process may own several events under preemption, but the union of its
/// `[start, end)` ranges always sums to exactly its burst time and never
/// overlaps another process's events. Events are immutable once appended
/// and collectively ordered by non-decreasing start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Process that ran during this slice.
    pub process_id: u32,
    /// Slice start tick (inclusive).
    pub start_time: i64,
    /// Slice end tick (exclusive). Always > `start_time`.
    pub end_time: i64,
}

/// An ordered sequence of execution slices.
pub type Timeline = Vec<TimelineEvent>;

impl TimelineEvent {
    /// Creates a new event.
    pub fn new(process_id: u32, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Slice length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

//! Simulation domain models.
//!
//! Core value types for describing a scheduling problem and its outcome:
//! the immutable process descriptors supplied by the caller, the execution
//! timeline a policy produces, and the derived per-process metrics.
//!
//! All types are plain values with `serde` support so a presentation layer
//! (Gantt renderer, results table, comparison view) can consume them
//! directly.

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::{ProcessResult, SchedulingResult};
pub use timeline::{Timeline, TimelineEvent};

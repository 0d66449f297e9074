//! CPU scheduling policy simulator.
//!
//! Simulates classic single-CPU scheduling policies over a fixed,
//! known-in-advance process set and derives an execution timeline plus
//! per-process performance metrics for each policy. This is an
//! educational/analytical simulator, not a real scheduler: there are no
//! live interrupts, no I/O phases, and every run is deterministic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimelineEvent`,
//!   `ProcessResult`, `SchedulingResult`
//! - **`policies`**: The six policies — FCFS, SJF, SRTF, round robin,
//!   priority (non-preemptive and preemptive)
//! - **`scheduler`**: Dispatch entry points and metric aggregation
//! - **`validation`**: Input integrity checks (duplicate IDs, bad bursts)
//! - **`workload`**: Random process-set generation for experiments
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{simulate, PolicyId};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let result = simulate(PolicyId::Sjf, &processes, 0).unwrap();
//! assert_eq!(result.processes.len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;
pub mod workload;

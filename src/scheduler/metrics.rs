//! Per-process metric aggregation.
//!
//! Derives completion, turnaround, waiting, and response times from a
//! policy's timeline, plus the set-wide averages. Shared by all policies
//! so metric semantics are identical regardless of how the timeline was
//! produced.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{Process, ProcessResult, SchedulingResult, Timeline};

/// Aggregates a timeline into per-process metrics and averages.
///
/// Pure function over its inputs. Result rows keep the input order of
/// `processes`, not execution order.
///
/// Every well-formed input process owns at least one slice in a timeline
/// produced by a correct policy. A process with no slices still yields a
/// defined row (completion = arrival), and an empty process set yields
/// 0.0 averages rather than NaN; validation upstream rejects both before
/// simulation.
pub fn aggregate(processes: &[Process], timeline: Timeline) -> SchedulingResult {
    let mut results: Vec<ProcessResult> = Vec::with_capacity(processes.len());

    for process in processes {
        let mut completion = process.arrival_time;
        let mut first_start: Option<i64> = None;

        for ev in timeline.iter().filter(|ev| ev.process_id == process.id) {
            completion = completion.max(ev.end_time);
            first_start = Some(match first_start {
                Some(s) => s.min(ev.start_time),
                None => ev.start_time,
            });
        }

        results.push(ProcessResult::derive(
            process,
            first_start.unwrap_or(process.arrival_time),
            completion,
        ));
    }

    let (average_waiting_time, average_turnaround_time) = if results.is_empty() {
        (0.0, 0.0)
    } else {
        let n = results.len() as f64;
        (
            results.iter().map(|r| r.waiting_time as f64).sum::<f64>() / n,
            results.iter().map(|r| r.turnaround_time as f64).sum::<f64>() / n,
        )
    };

    SchedulingResult {
        processes: results,
        timeline,
        average_waiting_time,
        average_turnaround_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEvent;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_default_dataset_fcfs_metrics() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        let timeline = vec![
            TimelineEvent::new(1, 0, 5),
            TimelineEvent::new(2, 5, 8),
            TimelineEvent::new(3, 8, 16),
        ];
        let result = aggregate(&processes, timeline);

        assert_eq!(result.processes[0].waiting_time, 0);
        assert_eq!(result.processes[1].waiting_time, 4);
        assert_eq!(result.processes[2].waiting_time, 6);
        assert_eq!(result.processes[0].turnaround_time, 5);
        assert_eq!(result.processes[1].turnaround_time, 7);
        assert_eq!(result.processes[2].turnaround_time, 14);
        assert!(approx(result.average_waiting_time, 3.33));
        assert!(approx(result.average_turnaround_time, 8.67));
    }

    #[test]
    fn test_multi_slice_process() {
        // A preempted process: response from the first slice, completion
        // from the last.
        let processes = vec![Process::new(1, 1, 6), Process::new(2, 2, 2)];
        let timeline = vec![
            TimelineEvent::new(1, 1, 3),
            TimelineEvent::new(2, 3, 5),
            TimelineEvent::new(1, 5, 9),
        ];
        let result = aggregate(&processes, timeline);

        let p1 = &result.processes[0];
        assert_eq!(p1.completion_time, 9);
        assert_eq!(p1.response_time, 0);
        assert_eq!(p1.turnaround_time, 8);
        assert_eq!(p1.waiting_time, 2);

        let p2 = &result.processes[1];
        assert_eq!(p2.response_time, 1);
        assert_eq!(p2.waiting_time, 1);
    }

    #[test]
    fn test_result_order_is_input_order() {
        let processes = vec![Process::new(9, 5, 1), Process::new(4, 0, 1)];
        let timeline = vec![TimelineEvent::new(4, 0, 1), TimelineEvent::new(9, 5, 6)];
        let result = aggregate(&processes, timeline);
        let ids: Vec<u32> = result.processes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_delayed_first_run_response_time() {
        let processes = vec![Process::new(1, 2, 3)];
        let timeline = vec![TimelineEvent::new(1, 7, 10)];
        let result = aggregate(&processes, timeline);
        assert_eq!(result.processes[0].response_time, 5);
        assert_eq!(result.processes[0].waiting_time, 5);
    }

    #[test]
    fn test_empty_set_defined() {
        let result = aggregate(&[], Timeline::new());
        assert!(result.processes.is_empty());
        assert_eq!(result.average_waiting_time, 0.0);
        assert_eq!(result.average_turnaround_time, 0.0);
    }

    #[test]
    fn test_process_without_slices_defined() {
        // Not producible by a correct policy, but the output stays finite.
        let processes = vec![Process::new(1, 4, 2)];
        let result = aggregate(&processes, Timeline::new());
        assert_eq!(result.processes[0].completion_time, 4);
        assert_eq!(result.processes[0].turnaround_time, 0);
        assert!(result.average_waiting_time.is_finite());
    }
}

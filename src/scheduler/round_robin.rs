//! Round-robin simulation.
//!
//! Unlike the scan-and-select policies, round robin keeps an explicit FIFO
//! ready queue and never ranks jobs.
//!
//! # Queue discipline
//!
//! 1. Pop the head of the queue and run it for `min(remaining, quantum)`.
//! 2. Enqueue every job that arrived by the new clock value, in
//!    `(arrival_time, input order)` order.
//! 3. Only then re-enqueue the job that just ran, if it still has work.
//!
//! A job arriving exactly when another's quantum expires therefore queues
//! ahead of the expiring job. When the queue drains while jobs are still
//! due, the clock jumps to the next arrival without recording an interval.

use std::collections::VecDeque;

use tracing::trace;

use super::driver::ArrivalQueue;
use super::SimulationResult;
use crate::models::{CompletionRecord, Job, SimRecord, Timeline};

/// Runs a round-robin simulation with a positive `quantum`.
pub(crate) fn run_round_robin(jobs: &[Job], quantum: i64) -> SimulationResult {
    debug_assert!(quantum > 0, "quantum must be positive, got {quantum}");

    let mut arena = SimRecord::arena(jobs);
    let mut pending = ArrivalQueue::new(&arena);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(jobs.len());
    let mut timeline = Timeline::new();
    let mut completions = Vec::with_capacity(jobs.len());
    let mut clock: i64 = 0;

    while completions.len() < jobs.len() {
        while let Some(idx) = pending.pop_arrived(clock) {
            queue.push_back(idx);
        }

        let Some(idx) = queue.pop_front() else {
            match pending.next_arrival() {
                Some(next) => {
                    trace!(from = clock, to = next, "cpu idle");
                    clock = next;
                    continue;
                }
                None => break,
            }
        };

        let record = &mut arena[idx];
        let execute = record.remaining_time.min(quantum);
        timeline.record(record.job.id.as_str(), clock, clock + execute);
        trace!(
            job = %record.job.id,
            start = clock,
            stop = clock + execute,
            "time slice"
        );
        record.run_for(execute);
        clock += execute;

        // Arrivals are admitted before the expiring job is re-queued
        while let Some(arrived) = pending.pop_arrived(clock) {
            queue.push_back(arrived);
        }

        if record.is_finished() {
            completions.push(CompletionRecord::new(record.job, clock));
        } else {
            queue.push_back(idx);
        }
    }

    SimulationResult {
        completions,
        timeline,
    }
}

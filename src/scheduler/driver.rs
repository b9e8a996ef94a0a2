//! Shared scan-and-select simulation loop.
//!
//! FCFS, SJF, SRTF, NPP and PP differ only in which available job they pick
//! and how long they let it run, so one driver serves all five.
//!
//! # Algorithm
//!
//! 1. Move every job with `arrival_time <= clock` from the arrival queue
//!    into the ready set.
//! 2. If the ready set is empty, jump the clock to the next arrival (no
//!    interval is recorded for the idle span) and repeat.
//! 3. Otherwise pick the lowest-scoring ready job (input order on ties),
//!    run it for its execute time, record the interval and advance the clock.
//! 4. A job whose remaining time reaches zero leaves the ready set and
//!    emits its completion record.
//!
//! # Complexity
//! O(n^2) for n jobs: each decision scans the ready set, and there are at
//! most 2n decisions (every slice ends at a completion or an arrival).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::SimulationResult;
use crate::dispatching::{select_best, SelectionRule};
use crate::models::{CompletionRecord, Job, SimRecord, Timeline};

/// How long a selected job keeps the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preemption {
    /// Run the whole remaining burst (FCFS, SJF, NPP).
    Never,
    /// Run until completion or the next arrival, whichever is first, so the
    /// selection is re-evaluated whenever a new job shows up (SRTF, PP).
    AtArrival,
}

/// Jobs that have not arrived yet, popped in `(arrival_time, index)` order.
#[derive(Debug)]
pub(crate) struct ArrivalQueue {
    heap: BinaryHeap<Reverse<(i64, usize)>>,
}

impl ArrivalQueue {
    /// Queues every record of the arena.
    pub(crate) fn new(arena: &[SimRecord<'_>]) -> Self {
        Self {
            heap: arena
                .iter()
                .map(|r| Reverse((r.job.arrival_time, r.index)))
                .collect(),
        }
    }

    /// Earliest arrival time still queued.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.heap.peek().map(|Reverse((arrival, _))| *arrival)
    }

    /// Pops the next job that has arrived by `clock`.
    pub(crate) fn pop_arrived(&mut self, clock: i64) -> Option<usize> {
        match self.heap.peek() {
            Some(Reverse((arrival, _))) if *arrival <= clock => {
                self.heap.pop().map(|Reverse((_, idx))| idx)
            }
            _ => None,
        }
    }
}

/// Runs one scan-and-select simulation over `jobs`.
pub(crate) fn run_selection<R: SelectionRule + ?Sized>(
    jobs: &[Job],
    rule: &R,
    preemption: Preemption,
) -> SimulationResult {
    let mut arena = SimRecord::arena(jobs);
    let mut pending = ArrivalQueue::new(&arena);
    // Arena indices in ascending input order
    let mut ready: Vec<usize> = Vec::with_capacity(jobs.len());
    let mut timeline = Timeline::new();
    let mut completions = Vec::with_capacity(jobs.len());
    let mut clock: i64 = 0;

    while completions.len() < jobs.len() {
        while let Some(idx) = pending.pop_arrived(clock) {
            if let Err(pos) = ready.binary_search(&idx) {
                ready.insert(pos, idx);
            }
        }

        let Some(pos) = select_best(rule, &arena, &ready) else {
            match pending.next_arrival() {
                Some(next) => {
                    trace!(from = clock, to = next, "cpu idle");
                    clock = next;
                    continue;
                }
                None => break,
            }
        };

        let idx = ready[pos];
        let record = &mut arena[idx];
        let execute = match preemption {
            Preemption::Never => record.remaining_time,
            Preemption::AtArrival => pending
                .next_arrival()
                .map_or(record.remaining_time, |next| {
                    record.remaining_time.min(next - clock)
                }),
        };

        timeline.record(record.job.id.as_str(), clock, clock + execute);
        trace!(
            rule = rule.name(),
            job = %record.job.id,
            start = clock,
            stop = clock + execute,
            "dispatched"
        );
        record.run_for(execute);
        clock += execute;

        if record.is_finished() {
            ready.remove(pos);
            completions.push(CompletionRecord::new(record.job, clock));
        }
    }

    SimulationResult {
        completions,
        timeline,
    }
}

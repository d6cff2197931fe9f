use crossbeam::channel::{Receiver, Sender, bounded};
use std::hint::black_box;

use super::cancel::{CANCEL_CHECK_INTERVAL, CancelToken};
use super::partition::StridedRange;
use crate::error::SumError;
use crate::sum::SumParams;

/// Fixed-stride parallel summation over a fresh set of scoped worker threads.
///
/// Each call spawns exactly `workers` threads, each owning one
/// [`StridedRange`]. Workers keep a private partial sum and send it once over
/// a bounded channel; the coordinator adds the partials up after the scope
/// has joined every thread, so no lock guards the total.
#[derive(Debug, Clone, Copy)]
pub struct ParallelExecutor {
    workers: usize,
}

/// Context for one worker thread
struct WorkerContext<'a> {
    worker_id: usize,
    range: StridedRange,
    multiplier: i64,
    partial_tx: Sender<Option<i64>>,
    cancel: &'a CancelToken,
}

impl ParallelExecutor {
    pub fn new(workers: usize) -> Result<Self, SumError> {
        if workers == 0 {
            return Err(SumError::InvalidThreadCount);
        }
        Ok(Self { workers })
    }

    /// Run the summation and block until every worker has finished.
    ///
    /// Returns [`SumError::Cancelled`] if `cancel` fires before all partials
    /// are in; a partial total is never returned.
    pub fn execute(&self, params: SumParams, cancel: &CancelToken) -> Result<i64, SumError> {
        if cancel.is_cancelled() {
            return Err(SumError::Cancelled);
        }

        tracing::debug!(
            "Spawning {} workers for N={} (n={})",
            self.workers,
            params.limit,
            params.multiplier
        );

        self.run_workers(params, cancel, Self::sum_range)
    }

    /// Spawn one scoped thread per worker running `worker`, join them all,
    /// then reduce the partials.
    ///
    /// A panicking worker surfaces as [`SumError::WorkerPanicked`]. Release
    /// builds abort on panic instead, so this is only seen in unwind builds.
    fn run_workers<W>(&self, params: SumParams, cancel: &CancelToken, worker: W) -> Result<i64, SumError>
    where
        W: Fn(&WorkerContext<'_>) -> Option<i64> + Sync,
    {
        // One slot per worker: every worker sends exactly once, so sends never block
        let (partial_tx, partial_rx): (Sender<Option<i64>>, Receiver<Option<i64>>) =
            bounded(self.workers);
        let worker = &worker;

        crossbeam::thread::scope(|s| {
            for worker_id in 0..self.workers {
                let ctx = WorkerContext {
                    worker_id,
                    range: StridedRange::new(worker_id, self.workers, params.limit),
                    multiplier: i64::from(params.multiplier),
                    partial_tx: partial_tx.clone(),
                    cancel,
                };

                s.spawn(move |_| Self::worker_thread(ctx, worker));
            }
        })
        .map_err(|_| SumError::WorkerPanicked)?;

        // Drop the original sender so the receiver drains and then ends
        drop(partial_tx);

        self.collect_partials(partial_rx)
    }

    fn worker_thread<W>(ctx: WorkerContext<'_>, worker: &W)
    where
        W: Fn(&WorkerContext<'_>) -> Option<i64>,
    {
        let partial = worker(&ctx);

        if ctx.partial_tx.send(partial).is_err() {
            tracing::debug!("worker-{}: coordinator dropped the partial channel", ctx.worker_id);
        }
    }

    /// Private partial sum for one worker, or `None` once cancelled
    fn sum_range(ctx: &WorkerContext<'_>) -> Option<i64> {
        let mut local_sum: i64 = 0;

        for (step, i) in ctx.range.enumerate() {
            if step % CANCEL_CHECK_INTERVAL == 0 && ctx.cancel.is_cancelled() {
                tracing::trace!("worker-{} observed cancellation at i={}", ctx.worker_id, i);
                return None;
            }
            local_sum = local_sum.wrapping_add(black_box(ctx.multiplier).wrapping_mul(i));
        }

        Some(local_sum)
    }

    fn collect_partials(&self, partial_rx: Receiver<Option<i64>>) -> Result<i64, SumError> {
        let mut total: i64 = 0;
        let mut received = 0;

        for partial in partial_rx.iter() {
            match partial {
                Some(value) => total = total.wrapping_add(value),
                None => return Err(SumError::Cancelled),
            }
            received += 1;
        }

        if received < self.workers {
            return Err(SumError::WorkerPanicked);
        }

        Ok(total)
    }
}

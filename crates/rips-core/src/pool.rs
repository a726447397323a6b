//! Partitioned parallel execution over scoped worker threads.
//!
//! [`WorkerPool::run`] takes one task per partition (one per lattice
//! cell in practice), feeds them through a `crossbeam-channel` queue to
//! a fixed number of scoped threads, and returns the results in
//! partition order once every worker has joined. The join is a full
//! barrier: no result is visible before all tasks have finished.
//!
//! Tasks must not share mutable state other than through atomics; the
//! pool itself only moves tasks in and results out.

use crossbeam_channel::{Receiver, Sender};
use tracing::trace;

/// A fixed-width pool of scoped worker threads.
///
/// Threads are spawned per [`run`](WorkerPool::run) call and joined
/// before it returns, so the pool holds no OS resources between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Upper bound on the worker count.
    pub const MAX_WORKERS: usize = 256;

    /// Create a pool with `workers` threads, clamped to `[1, MAX_WORKERS]`.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.clamp(1, Self::MAX_WORKERS),
        }
    }

    /// Create a pool sized to the available parallelism (4 if unknown).
    pub fn auto() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::new(cpus)
    }

    /// A single-worker pool; tasks run inline on the calling thread.
    pub fn serial() -> Self {
        Self::new(1)
    }

    /// Resolve an optional worker count: `None` auto-detects.
    pub fn from_option(workers: Option<usize>) -> Self {
        workers.map_or_else(Self::auto, Self::new)
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `f` over every task and return the results in task order.
    ///
    /// Panics in a task propagate to the caller after the remaining
    /// workers have been joined.
    pub fn run<T, R, F>(&self, tasks: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync,
    {
        let n = tasks.len();
        let workers = self.workers.min(n);
        if workers <= 1 {
            return tasks.into_iter().map(f).collect();
        }

        let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, T)>();
        for task in tasks.into_iter().enumerate() {
            // Unbounded and `task_rx` is alive: cannot fail.
            let _ = task_tx.send(task);
        }
        drop(task_tx);

        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, R)>();
        let f = &f;
        std::thread::scope(|scope| {
            for worker in 0..workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || worker_loop(worker, task_rx, result_tx, f));
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(n).collect();
        for (idx, result) in result_rx.try_iter() {
            slots[idx] = Some(result);
        }
        slots.into_iter().flatten().collect()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::auto()
    }
}

/// Pull tasks until the queue is drained.
fn worker_loop<T, R, F>(
    worker: usize,
    tasks: Receiver<(usize, T)>,
    results: Sender<(usize, R)>,
    f: &F,
) where
    F: Fn(T) -> R,
{
    let mut done = 0usize;
    while let Ok((idx, task)) = tasks.recv() {
        // The caller holds the receiver until all workers join.
        let _ = results.send((idx, f(task)));
        done += 1;
    }
    trace!(worker, tasks = done, "worker drained queue");
}

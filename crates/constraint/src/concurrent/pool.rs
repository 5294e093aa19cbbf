//! A dedicated worker runtime for constraint evaluation.

use std::future::Future;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::BuildError;

// ---------------------------------------------------------------------------
// WorkerPoolConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`WorkerPool`].
///
/// Hosts usually deserialize this from their own configuration; every field
/// is optional there and falls back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerPoolConfig {
    /// Async worker threads. Defaults to the available parallelism.
    pub worker_threads: usize,
    /// Upper bound on threads running evaluation jobs.
    pub max_blocking_threads: usize,
    /// Name given to every pool thread.
    pub thread_name: String,
    /// Stack size for pool threads; the platform default when `None`.
    pub thread_stack_size: Option<usize>,
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self {
            worker_threads: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            max_blocking_threads: 64,
            thread_name: "rampart-worker".to_owned(),
            thread_stack_size: None,
        }
    }
}

impl WorkerPoolConfig {
    /// Sets the number of async worker threads.
    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads;
        self
    }

    /// Sets the maximum number of evaluation threads.
    #[must_use]
    pub fn with_max_blocking_threads(mut self, threads: usize) -> Self {
        self.max_blocking_threads = threads;
        self
    }

    /// Sets the thread name.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets the thread stack size in bytes.
    #[must_use]
    pub fn with_thread_stack_size(mut self, bytes: usize) -> Self {
        self.thread_stack_size = Some(bytes);
        self
    }
}

// ---------------------------------------------------------------------------
// WorkerPool
// ---------------------------------------------------------------------------

/// A multi-threaded tokio runtime owned by the host for running evaluations.
///
/// The pool is not an [`ExecutionContext`](crate::concurrent::ExecutionContext)
/// itself. Evaluators receive [`handle`](Self::handle), so the runtime stays
/// with its owner and is never dropped by the last evaluator, possibly inside
/// async code where tokio panics on runtime drop.
pub struct WorkerPool {
    runtime: Runtime,
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.runtime.metrics().num_workers())
            .finish()
    }
}

impl WorkerPool {
    /// Starts the pool. Zero thread counts are raised to one.
    pub fn new(config: &WorkerPoolConfig) -> Result<Self, BuildError> {
        let mut builder = Builder::new_multi_thread();
        builder
            .worker_threads(config.worker_threads.max(1))
            .max_blocking_threads(config.max_blocking_threads.max(1))
            .thread_name(config.thread_name.clone());
        if let Some(bytes) = config.thread_stack_size {
            builder.thread_stack_size(bytes);
        }

        let runtime = builder.build()?;
        tracing::debug!(
            workers = config.worker_threads.max(1),
            max_blocking = config.max_blocking_threads.max(1),
            name = %config.thread_name,
            "worker pool started"
        );
        Ok(Self { runtime })
    }

    /// A pool with the default configuration.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&WorkerPoolConfig::default())
    }

    /// A cloneable handle that submits jobs to this pool. This is the
    /// [`ExecutionContext`](crate::concurrent::ExecutionContext) to give
    /// evaluators.
    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    /// Drives a future to completion on the pool. Must not be called from
    /// async code.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Shuts down without waiting for queued jobs. Their evaluations report
    /// no result.
    pub fn shutdown(self) {
        tracing::debug!("worker pool shutting down");
        self.runtime.shutdown_background();
    }
}

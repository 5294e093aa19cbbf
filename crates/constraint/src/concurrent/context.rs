//! Execution contexts: where jobs run.
//!
//! The engine never owns threads. Hosts inject an [`ExecutionContext`] for
//! the evaluation work and, optionally, another for delivering results (a UI
//! thread, say). Provided implementations:
//!
//! - [`tokio::runtime::Handle`]: runs jobs on the runtime's blocking pool
//! - [`Immediate`]: runs jobs inline on the calling thread
//! - [`SerialQueue`]: FIFO queue drained by a single [`SerialQueueDriver`]
//! - [`WorkerPool`](super::WorkerPool): a dedicated runtime, used through
//!   its [`handle`](super::WorkerPool::handle)

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// A unit of work handed to an execution context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run jobs.
///
/// Implementations decide thread and ordering. A context that discards a job
/// (because it is shutting down, say) must simply drop it; the engine treats
/// a dropped job as "no result".
pub trait ExecutionContext: Send + Sync {
    /// Runs `job`, now or later.
    fn execute(&self, job: Job);
}

impl<C: ExecutionContext + ?Sized> ExecutionContext for Arc<C> {
    fn execute(&self, job: Job) {
        (**self).execute(job);
    }
}

impl<C: ExecutionContext + ?Sized> ExecutionContext for &'static C {
    fn execute(&self, job: Job) {
        (**self).execute(job);
    }
}

impl ExecutionContext for Handle {
    fn execute(&self, job: Job) {
        // Evaluation is synchronous CPU work, so keep it off the async workers.
        drop(self.spawn_blocking(job));
    }
}

// ============================================================================
// IMMEDIATE
// ============================================================================

/// Runs every job inline, on the thread that submits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

impl ExecutionContext for Immediate {
    fn execute(&self, job: Job) {
        job();
    }
}

// ============================================================================
// SERIAL QUEUE
// ============================================================================

/// Creates a FIFO queue and the driver that drains it.
///
/// The queue models a single-threaded completion context such as a UI main
/// loop: jobs run one at a time, in submission order, on whichever thread
/// owns the driver.
pub fn serial_queue() -> (SerialQueue, SerialQueueDriver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (SerialQueue { sender }, SerialQueueDriver { receiver })
}

/// Submission side of a [`serial_queue`]. Cheap to clone.
#[derive(Clone)]
pub struct SerialQueue {
    sender: mpsc::UnboundedSender<Job>,
}

impl fmt::Debug for SerialQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialQueue")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl ExecutionContext for SerialQueue {
    fn execute(&self, job: Job) {
        if self.sender.send(job).is_err() {
            tracing::debug!("serial queue driver gone, job dropped");
        }
    }
}

/// Owning side of a [`serial_queue`]; runs queued jobs.
pub struct SerialQueueDriver {
    receiver: mpsc::UnboundedReceiver<Job>,
}

impl fmt::Debug for SerialQueueDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialQueueDriver")
            .field("queued", &self.receiver.len())
            .finish()
    }
}

impl SerialQueueDriver {
    /// Runs every job queued right now and returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Waits for the next job and runs it. Returns `false` once every
    /// [`SerialQueue`] handle is gone and the queue is empty.
    pub async fn run_one(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Runs jobs until every [`SerialQueue`] handle is dropped, returning how
    /// many ran.
    pub async fn run(mut self) -> usize {
        let mut ran = 0;
        while self.run_one().await {
            ran += 1;
        }
        ran
    }
}

//! Asynchronous and concurrent evaluation
//!
//! The synchronous core never suspends. This module lifts it onto injected
//! [`ExecutionContext`]s without duplicating any evaluation logic:
//!
//! - [`AsyncConstraint`] runs one constraint on a worker and delivers the
//!   result through an awaitable [`Task`] or a callback on a completion
//!   context.
//! - [`AsyncCompound`] fans out to several async children and, once every
//!   child has reported, merges in registration order with the same fold the
//!   synchronous compound uses. Any [`AsyncEvaluator`] can be a child, so
//!   compounds nest.
//!
//! Each unit of work moves through [`TaskState`]
//! `Pending -> Running -> Completed`; cancelling while pending skips the
//! evaluation and the task contributes no result.

mod compound;
mod context;
mod evaluator;
mod pool;
mod task;

pub use compound::{AsyncCompound, CompoundHandle, CompoundTask};
pub use context::{ExecutionContext, Immediate, Job, SerialQueue, SerialQueueDriver, serial_queue};
pub use evaluator::{AsyncConstraint, AsyncEvaluator, Task};
pub use pool::{WorkerPool, WorkerPoolConfig};
pub use task::{Completion, TaskHandle, TaskState};

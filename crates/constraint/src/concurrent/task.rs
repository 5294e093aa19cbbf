//! Per-task lifecycle: `Pending -> Running -> Completed`.
//!
//! Cancellation is only possible while a task is still pending; it moves the
//! task straight to `Completed` and the task then contributes no result.
//! A running evaluation is never interrupted.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::foundation::ConstraintResult;

/// Lifecycle state of one unit of async work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    /// Dispatched, not yet picked up by a worker.
    Pending,
    /// A worker is evaluating.
    Running,
    /// Finished, cancelled, or discarded.
    Completed,
}

impl TaskState {
    const fn to_atomic(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Running => 1,
            Self::Completed => 2,
        }
    }

    const fn from_atomic(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Running,
            _ => Self::Completed,
        }
    }
}

/// Shared view of a task's state; clones observe the same task.
#[derive(Clone)]
pub struct TaskHandle {
    state: Arc<AtomicU8>,
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("state", &self.state())
            .finish()
    }
}

impl TaskHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(AtomicU8::new(TaskState::Pending.to_atomic())),
        }
    }

    /// Current state.
    pub fn state(&self) -> TaskState {
        TaskState::from_atomic(self.state.load(Ordering::Acquire))
    }

    /// Returns `true` once the task can no longer change.
    pub fn is_completed(&self) -> bool {
        self.state() == TaskState::Completed
    }

    /// Cancels a pending task. Returns `false` if it already started or
    /// finished, in which case nothing changes.
    pub fn cancel(&self) -> bool {
        let cancelled = self.transition(TaskState::Pending, TaskState::Completed);
        if cancelled {
            tracing::debug!("task cancelled before start");
        }
        cancelled
    }

    /// Claims the task for execution. Fails if it was cancelled.
    pub(crate) fn start(&self) -> bool {
        self.transition(TaskState::Pending, TaskState::Running)
    }

    pub(crate) fn finish(&self) {
        self.state
            .store(TaskState::Completed.to_atomic(), Ordering::Release);
    }

    fn transition(&self, from: TaskState, to: TaskState) -> bool {
        self.state
            .compare_exchange(
                from.to_atomic(),
                to.to_atomic(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

// ============================================================================
// DELIVERY GUARD
// ============================================================================

/// Receives the single outcome of one evaluation; `None` when it produced no
/// result.
pub type Completion<E> = Box<dyn FnOnce(Option<ConstraintResult<E>>) + Send>;

/// Carries a task's completion callback into the job.
///
/// Exactly one outcome is delivered: the evaluation result via
/// [`send`](Self::send), or `None` if the job is cancelled, discarded by its
/// context, or unwinds from a panicking constraint. Joins rely on this to
/// never wait forever on a child.
pub(crate) struct Delivery<E> {
    handle: TaskHandle,
    deliver: Option<Completion<E>>,
}

impl<E> Delivery<E> {
    pub(crate) fn new(handle: TaskHandle, deliver: Completion<E>) -> Self {
        Self {
            handle,
            deliver: Some(deliver),
        }
    }

    pub(crate) fn send(mut self, result: Option<ConstraintResult<E>>) {
        self.handle.finish();
        if let Some(deliver) = self.deliver.take() {
            deliver(result);
        }
    }
}

impl<E> Drop for Delivery<E> {
    fn drop(&mut self) {
        let Some(deliver) = self.deliver.take() else {
            return;
        };
        self.handle.finish();
        if std::thread::panicking() {
            tracing::error!("constraint panicked during evaluation, no result delivered");
        } else {
            tracing::debug!("job discarded before evaluation, no result delivered");
        }
        deliver(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn cancel_only_from_pending() {
        let handle = TaskHandle::new();
        assert_eq!(handle.state(), TaskState::Pending);
        assert!(handle.cancel());
        assert_eq!(handle.state(), TaskState::Completed);
        assert!(!handle.start());
        assert!(!handle.cancel());
    }

    #[test]
    fn running_task_cannot_be_cancelled() {
        let handle = TaskHandle::new();
        assert!(handle.start());
        assert_eq!(handle.state(), TaskState::Running);
        assert!(!handle.cancel());
        handle.finish();
        assert!(handle.is_completed());
    }

    #[test]
    fn clones_share_state() {
        let handle = TaskHandle::new();
        let other = handle.clone();
        assert!(other.cancel());
        assert!(handle.is_completed());
    }

    #[test]
    fn delivery_sends_once() {
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let handle = TaskHandle::new();
        let delivery: Delivery<u8> =
            Delivery::new(handle.clone(), Box::new(move |r| sink.lock().push(r)));
        delivery.send(Some(Ok(())));
        assert_eq!(*seen.lock(), vec![Some(Ok(()))]);
        assert!(handle.is_completed());
    }

    #[test]
    fn dropped_delivery_reports_absence() {
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let handle = TaskHandle::new();
        drop(Delivery::<u8>::new(handle.clone(), Box::new(move |r| sink.lock().push(r))));
        assert_eq!(*seen.lock(), vec![None]);
        assert!(handle.is_completed());
    }
}

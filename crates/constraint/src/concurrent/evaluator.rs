//! Lifting a synchronous constraint onto a worker context.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::concurrent::task::{Completion, Delivery};
use crate::concurrent::{ExecutionContext, TaskHandle, TaskState};
use crate::foundation::{Constraint, ConstraintResult, SharedConstraint};

// ============================================================================
// ASYNC EVALUATOR
// ============================================================================

/// Anything that can start an evaluation of `T` off the calling thread.
///
/// Implemented by [`AsyncConstraint`] and by
/// [`AsyncCompound`](crate::concurrent::AsyncCompound), so compounds can nest
/// other compounds as children.
pub trait AsyncEvaluator<T, E>: Send + Sync {
    /// Starts one evaluation. `complete` receives exactly one outcome, even
    /// if the work is cancelled or discarded. Returns the handles of every
    /// unit of work started, in registration order.
    fn start(&self, input: Arc<T>, complete: Completion<E>) -> Vec<TaskHandle>;
}

impl<T, E, A> AsyncEvaluator<T, E> for Arc<A>
where
    A: AsyncEvaluator<T, E> + ?Sized,
{
    fn start(&self, input: Arc<T>, complete: Completion<E>) -> Vec<TaskHandle> {
        (**self).start(input, complete)
    }
}

// ============================================================================
// ASYNC CONSTRAINT
// ============================================================================

/// Runs a constraint off the calling thread.
///
/// The wrapped constraint's synchronous `evaluate` runs on `worker`; results
/// are identical to calling it directly. The wrapper adds no failure modes of
/// its own: a task either yields the constraint's result or, if it was
/// cancelled before starting, nothing.
///
/// # Examples
///
/// ```rust,ignore
/// let pool = WorkerPool::with_defaults()?;
/// let checker = AsyncConstraint::new(password_rules(), pool.handle());
///
/// // Awaitable
/// let result = checker.evaluate("hunter2".to_owned()).await;
///
/// // Callback, delivered on a UI queue
/// let (ui, mut ui_driver) = serial_queue();
/// checker.submit("hunter2".to_owned(), ui, |result| render(result));
/// ui_driver.drain();
/// ```
pub struct AsyncConstraint<T, E> {
    constraint: SharedConstraint<T, E>,
    worker: Arc<dyn ExecutionContext>,
}

impl<T, E> Clone for AsyncConstraint<T, E> {
    fn clone(&self) -> Self {
        Self {
            constraint: Arc::clone(&self.constraint),
            worker: Arc::clone(&self.worker),
        }
    }
}

impl<T, E> fmt::Debug for AsyncConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncConstraint").finish_non_exhaustive()
    }
}

impl<T, E> AsyncConstraint<T, E>
where
    T: Send + Sync + 'static,
    E: Send + 'static,
{
    /// Wraps `constraint`, evaluating on `worker`.
    pub fn new<C, W>(constraint: C, worker: W) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
        W: ExecutionContext + 'static,
    {
        Self {
            constraint: Arc::new(constraint),
            worker: Arc::new(worker),
        }
    }

    /// Wraps an already shared constraint and context.
    pub fn from_shared(constraint: SharedConstraint<T, E>, worker: Arc<dyn ExecutionContext>) -> Self {
        Self { constraint, worker }
    }

    /// The wrapped constraint, for direct synchronous use.
    pub fn constraint(&self) -> &SharedConstraint<T, E> {
        &self.constraint
    }

    /// Queues one evaluation; `deliver` receives its outcome exactly once.
    pub(crate) fn dispatch<D>(&self, input: Arc<T>, deliver: D) -> TaskHandle
    where
        D: FnOnce(Option<ConstraintResult<E>>) + Send + 'static,
    {
        let handle = TaskHandle::new();
        let deliver: Completion<E> = Box::new(deliver);
        let delivery = Delivery::new(handle.clone(), deliver);
        let constraint = Arc::clone(&self.constraint);
        let task = handle.clone();

        self.worker.execute(Box::new(move || {
            if !task.start() {
                delivery.send(None);
                return;
            }
            let result = constraint.evaluate(&input);
            tracing::trace!(passed = result.is_ok(), "async evaluation finished");
            delivery.send(Some(result));
        }));
        handle
    }

    /// Starts an evaluation and returns an awaitable, cancellable task.
    pub fn spawn(&self, input: T) -> Task<E> {
        self.spawn_shared(Arc::new(input))
    }

    /// Like [`spawn`](Self::spawn) for an input that is already shared.
    pub fn spawn_shared(&self, input: Arc<T>) -> Task<E> {
        let (sender, receiver) = oneshot::channel();
        let handle = self.dispatch(input, move |result| {
            // The task may have been dropped; nobody is waiting then.
            let _ = sender.send(result);
        });
        tracing::debug!("async evaluation dispatched");
        Task { handle, receiver }
    }

    /// Evaluates on the worker and awaits the result.
    ///
    /// Returns `None` only if the worker discarded the job or the constraint
    /// panicked.
    pub async fn evaluate(&self, input: T) -> Option<ConstraintResult<E>> {
        self.spawn(input).join().await
    }

    /// Evaluates on the worker, then runs `callback` on `complete_on`.
    ///
    /// The callback is not invoked when the task is cancelled before it
    /// starts or its job is discarded.
    pub fn submit<C, F>(&self, input: T, complete_on: C, callback: F) -> TaskHandle
    where
        C: ExecutionContext + 'static,
        F: FnOnce(ConstraintResult<E>) + Send + 'static,
    {
        self.dispatch(Arc::new(input), move |result| match result {
            Some(result) => complete_on.execute(Box::new(move || callback(result))),
            None => tracing::debug!("no result, completion callback skipped"),
        })
    }
}

impl<T, E> AsyncEvaluator<T, E> for AsyncConstraint<T, E>
where
    T: Send + Sync + 'static,
    E: Send + 'static,
{
    fn start(&self, input: Arc<T>, complete: Completion<E>) -> Vec<TaskHandle> {
        vec![self.dispatch(input, complete)]
    }
}

// ============================================================================
// TASK
// ============================================================================

/// An in-flight evaluation.
#[must_use = "dropping a task does not cancel it; call `cancel` or `join`"]
pub struct Task<E> {
    handle: TaskHandle,
    receiver: oneshot::Receiver<Option<ConstraintResult<E>>>,
}

impl<E> fmt::Debug for Task<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("handle", &self.handle).finish()
    }
}

impl<E> Task<E> {
    /// The task's state handle.
    pub fn handle(&self) -> &TaskHandle {
        &self.handle
    }

    /// Current state.
    pub fn state(&self) -> TaskState {
        self.handle.state()
    }

    /// Cancels the task if it has not started yet.
    pub fn cancel(&self) -> bool {
        self.handle.cancel()
    }

    /// Waits for the outcome; `None` when the task produced no result.
    pub async fn join(self) -> Option<ConstraintResult<E>> {
        self.receiver.await.ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::rule;
    use crate::concurrent::{Immediate, serial_queue};
    use parking_lot::Mutex;

    fn positive() -> impl Constraint<Input = i32, Error = &'static str> + 'static {
        rule(|n: &i32| *n > 0, "not positive")
    }

    #[tokio::test]
    async fn immediate_evaluation_matches_sync() {
        let checker = AsyncConstraint::new(positive(), Immediate);
        assert_eq!(checker.evaluate(5).await, Some(Ok(())));
        let failed = checker.evaluate(-5).await.unwrap().unwrap_err();
        assert_eq!(failed.errors(), &["not positive"]);
    }

    #[tokio::test]
    async fn cancelled_task_yields_nothing() {
        let (worker, mut driver) = serial_queue();
        let checker = AsyncConstraint::new(positive(), worker);
        let task = checker.spawn(3);
        assert_eq!(task.state(), TaskState::Pending);
        assert!(task.cancel());
        driver.drain();
        assert_eq!(task.join().await, None);
    }

    #[tokio::test]
    async fn discarded_job_yields_nothing() {
        let (worker, driver) = serial_queue();
        drop(driver);
        let checker = AsyncConstraint::new(positive(), worker);
        assert_eq!(checker.evaluate(3).await, None);
    }

    #[test]
    fn submit_delivers_on_completion_context() {
        let (worker, mut worker_driver) = serial_queue();
        let (ui, mut ui_driver) = serial_queue();
        let checker = AsyncConstraint::new(positive(), worker);
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let handle = checker.submit(-1, ui, move |result| *sink.lock() = Some(result));
        assert_eq!(worker_driver.drain(), 1);
        assert!(handle.is_completed());
        assert!(seen.lock().is_none());
        assert_eq!(ui_driver.drain(), 1);
        let result = seen.lock().take().unwrap();
        assert_eq!(result.unwrap_err().errors(), &["not positive"]);
    }

    #[test]
    fn submit_skips_callback_when_cancelled() {
        let (worker, mut worker_driver) = serial_queue();
        let checker = AsyncConstraint::new(positive(), worker);
        let called = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&called);

        let handle = checker.submit(1, Immediate, move |_| *flag.lock() = true);
        assert!(handle.cancel());
        worker_driver.drain();
        assert!(!*called.lock());
    }
}

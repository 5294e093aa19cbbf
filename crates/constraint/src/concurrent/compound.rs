//! Concurrent fan-out / fan-in over async-wrapped children.
//!
//! Every child is dispatched at once. Each completion (including "no result"
//! for cancelled or discarded children) lands in the child's registration
//! slot and decrements a shared counter; whichever completion brings the
//! counter to zero folds the slots in registration order with the same
//! [`Strategy::fold`] the synchronous compound uses. Completion order never
//! affects the merged summary.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::combinators::Strategy;
use crate::concurrent::{AsyncConstraint, AsyncEvaluator, Completion, ExecutionContext, TaskHandle};
use crate::foundation::ConstraintResult;

type Finish<E> = Box<dyn FnOnce(ConstraintResult<E>) + Send>;

// ============================================================================
// JOIN
// ============================================================================

/// Dependency-counting barrier shared by every child of one evaluation.
struct Join<E> {
    strategy: Strategy,
    remaining: AtomicUsize,
    slots: Mutex<Vec<Option<ConstraintResult<E>>>>,
    finish: Mutex<Option<Finish<E>>>,
}

impl<E> Join<E> {
    fn new(strategy: Strategy, children: usize, finish: Finish<E>) -> Self {
        Self {
            strategy,
            remaining: AtomicUsize::new(children),
            slots: Mutex::new(std::iter::repeat_with(|| None).take(children).collect()),
            finish: Mutex::new(Some(finish)),
        }
    }

    fn record(&self, slot: usize, result: Option<ConstraintResult<E>>) {
        if let Some(result) = result {
            self.slots.lock()[slot] = Some(result);
        }
        if self.remaining.fetch_sub(1, Ordering::AcqRel) != 1 {
            return;
        }

        let slots = std::mem::take(&mut *self.slots.lock());
        let contributed = slots.iter().filter(|s| s.is_some()).count();
        let merged = self.strategy.fold(slots.into_iter().flatten());
        tracing::debug!(
            strategy = %self.strategy,
            contributed,
            passed = merged.is_ok(),
            "async compound joined"
        );
        let finish = self.finish.lock().take();
        if let Some(finish) = finish {
            finish(merged);
        }
    }
}

// ============================================================================
// ASYNC COMPOUND
// ============================================================================

/// Evaluates several async children concurrently and merges them exactly
/// like [`CompoundConstraint`](crate::combinators::CompoundConstraint).
///
/// Children are any [`AsyncEvaluator`]: single [`AsyncConstraint`]s or other
/// compounds. Children that were cancelled before starting contribute
/// nothing; if every child was cancelled the merged result is success.
pub struct AsyncCompound<T, E> {
    strategy: Strategy,
    children: Vec<Arc<dyn AsyncEvaluator<T, E>>>,
}

impl<T, E> Clone for AsyncCompound<T, E> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy,
            children: self.children.clone(),
        }
    }
}

impl<T, E> fmt::Debug for AsyncCompound<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncCompound")
            .field("strategy", &self.strategy)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T, E> AsyncCompound<T, E>
where
    T: Send + Sync + 'static,
    E: Send + 'static,
{
    /// Creates a compound from a strategy and its children.
    pub fn new(strategy: Strategy, children: Vec<AsyncConstraint<T, E>>) -> Self {
        Self {
            strategy,
            children: children
                .into_iter()
                .map(|child| Arc::new(child) as Arc<dyn AsyncEvaluator<T, E>>)
                .collect(),
        }
    }

    /// Every child must pass; every error is reported in child order.
    pub fn all_of(children: Vec<AsyncConstraint<T, E>>) -> Self {
        Self::new(Strategy::AllOf, children)
    }

    /// One child must pass; when none does, the last failure is reported.
    pub fn any_of(children: Vec<AsyncConstraint<T, E>>) -> Self {
        Self::new(Strategy::AnyOf, children)
    }

    /// Appends a child, which may itself be a compound.
    pub fn push<A>(&mut self, child: A)
    where
        A: AsyncEvaluator<T, E> + 'static,
    {
        self.children.push(Arc::new(child));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<A>(mut self, child: A) -> Self
    where
        A: AsyncEvaluator<T, E> + 'static,
    {
        self.push(child);
        self
    }

    /// The aggregation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` when there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn launch<F>(&self, input: Arc<T>, finish: F) -> Vec<TaskHandle>
    where
        F: FnOnce(ConstraintResult<E>) + Send + 'static,
    {
        if self.children.is_empty() {
            finish(Ok(()));
            return Vec::new();
        }

        let join = Arc::new(Join::new(self.strategy, self.children.len(), Box::new(finish)));
        tracing::debug!(
            strategy = %self.strategy,
            children = self.children.len(),
            "async compound dispatched"
        );
        self.children
            .iter()
            .enumerate()
            .flat_map(|(slot, child)| {
                let join = Arc::clone(&join);
                child.start(
                    Arc::clone(&input),
                    Box::new(move |result| join.record(slot, result)),
                )
            })
            .collect()
    }

    /// Starts every child and returns an awaitable, cancellable task.
    pub fn spawn(&self, input: T) -> CompoundTask<E> {
        let (sender, receiver) = oneshot::channel();
        let children = self.launch(Arc::new(input), move |result| {
            let _ = sender.send(result);
        });
        CompoundTask {
            children: CompoundHandle { children },
            receiver,
        }
    }

    /// Evaluates every child concurrently and awaits the merged result.
    ///
    /// Returns `None` only if the join was torn down without completing,
    /// which the delivery guards rule out short of aborting the process.
    pub async fn evaluate(&self, input: T) -> Option<ConstraintResult<E>> {
        self.spawn(input).join().await
    }

    /// Evaluates every child concurrently, then runs `callback` with the
    /// merged result on `complete_on`.
    pub fn submit<C, F>(&self, input: T, complete_on: C, callback: F) -> CompoundHandle
    where
        C: ExecutionContext + 'static,
        F: FnOnce(ConstraintResult<E>) + Send + 'static,
    {
        let children = self.launch(Arc::new(input), move |result| {
            complete_on.execute(Box::new(move || callback(result)));
        });
        CompoundHandle { children }
    }
}

impl<T, E> AsyncEvaluator<T, E> for AsyncCompound<T, E>
where
    T: Send + Sync + 'static,
    E: Send + 'static,
{
    fn start(&self, input: Arc<T>, complete: Completion<E>) -> Vec<TaskHandle> {
        self.launch(input, move |merged| complete(Some(merged)))
    }
}

// ============================================================================
// HANDLES
// ============================================================================

/// Handles of every child of one compound evaluation.
#[derive(Debug, Clone)]
pub struct CompoundHandle {
    children: Vec<TaskHandle>,
}

impl CompoundHandle {
    /// Cancels every child that has not started yet; returns how many were
    /// cancelled. Children already running finish normally.
    pub fn cancel(&self) -> usize {
        self.children.iter().filter(|child| child.cancel()).count()
    }

    /// Per-child handles in registration order.
    pub fn children(&self) -> &[TaskHandle] {
        &self.children
    }

    /// Returns `true` once every child has completed.
    pub fn is_completed(&self) -> bool {
        self.children.iter().all(TaskHandle::is_completed)
    }
}

/// An in-flight compound evaluation.
#[must_use = "dropping a task does not cancel it; call `cancel` or `join`"]
pub struct CompoundTask<E> {
    children: CompoundHandle,
    receiver: oneshot::Receiver<ConstraintResult<E>>,
}

impl<E> fmt::Debug for CompoundTask<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundTask")
            .field("children", &self.children)
            .finish()
    }
}

impl<E> CompoundTask<E> {
    /// The children's handles.
    pub fn handle(&self) -> &CompoundHandle {
        &self.children
    }

    /// Cancels every still-pending child.
    pub fn cancel(&self) -> usize {
        self.children.cancel()
    }

    /// Waits for the merged result.
    pub async fn join(self) -> Option<ConstraintResult<E>> {
        self.receiver.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::rule;
    use crate::concurrent::{Immediate, serial_queue};

    fn expects_fake(error: &'static str) -> AsyncConstraint<String, &'static str> {
        AsyncConstraint::new(rule(|s: &String| s == "fakeInput", error), Immediate)
    }

    #[tokio::test]
    async fn all_of_merges_in_registration_order() {
        let compound = AsyncCompound::all_of(vec![expects_fake("Invalid"), expects_fake("MissingInput")]);
        let summary = compound.evaluate("~fakeInput".into()).await.unwrap().unwrap_err();
        assert_eq!(summary.errors(), &["Invalid", "MissingInput"]);
    }

    #[tokio::test]
    async fn any_of_keeps_last_failure() {
        let compound = AsyncCompound::any_of(vec![expects_fake("Invalid"), expects_fake("MissingInput")]);
        let summary = compound.evaluate("~fakeInput".into()).await.unwrap().unwrap_err();
        assert_eq!(summary.errors(), &["MissingInput"]);
    }

    #[tokio::test]
    async fn empty_compound_succeeds_immediately() {
        let compound: AsyncCompound<String, &str> = AsyncCompound::all_of(Vec::new());
        assert_eq!(compound.evaluate(String::new()).await, Some(Ok(())));
    }

    #[tokio::test]
    async fn cancelled_children_contribute_nothing() {
        let (worker, mut driver) = serial_queue();
        let slow = AsyncConstraint::new(rule(|_: &String| false, "queued"), worker);
        let compound = AsyncCompound::all_of(vec![expects_fake("Invalid"), slow]);

        let task = compound.spawn("x".into());
        assert_eq!(task.cancel(), 1);
        driver.drain();
        let summary = task.join().await.unwrap().unwrap_err();
        assert_eq!(summary.errors(), &["Invalid"]);
    }

    #[tokio::test]
    async fn all_children_cancelled_is_success() {
        let (worker, mut driver) = serial_queue();
        let child = AsyncConstraint::new(rule(|_: &String| false, "never"), worker);
        let compound = AsyncCompound::any_of(vec![child.clone(), child]);

        let task = compound.spawn("x".into());
        assert_eq!(task.cancel(), 2);
        assert!(task.handle().is_completed());
        driver.drain();
        assert_eq!(task.join().await, Some(Ok(())));
    }

    #[test]
    fn out_of_order_completion_keeps_registration_order() {
        let (first_worker, mut first) = serial_queue();
        let (second_worker, mut second) = serial_queue();
        let compound = AsyncCompound::all_of(vec![
            AsyncConstraint::new(rule(|_: &String| false, "first"), first_worker),
            AsyncConstraint::new(rule(|_: &String| false, "second"), second_worker),
        ]);

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let handle = compound.submit("x".into(), Immediate, move |r| *sink.lock() = Some(r));

        second.drain();
        assert!(seen.lock().is_none());
        first.drain();
        assert!(handle.is_completed());
        let merged = seen.lock().take().unwrap().unwrap_err();
        assert_eq!(merged.errors(), &["first", "second"]);
    }

    #[tokio::test]
    async fn compounds_nest_like_sync_compounds() {
        let inner = AsyncCompound::any_of(vec![expects_fake("A"), expects_fake("B")]);
        let outer = AsyncCompound::all_of(vec![expects_fake("Invalid")])
            .with(inner)
            .with(expects_fake("MissingInput"));
        assert_eq!(outer.len(), 3);

        let summary = outer.evaluate("~fakeInput".into()).await.unwrap().unwrap_err();
        assert_eq!(summary.errors(), &["Invalid", "B", "MissingInput"]);
        assert_eq!(outer.evaluate("fakeInput".into()).await, Some(Ok(())));
    }

    #[test]
    fn cancelling_an_outer_compound_reaches_nested_children() {
        let (worker, mut driver) = serial_queue();
        let queued = AsyncConstraint::new(rule(|_: &String| false, "queued"), worker);
        let inner = AsyncCompound::all_of(vec![queued.clone(), queued]);
        let outer = AsyncCompound::all_of(vec![expects_fake("Invalid")]).with(inner);

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let handle = outer.submit("x".into(), Immediate, move |r| *sink.lock() = Some(r));
        assert_eq!(handle.children().len(), 3);
        assert_eq!(handle.cancel(), 2);

        driver.drain();
        let merged = seen.lock().take().unwrap().unwrap_err();
        assert_eq!(merged.errors(), &["Invalid"]);
    }
}

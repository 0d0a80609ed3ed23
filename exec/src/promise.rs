//! Write-once promise
//! -------------------
//! `Promise<T, E>` is the single asynchronous-result type the whole pipeline
//! is built on. One promise represents the eventual outcome of one step:
//! either a value of `T` or an error of `E`.
//!
//! ## Contract
//!  - A promise settles **exactly once**. Later calls to `complete` / `fail`
//!    are silently dropped; the first outcome is the outcome.
//!  - The outcome is delivered to **exactly one consumer**: either a
//!    continuation attached with `on_complete` (or one of the combinators
//!    built on it) or a task awaiting the promise as a `Future`. Claiming an
//!    outcome twice is a programming error and panics.
//!  - A continuation attached before settlement is queued and later invoked
//!    on whichever task settles the promise. Attached after settlement it
//!    runs immediately on the attaching task. Either way it runs once.
//!
//! The same type serves the three access disciplines the pipeline needs:
//! explicit completion from worker-side code (`complete` / `fail`), monadic
//! chaining (`map` / `try_map` / `and_then`), and a terminal `await` via the
//! `Future` implementation. Attaching a continuation never blocks the
//! caller; only the terminal `await` suspends, and it suspends the awaiting
//! task, not a pool worker.

use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};

type Continuation<T, E> = Box<dyn FnOnce(Result<T, E>) + Send + 'static>;

enum State<T, E> {
    Pending {
        continuation: Option<Continuation<T, E>>,
        waker: Option<Waker>,
    },
    Settled(Result<T, E>),
    Consumed,
}

/// Write-once container for the eventual outcome of one asynchronous step.
///
/// Cloning a promise clones the handle, not the outcome; all clones settle
/// and observe the same shared state.
pub struct Promise<T, E> {
    state: Arc<Mutex<State<T, E>>>,
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, E> Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// A fresh, unsettled promise.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::Pending {
                continuation: None,
                waker: None,
            })),
        }
    }

    /// A promise that is already settled with `outcome`.
    pub fn settled(outcome: Result<T, E>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::Settled(outcome))),
        }
    }

    pub fn complete(&self, value: T) {
        self.settle(Ok(value));
    }

    pub fn fail(&self, error: E) {
        self.settle(Err(error));
    }

    pub(crate) fn settle(&self, outcome: Result<T, E>) {
        let mut guard = lock(&self.state);
        match mem::replace(&mut *guard, State::Consumed) {
            State::Pending {
                continuation: Some(f),
                ..
            } => {
                drop(guard);
                f(outcome);
            }
            State::Pending {
                continuation: None,
                waker,
            } => {
                *guard = State::Settled(outcome);
                drop(guard);
                if let Some(waker) = waker {
                    waker.wake();
                }
            }
            // Write-once: the promise already settled, the new outcome is dropped.
            prior => *guard = prior,
        }
    }

    /// Attach the single continuation. Runs immediately if the promise has
    /// already settled, otherwise on the task that settles it.
    ///
    /// # Panics
    /// Panics if the outcome was already claimed by another consumer.
    pub fn on_complete<F>(self, f: F)
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        let mut guard = lock(&self.state);
        match mem::replace(&mut *guard, State::Consumed) {
            State::Pending {
                continuation: None,
                waker,
            } => {
                *guard = State::Pending {
                    continuation: Some(Box::new(f)),
                    waker,
                };
            }
            State::Settled(outcome) => {
                drop(guard);
                f(outcome);
            }
            State::Pending {
                continuation: Some(_),
                ..
            }
            | State::Consumed => panic!("promise outcome already claimed by another consumer"),
        }
    }

    /// Transform a successful value; errors pass through untouched.
    pub fn map<U, F>(self, f: F) -> Promise<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.try_map(|value| Ok(f(value)))
    }

    /// Transform a successful value into a `Result`, allowing a step to
    /// reject a value it does not accept. Errors pass through untouched.
    pub fn try_map<U, F>(self, f: F) -> Promise<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        let next = Promise::new();
        let downstream = next.clone();
        self.on_complete(move |outcome| downstream.settle(outcome.and_then(f)));
        next
    }

    /// Dependent chaining: `f` builds the next promise only once this one has
    /// completed successfully. A failure short-circuits; `f` is never called.
    pub fn and_then<U, F>(self, f: F) -> Promise<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Promise<U, E> + Send + 'static,
    {
        let next = Promise::new();
        let downstream = next.clone();
        self.on_complete(move |outcome| match outcome {
            Ok(value) => f(value).on_complete(move |inner| downstream.settle(inner)),
            Err(error) => downstream.fail(error),
        });
        next
    }
}

impl<T, E> Default for Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Future for Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut guard = lock(&self.state);
        match mem::replace(&mut *guard, State::Consumed) {
            State::Settled(outcome) => Poll::Ready(outcome),
            State::Pending {
                continuation: None, ..
            } => {
                *guard = State::Pending {
                    continuation: None,
                    waker: Some(cx.waker().clone()),
                };
                Poll::Pending
            }
            State::Pending {
                continuation: Some(_),
                ..
            }
            | State::Consumed => panic!("promise outcome already claimed by another consumer"),
        }
    }
}

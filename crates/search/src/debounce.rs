//! Cancellable delayed delivery of the latest input.
//!
//! Every `push` schedules the value to be delivered after the interval and
//! cancels whatever was scheduled before it. Only an input that is left
//! alone for a full interval reaches the receiver.
//!
//! ## Algorithm
//! 1. Bump the generation counter and abort the pending task, if any
//! 2. Spawn a task that sleeps until `now + interval`
//! 3. On wake-up, deliver only if no newer push happened meanwhile
//!
//! The generation check covers the window where a task has already woken
//! up when a newer value is pushed, so a stale value can never land after
//! a fresher one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

use crate::error::Result;

/// Receiving end of a [`Debouncer`].
pub type DebouncedReceiver<T> = mpsc::UnboundedReceiver<T>;

pub struct Debouncer<T> {
    interval: Duration,
    handle: Handle,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer bound to the current tokio runtime.
    ///
    /// Fails with [`SearchError::NoRuntime`](crate::SearchError::NoRuntime)
    /// when called outside a runtime.
    pub fn new(interval: Duration) -> Result<(Self, DebouncedReceiver<T>)> {
        let handle = Handle::try_current()?;
        let (sender, receiver) = mpsc::unbounded_channel();
        let debouncer = Self {
            interval,
            handle,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            sender,
        };
        Ok((debouncer, receiver))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `value`, superseding anything still pending.
    pub fn push(&mut self, value: T) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_pending();

        let deadline = Instant::now() + self.interval;
        let current = Arc::clone(&self.generation);
        let sender = self.sender.clone();
        self.pending = Some(self.handle.spawn(async move {
            sleep_until(deadline).await;
            if current.load(Ordering::SeqCst) == generation {
                trace!(generation, "debounce fired");
                // Receiver gone means the owner was dropped; nothing to do
                let _ = sender.send(value);
            }
        }));
    }

    /// Drop the pending value without delivering it.
    ///
    /// Returns whether something was still waiting.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.abort_pending();
        was_pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn abort_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

//! Owned state cell with a queued, functional update discipline
//!
//! Updates are never applied in place. Handlers enqueue closures through a
//! [`StateSetter`]; the owner drains the queue with [`StateCell::apply_pending`]
//! before the next paint, folding every closure over the latest value. Two
//! updates enqueued back to back therefore both observe each other's result.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// A queued state update. Receives the latest committed-or-pending value.
type Update<S> = Box<dyn FnOnce(&S) -> S + Send>;

/// Result of a commit that produced a new value
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub prev: S,
    pub next: S,
    pub revision: u64,
}

/// Handle used by event handlers to request state updates
pub struct StateSetter<S> {
    tx: UnboundedSender<Update<S>>,
}

impl<S> Clone for StateSetter<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<S: 'static> StateSetter<S> {
    /// Enqueue an update computed from the previous state.
    ///
    /// Returns false if the owning cell is gone.
    pub fn set_with(&self, update: impl FnOnce(&S) -> S + Send + 'static) -> bool {
        self.tx.send(Box::new(update)).is_ok()
    }

    /// Enqueue a wholesale replacement of the state.
    #[allow(dead_code)]
    pub fn set(&self, value: S) -> bool
    where
        S: Send,
    {
        self.set_with(move |_| value)
    }
}

/// Single owned state value plus its pending update queue
pub struct StateCell<S> {
    value: S,
    revision: u64,
    tx: UnboundedSender<Update<S>>,
    rx: UnboundedReceiver<Update<S>>,
}

impl<S: Clone + PartialEq + 'static> StateCell<S> {
    pub fn new(initial: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            value: initial,
            revision: 0,
            tx,
            rx,
        }
    }

    /// Current committed value
    pub fn get(&self) -> &S {
        &self.value
    }

    /// Number of commits that changed the value
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn setter(&self) -> StateSetter<S> {
        StateSetter {
            tx: self.tx.clone(),
        }
    }

    /// Drain and apply every queued update in enqueue order.
    ///
    /// Returns `None` when nothing was queued or when the batch ends on a
    /// value equal to the committed one.
    pub fn apply_pending(&mut self) -> Option<Transition<S>> {
        let mut next: Option<S> = None;
        let mut applied = 0usize;

        loop {
            match self.rx.try_recv() {
                Ok(update) => {
                    let base = next.as_ref().unwrap_or(&self.value);
                    next = Some(update(base));
                    applied += 1;
                }
                // The cell holds its own sender, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        let next = next?;
        if next == self.value {
            trace!(applied, "state batch settled on an equal value");
            return None;
        }

        let prev = std::mem::replace(&mut self.value, next);
        self.revision += 1;
        trace!(applied, revision = self.revision, "state committed");

        Some(Transition {
            prev,
            next: self.value.clone(),
            revision: self.revision,
        })
    }

    /// Discard queued updates without applying them
    pub fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.rx.try_recv().is_ok() {
            dropped += 1;
        }
        dropped
    }
}

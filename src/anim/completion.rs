//! Completion signals for in-flight animation runs.
//!
//! A [`Completion`] is a cheap, cloneable handle that resolves when the run
//! that produced it finishes. Completions are the only suspension point in
//! the crate: starting work is always synchronous, and callers that care
//! await the returned completion.

use tokio::sync::watch;

/// Producer side of a completion signal.
///
/// Dropping the source without calling [`complete`](CompletionSource::complete)
/// also resolves all subscribed completions: a superseded or aborted run must
/// release its waiters, never hang them.
pub struct CompletionSource {
    tx: watch::Sender<bool>,
}

impl CompletionSource {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Create a completion resolved by this source.
    pub fn subscribe(&self) -> Completion {
        Completion {
            inner: Inner::Pending(self.tx.subscribe()),
        }
    }

    /// Resolve every subscribed completion.
    pub fn complete(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CompletionSource {
    fn default() -> Self {
        Self::new()
    }
}

/// An awaitable signal that a run has finished.
#[derive(Clone)]
pub struct Completion {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Ready,
    Pending(watch::Receiver<bool>),
}

impl Completion {
    /// An already-resolved completion (instant paths, degraded actions).
    pub fn ready() -> Self {
        Self {
            inner: Inner::Ready,
        }
    }

    /// Whether the completion has already resolved.
    pub fn is_resolved(&self) -> bool {
        match &self.inner {
            Inner::Ready => true,
            Inner::Pending(rx) => *rx.borrow() || rx.has_changed().is_err(),
        }
    }

    /// Wait until resolved. Returns immediately for ready completions and
    /// for runs whose source has gone away.
    pub async fn wait(self) {
        match self.inner {
            Inner::Ready => {}
            Inner::Pending(mut rx) => {
                // Err means the source was dropped, which counts as resolved.
                let _ = rx.wait_for(|done| *done).await;
            }
        }
    }

    /// Wait for every completion in the set. Resolves when the slowest one
    /// does; an empty set resolves immediately.
    pub async fn join(completions: impl IntoIterator<Item = Completion>) {
        for completion in completions {
            completion.wait().await;
        }
    }
}

//! Cancellable wireframe job polling.
//!
//! When a wireframe generation job is enqueued, the backend works on it
//! asynchronously. This module drives the client-side half: a spawned task
//! that checks the job status after a short initial delay, then at a fixed
//! interval, emitting events until the job leaves the pending state.
//!
//! The poll loop is revocable: [`PollHandle::cancel`] guarantees that no
//! further events are emitted once the owning view is torn down, even if a
//! status check is already in flight.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use storymap_protocol::WireframeStatus;

use crate::client::WireframeStatusResponse;
use crate::error::Result;

/// An event produced by the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// The job is still pending; `status`/`error` overwrite local state.
    Status {
        /// The status reported by the backend.
        status: WireframeStatus,
        /// The persisted error message, if any.
        error: Option<String>,
    },
    /// The job left the pending state. Emitted exactly once, after which
    /// the loop stops; the consumer should silently refresh the project
    /// so the generated markdown (or persisted error) becomes visible.
    Resolved {
        /// The terminal status the job settled on.
        status: WireframeStatus,
        /// The persisted error message, if the job failed.
        error: Option<String>,
    },
    /// A status check itself failed (network or API rejection). The loop
    /// keeps polling; the consumer may surface the detail as a toast.
    Failed(String),
}

/// A handle to a running poll loop.
///
/// Dropping the handle does not stop the loop; call [`cancel`](Self::cancel)
/// to revoke it. After cancellation no further events are delivered.
#[derive(Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Cancels the poll loop.
    ///
    /// The liveness flag is cleared before the task is aborted, so a tick
    /// that already fetched a response cannot emit it afterwards.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.task.abort();
        debug!("wireframe poll loop cancelled");
    }

    /// Returns whether the loop has not been cancelled or finished.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst) && !self.task.is_finished()
    }
}

/// Spawns a poll loop driven by `fetch`.
///
/// The first status check fires after `initial_delay`; subsequent checks
/// fire every `interval` until the fetched status is no longer pending.
/// Responses are applied in receipt order; a late response overtaking a
/// newer one at worst costs one extra poll cycle, since the job only moves
/// toward a terminal state.
///
/// Returns the handle and the receiving end of the event stream.
#[instrument(skip(fetch))]
pub fn spawn_poll<F, Fut>(
    mut fetch: F,
    initial_delay: Duration,
    interval: Duration,
) -> (PollHandle, mpsc::UnboundedReceiver<PollEvent>)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<WireframeStatusResponse>> + Send,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let alive = Arc::new(AtomicBool::new(true));
    let liveness = Arc::clone(&alive);

    let task = tokio::spawn(async move {
        tokio::time::sleep(initial_delay).await;

        loop {
            if !liveness.load(Ordering::SeqCst) {
                return;
            }

            let outcome = fetch().await;

            // The owner may have been torn down while the check was in
            // flight; a stale response must never reach it.
            if !liveness.load(Ordering::SeqCst) {
                return;
            }

            match outcome {
                Ok(response) if response.status.is_pending() => {
                    debug!("wireframe job still pending");
                    let event = PollEvent::Status {
                        status: response.status,
                        error: response.error,
                    };
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Ok(response) => {
                    debug!(status = ?response.status, "wireframe job resolved");
                    let event = PollEvent::Resolved {
                        status: response.status,
                        error: response.error,
                    };
                    let _ = tx.send(event);
                    liveness.store(false, Ordering::SeqCst);
                    return;
                }
                Err(e) => {
                    warn!(error = %e, "wireframe status check failed");
                    if tx.send(PollEvent::Failed(e.detail())).is_err() {
                        return;
                    }
                }
            }

            tokio::time::sleep(interval).await;
        }
    });

    (PollHandle { alive, task }, rx)
}

//! Latest-wins execution for in-flight submissions.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use futures::future::{abortable, AbortHandle, Aborted};
use futures::TryFutureExt;
use thiserror::Error;
use tracing::debug;

/// A submission was cancelled because a newer one started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("submission superseded by a newer one")]
pub struct Superseded;

impl From<Aborted> for Superseded {
    fn from(_: Aborted) -> Self {
        Superseded
    }
}

/// Runs futures so that starting one aborts the previous one.
///
/// Executor-agnostic: cancellation goes through `futures` abort handles, and
/// the aborted future resolves to [`Superseded`] the next time it is polled.
///
/// ```rust
/// use mediconnect::submit::{LatestOnly, Superseded};
///
/// # tokio_test::block_on(async {
/// let latest = LatestOnly::new();
/// let (first, second) = futures::join!(
///     latest.run(futures::future::pending::<u8>()),
///     latest.run(async { 2 }),
/// );
/// assert_eq!(first, Err(Superseded));
/// assert_eq!(second, Ok(2));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct LatestOnly {
    current: Mutex<Option<AbortHandle>>,
}

impl LatestOnly {
    /// No submission in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future`, aborting whatever this runner started before.
    ///
    /// The previous submission is aborted when `run` is called, not when the
    /// returned future is first polled, so call order alone decides which
    /// submission is the latest.
    ///
    /// # Errors
    ///
    /// The returned future resolves to [`Superseded`] when `run` was called
    /// again before it finished.
    pub fn run<F: Future>(
        &self,
        future: F,
    ) -> impl Future<Output = Result<F::Output, Superseded>> {
        let (future, handle) = abortable(future);
        self.replace(handle);
        future.map_err(Superseded::from)
    }

    /// Abort the submission in flight, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.slot().take() {
            previous.abort();
        }
    }

    fn replace(&self, handle: AbortHandle) {
        if let Some(previous) = self.slot().replace(handle) {
            debug!("superseding previous submission");
            previous.abort();
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Deferred one-shot tasks with an explicit cancellation handle

use crate::errors::{PanelError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// A pending one-shot update
///
/// Holding the handle keeps cancellation explicit: callers can cancel or
/// replace a pending update instead of racing a fire-and-forget timer.
/// Dropping the handle detaches the task; it still runs.
#[derive(Debug)]
pub struct ScheduledUpdate {
    handle: JoinHandle<Result<()>>,
    delay: Duration,
}

impl ScheduledUpdate {
    /// Spawn a task that waits for `delay` and then runs `update`
    pub(crate) fn spawn<F>(delay: Duration, update: F) -> Self
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        debug!("Scheduling update in {}ms", delay.as_millis());

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            update.await
        });

        Self { handle, delay }
    }

    /// The delay this update was scheduled with
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel the update if it has not run yet
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the update to run and surface its result
    pub async fn join(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(PanelError::Cancelled),
            Err(err) => Err(PanelError::Other(format!("Update task failed: {}", err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::yield_now;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_update_runs_only_after_delay() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let update = ScheduledUpdate::spawn(Duration::from_millis(1000), async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        yield_now().await;
        advance(Duration::from_millis(999)).await;
        yield_now().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(!update.is_finished());

        advance(Duration::from_millis(1)).await;
        update.join().await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_update_never_runs() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let update = ScheduledUpdate::spawn(Duration::from_millis(1000), async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        yield_now().await;
        update.cancel();
        advance(Duration::from_millis(2000)).await;

        let result = update.join().await;
        assert!(matches!(result, Err(PanelError::Cancelled)));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_surfaces_update_error() {
        let update = ScheduledUpdate::spawn(Duration::from_millis(10), async {
            Err(PanelError::MissingElement("container-status".to_string()))
        });

        advance(Duration::from_millis(10)).await;
        let result = update.join().await;
        assert!(matches!(result, Err(PanelError::MissingElement(_))));
    }
}

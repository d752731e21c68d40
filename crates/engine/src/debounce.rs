//! Cancellable delayed execution for the live tone indicator.
//!
//! The quick scorer itself has no concept of time; this wrapper gives
//! callers the required quiet-period behavior: each `schedule` cancels any
//! pending run and re-arms the timer, so only the last edit inside the
//! quiet period triggers a computation.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arm the timer with a fresh task, cancelling whatever was pending.
    /// The task runs once after the full quiet period passes undisturbed.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });

        let mut pending = self.pending.lock().expect("debouncer lock");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drop any pending task without running it.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().expect("debouncer lock").take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn counter_task(counter: &Arc<AtomicU32>) -> impl FnOnce() + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_only_after_full_quiet_period() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicU32::new(0));

        debouncer.schedule(counter_task(&fired));

        tokio::time::advance(Duration::from_millis(299)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_restarts_the_timer() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicU32::new(0));

        debouncer.schedule(counter_task(&fired));
        tokio::time::advance(Duration::from_millis(200)).await;
        settle().await;

        // A new keystroke inside the quiet period cancels the pending run.
        debouncer.schedule(counter_task(&fired));
        tokio::time::advance(Duration::from_millis(299)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_task() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicU32::new(0));

        debouncer.schedule(counter_task(&fired));
        debouncer.cancel();

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_schedules_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicU32::new(0));

        debouncer.schedule(counter_task(&fired));
        tokio::time::advance(Duration::from_millis(300)).await;
        settle().await;

        debouncer.schedule(counter_task(&fired));
        tokio::time::advance(Duration::from_millis(300)).await;
        settle().await;

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}

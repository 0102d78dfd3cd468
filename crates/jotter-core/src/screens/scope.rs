//! Lifetime of a mounted screen.
//!
//! Backend calls a controller makes are wrapped in [`ScreenScope::run`]. Once
//! the screen is torn down the pending call is dropped and its result is never
//! applied.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug)]
pub struct ScreenScope {
    cancelled: Arc<watch::Sender<bool>>,
}

/// Cloneable handle the UI keeps to tear a screen down.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    cancelled: Arc<watch::Sender<bool>>,
}

impl ScopeHandle {
    pub fn cancel(&self) {
        self.cancelled.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self {
            cancelled: Arc::new(cancelled),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Drive `future` unless the scope is cancelled first.
    ///
    /// Returns `None` when cancellation wins, including a cancel that lands
    /// while the output is being produced.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        let mut cancelled = self.cancelled.subscribe();
        if *cancelled.borrow_and_update() {
            return None;
        }

        tokio::select! {
            biased;
            _ = cancelled.wait_for(|cancelled| *cancelled) => None,
            output = future => (!self.is_cancelled()).then_some(output),
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn run_passes_output_through() {
        let scope = ScreenScope::new();
        assert_eq!(scope.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn cancelled_scope_skips_work() {
        let scope = ScreenScope::new();
        scope.cancel();
        assert_eq!(scope.run(async { 7 }).await, None);
    }

    #[tokio::test]
    async fn cancel_interrupts_pending_future() {
        let scope = ScreenScope::new();
        let handle = scope.handle();

        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            7
        };
        let teardown = async {
            tokio::task::yield_now().await;
            handle.cancel();
        };

        let (output, ()) = tokio::join!(scope.run(slow), teardown);
        assert_eq!(output, None);
        assert!(scope.is_cancelled());
    }

    #[test]
    fn dropping_scope_cancels_handles() {
        let scope = ScreenScope::new();
        let handle = scope.handle();
        assert!(!handle.is_cancelled());
        drop(scope);
        assert!(handle.is_cancelled());
    }
}

use std::collections::HashMap;
use std::future::Future;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct ScopeInner {
    closed: AtomicBool,
    next_id: AtomicU64,
    handles: Mutex<HashMap<u64, AbortHandle>>,
}

/// Keeps one piece of work registered; dropping it (work settled or abandoned)
/// forgets the abort handle.
struct Registered {
    inner: Arc<ScopeInner>,
    id: u64,
}

impl Drop for Registered {
    fn drop(&mut self) {
        self.inner
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

impl ScopeInner {
    fn register(self: &Arc<Self>) -> (Registered, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);

        // Checked under the lock so a concurrent close cannot miss this handle.
        if self.closed.load(Ordering::SeqCst) {
            handle.abort();
        } else {
            handles.insert(id, handle);
        }
        drop(handles);

        let registered = Registered {
            inner: Arc::clone(self),
            id,
        };
        (registered, registration)
    }

    fn close(&self) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        self.closed.store(true, Ordering::SeqCst);
        for (_, handle) in handles.drain() {
            handle.abort();
        }
    }
}

/// Lifetime of one mounted screen. Work started through it is aborted when
/// the scope closes, either explicitly or when the scope is dropped.
#[derive(Debug, Default)]
pub struct ScreenScope {
    inner: Arc<ScopeInner>,
}

/// Closes a [`ScreenScope`] from elsewhere, e.g. while one of its fetches is pending.
#[derive(Debug, Clone)]
pub struct ScopeCloser {
    inner: Arc<ScopeInner>,
}

impl ScopeCloser {
    pub fn close(&self) {
        self.inner.close();
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives `future` unless the scope closes first.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Aborted> {
        let (_registered, registration) = self.inner.register();
        Abortable::new(future, registration).await
    }

    /// Spawns `future` on the runtime, tied to this scope.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<Result<F::Output, Aborted>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let (registered, registration) = self.inner.register();
        tokio::spawn(async move {
            let _registered = registered;
            Abortable::new(future, registration).await
        })
    }

    pub fn closer(&self) -> ScopeCloser {
        ScopeCloser {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Work started through this scope that has not settled yet.
    pub fn pending(&self) -> usize {
        self.inner
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn completed_work_is_returned() {
        let scope = ScreenScope::new();

        let result = scope.run(async { 7 }).await;

        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn closing_aborts_pending_work() {
        // Arrange
        let scope = ScreenScope::new();
        let closer = scope.closer();

        // Act
        let (result, _) = tokio::join!(
            scope.run(tokio::time::sleep(Duration::from_secs(60))),
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                closer.close();
            }
        );

        // Assert
        assert_eq!(result, Err(Aborted));
        assert!(scope.is_closed());
    }

    #[tokio::test]
    async fn work_started_after_close_never_runs() {
        let scope = ScreenScope::new();
        scope.close();

        let result = scope.run(async { panic!("must not be polled") }).await;

        assert_eq!(result, Err(Aborted));
    }

    #[tokio::test]
    async fn settled_work_is_forgotten() {
        let scope = ScreenScope::new();

        for _ in 0..1000 {
            scope.run(async { 1 }).await.unwrap();
        }

        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_counts_only_unsettled_work() {
        // Arrange
        let scope = ScreenScope::new();
        let (release, wait) = tokio::sync::oneshot::channel::<()>();
        let task = scope.spawn(async move {
            wait.await.ok();
        });
        tokio::task::yield_now().await;

        // Act
        let while_running = scope.pending();
        release.send(()).unwrap();
        task.await.unwrap().unwrap();

        // Assert
        assert_eq!(while_running, 1);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn abandoned_run_is_forgotten() {
        let scope = ScreenScope::new();

        {
            let never = scope.run(std::future::pending::<()>());
            futures::pin_mut!(never);
            assert!(futures::poll!(never.as_mut()).is_pending());
            assert_eq!(scope.pending(), 1);
        }

        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_scope_stops_spawned_tasks() {
        let scope = ScreenScope::new();
        let task = scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        drop(scope);

        assert_eq!(task.await.unwrap(), Err(Aborted));
    }
}

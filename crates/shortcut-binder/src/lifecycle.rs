use crate::{Deactivation, LifecycleBinder};
use log::debug;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

/// Mount slot for one view.
///
/// Holds at most one live binding. Mount and unmount never overlap, but
/// callers racing from separate tasks are applied in lock order, not call
/// order. Hosts that need call order go through [`ViewLifecycle::into_worker`].
pub struct ViewLifecycle {
    binder: LifecycleBinder,
    active: Mutex<Option<Deactivation>>,
}

impl ViewLifecycle {
    pub fn new(binder: LifecycleBinder) -> Self {
        Self {
            binder,
            active: Mutex::new(None),
        }
    }

    pub async fn mount(&self) {
        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            debug!("View re-mounted without unmount, releasing previous binding");
            previous.run().await;
        }
        *active = self.binder.activate().await;
    }

    pub async fn unmount(&self) {
        let deactivation = self.active.lock().await.take();
        match deactivation {
            Some(deactivation) => deactivation.run().await,
            None => debug!("Unmount with no active binding"),
        }
    }

    pub async fn is_mounted(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Split into a sender for lifecycle events and the single worker that
    /// applies them in the order they were sent.
    pub fn into_worker(self) -> (LifecycleSender, LifecycleWorker) {
        let (tx, rx) = unbounded_channel();
        (LifecycleSender { tx }, LifecycleWorker { view: self, rx })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Mount,
    Unmount,
}

/// Queues lifecycle events from synchronous host callbacks
#[derive(Debug, Clone)]
pub struct LifecycleSender {
    tx: UnboundedSender<LifecycleEvent>,
}

impl LifecycleSender {
    /// Queue an event. Returns false once the worker has stopped.
    pub fn send(&self, event: LifecycleEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Drains queued lifecycle events one at a time
pub struct LifecycleWorker {
    view: ViewLifecycle,
    rx: UnboundedReceiver<LifecycleEvent>,
}

impl LifecycleWorker {
    /// Apply events until every sender is dropped, then hand the view back
    pub async fn run(mut self) -> ViewLifecycle {
        while let Some(event) = self.rx.recv().await {
            match event {
                LifecycleEvent::Mount => self.view.mount().await,
                LifecycleEvent::Unmount => self.view.unmount().await,
            }
        }
        debug!("Lifecycle event channel closed");
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHost, RecordingDiagnostics};
    use crate::{BinderConfig, BinderError};
    use std::sync::Arc;

    fn view(host: &FakeHost) -> (ViewLifecycle, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let binder = LifecycleBinder::new(BinderConfig::default(), host.provider())
            .with_diagnostics(diagnostics.clone());
        (ViewLifecycle::new(binder), diagnostics)
    }

    #[tokio::test]
    async fn test_mount_then_unmount() {
        let host = FakeHost::new();
        let (view, diagnostics) = view(&host);

        view.mount().await;
        assert!(view.is_mounted().await);
        assert_eq!(host.shortcuts.registered(), vec!["Alt+Space".to_string()]);

        view.unmount().await;
        assert!(!view.is_mounted().await);
        assert_eq!(host.shortcuts.unregister_calls(), 1);
        assert!(diagnostics.reports().is_empty());
    }

    #[tokio::test]
    async fn test_two_mount_cycles_are_independent() {
        let host = FakeHost::new();
        let (view, _diagnostics) = view(&host);

        view.mount().await;
        view.unmount().await;
        assert_eq!(host.shortcuts.registered().len(), 1);
        assert_eq!(host.shortcuts.unregister_calls(), 1);

        view.mount().await;
        view.unmount().await;
        assert_eq!(host.shortcuts.registered().len(), 2);
        assert_eq!(host.shortcuts.unregister_calls(), 2);
        assert_eq!(host.resolve_calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_mount_leaves_nothing_to_unmount() {
        let host = FakeHost::new();
        host.shortcuts.fail_register("HotKey already registered");
        let (view, diagnostics) = view(&host);

        view.mount().await;
        assert!(!view.is_mounted().await);

        view.unmount().await;
        assert_eq!(host.shortcuts.unregister_calls(), 0);
        assert_eq!(diagnostics.reports().len(), 1);
    }

    #[tokio::test]
    async fn test_unmount_failure_still_completes() {
        let host = FakeHost::new();
        host.shortcuts.fail_unregister("registry gone");
        let (view, diagnostics) = view(&host);

        view.mount().await;
        view.unmount().await;

        assert!(!view.is_mounted().await);
        assert_eq!(
            diagnostics.reports(),
            vec![BinderError::UnregisterAll("registry gone".to_string())]
        );

        // A second unmount has nothing left to release
        view.unmount().await;
        assert_eq!(host.shortcuts.unregister_calls(), 1);
    }

    #[tokio::test]
    async fn test_remount_releases_previous_binding() {
        let host = FakeHost::new();
        let (view, _diagnostics) = view(&host);

        view.mount().await;
        view.mount().await;

        assert_eq!(host.shortcuts.registered().len(), 2);
        assert_eq!(host.shortcuts.unregister_calls(), 1);
        assert!(view.is_mounted().await);
    }

    #[tokio::test]
    async fn test_unmount_without_mount_is_noop() {
        let host = FakeHost::new();
        let (view, diagnostics) = view(&host);

        view.unmount().await;

        assert_eq!(host.shortcuts.unregister_calls(), 0);
        assert_eq!(host.resolve_calls(), 0);
        assert!(diagnostics.reports().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reload_events_apply_in_send_order() {
        let host = FakeHost::new();
        let (view, diagnostics) = view(&host);
        let (sender, worker) = view.into_worker();
        let worker = tokio::spawn(worker.run());

        assert!(sender.send(LifecycleEvent::Mount));
        // Each reload is a Started (unmount) followed by a Finished (mount)
        for _ in 0..500 {
            assert!(sender.send(LifecycleEvent::Unmount));
            assert!(sender.send(LifecycleEvent::Mount));
        }
        drop(sender);

        let view = worker.await.unwrap();
        assert!(view.is_mounted().await);
        assert_eq!(host.shortcuts.registered().len(), 501);
        assert_eq!(host.shortcuts.unregister_calls(), 500);
        assert!(diagnostics.reports().is_empty());
    }

    #[tokio::test]
    async fn test_worker_unmounts_on_destroy() {
        let host = FakeHost::new();
        let (view, _diagnostics) = view(&host);
        let (sender, worker) = view.into_worker();

        sender.send(LifecycleEvent::Mount);
        sender.send(LifecycleEvent::Unmount);
        drop(sender);

        let view = worker.run().await;
        assert!(!view.is_mounted().await);
        assert_eq!(host.shortcuts.unregister_calls(), 1);
    }

    #[tokio::test]
    async fn test_send_after_worker_stops_is_rejected() {
        let host = FakeHost::new();
        let (view, _diagnostics) = view(&host);
        let (sender, worker) = view.into_worker();
        drop(worker);

        assert!(!sender.send(LifecycleEvent::Unmount));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_mounts_keep_one_binding() {
        let host = FakeHost::new();
        let (view, _diagnostics) = view(&host);
        let view = Arc::new(view);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let view = view.clone();
                tokio::spawn(async move { view.mount().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        // Every mount but the last released its predecessor
        assert_eq!(host.shortcuts.registered().len(), 4);
        assert_eq!(host.shortcuts.unregister_calls(), 3);

        view.unmount().await;
        assert_eq!(host.shortcuts.unregister_calls(), 4);
    }
}

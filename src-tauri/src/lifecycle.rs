// Main view mount/unmount driven by webview page loads

use crate::commands::MAIN_WINDOW_LABEL;
use log::debug;
use shortcut_binder::{LifecycleEvent, LifecycleSender, ViewLifecycle};
use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{AppHandle, Manager, Webview};

/// Start the worker that applies lifecycle events in arrival order.
///
/// Host callbacks only queue events, so a reload's unmount can never land
/// after the mount that follows it.
pub fn start(app: &AppHandle, view: ViewLifecycle) {
    let (sender, worker) = view.into_worker();
    app.manage(sender);
    tauri::async_runtime::spawn(async move {
        worker.run().await;
    });
}

/// A page load starting tears the current view down, finishing mounts the new one
pub fn on_page_load(webview: &Webview, payload: &PageLoadPayload<'_>) {
    if webview.label() != MAIN_WINDOW_LABEL {
        return;
    }

    let event = match payload.event() {
        PageLoadEvent::Started => {
            debug!("📄 Main view loading: {}", payload.url());
            LifecycleEvent::Unmount
        }
        PageLoadEvent::Finished => {
            debug!("📄 Main view loaded: {}", payload.url());
            LifecycleEvent::Mount
        }
    };
    dispatch(webview.app_handle(), event);
}

/// Queue an event for the worker. Skipped events are logged, which happens
/// when the app is shutting down and the worker is already gone.
pub fn dispatch(app: &AppHandle, event: LifecycleEvent) {
    match app.try_state::<LifecycleSender>() {
        Some(sender) if sender.send(event) => {}
        Some(_) => debug!("Lifecycle worker stopped, skipping {:?}", event),
        None => debug!("Lifecycle worker not started, skipping {:?}", event),
    }
}

use crate::commands::MAIN_WINDOW_LABEL;
use crate::lifecycle;
use shortcut_binder::LifecycleEvent;
use log::{info, warn};
use tauri::{AppHandle, Manager, Window, WindowEvent};

/// Configure the launcher window: floating and undecorated
pub fn setup_main_window(app: &AppHandle) -> Result<(), String> {
    let window = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "Main window not found".to_string())?;

    window
        .set_always_on_top(true)
        .map_err(|e| format!("Failed to set always on top: {}", e))?;
    window
        .set_decorations(false)
        .map_err(|e| format!("Failed to remove decorations: {}", e))?;

    #[cfg(debug_assertions)]
    {
        window.open_devtools();
    }

    info!("✅ Main window configured");
    Ok(())
}

/// Closing or leaving the launcher hides it; destroying it unmounts the view
pub fn on_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    match event {
        WindowEvent::CloseRequested { api, .. } => {
            api.prevent_close();
            hide(window);
        }
        WindowEvent::Focused(false) => hide(window),
        // Queued like any other event; if the runtime exits first, the OS
        // drops the process's hotkey registrations with it
        WindowEvent::Destroyed => lifecycle::dispatch(window.app_handle(), LifecycleEvent::Unmount),
        _ => {}
    }
}

fn hide(window: &Window) {
    if let Err(e) = window.hide() {
        warn!("⚠️  Failed to hide main window: {}", e);
    }
}

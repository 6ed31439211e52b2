use tauri::{AppHandle, Manager};
use log::debug;

/// Label of the launcher window declared in tauri.conf.json
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Show and focus the launcher window
#[tauri::command]
pub fn show_main_window(app: AppHandle) -> Result<(), String> {
    let window = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "Main window not found".to_string())?;

    window.show().map_err(|e| format!("Failed to show main window: {}", e))?;
    window.set_focus().map_err(|e| format!("Failed to focus main window: {}", e))?;
    debug!("🪟 Main window shown");
    Ok(())
}

/// Hide the launcher window
#[tauri::command]
pub fn hide_main_window(app: AppHandle) -> Result<(), String> {
    let window = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "Main window not found".to_string())?;

    window.hide().map_err(|e| format!("Failed to hide main window: {}", e))
}

/// Run a host command by name, for callers outside the IPC layer
pub fn invoke_by_name(app: &AppHandle, name: &str) -> Result<(), String> {
    match name {
        "show_main_window" => show_main_window(app.clone()),
        "hide_main_window" => hide_main_window(app.clone()),
        other => Err(format!("Unknown host command: {}", other)),
    }
}

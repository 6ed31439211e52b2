mod apps;
mod commands;
mod config;
mod host;
mod lifecycle;
mod window;

pub mod logging;

use log::{info, warn};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::show_main_window,
            commands::hide_main_window,
            apps::list_apps,
            apps::open_app,
        ])
        .on_page_load(lifecycle::on_page_load)
        .on_window_event(window::on_window_event)
        .setup(|app| {
            let app_handle = app.handle().clone();

            if let Err(e) = window::setup_main_window(&app_handle) {
                warn!("⚠️  {}", e);
            }

            // Page loads are delivered after setup returns, so the worker is
            // running before the first mount
            let config = config::load(&app_handle);
            lifecycle::start(&app_handle, host::view_lifecycle(app_handle.clone(), config));

            info!("🚀 ReLaunchpad ready");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running ReLaunchpad");
}

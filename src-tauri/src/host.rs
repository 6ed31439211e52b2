// Tauri-backed host services for the launcher shortcut

use crate::commands;
use async_trait::async_trait;
use log::debug;
use shortcut_binder::{
    BinderConfig, Capabilities, CapabilityProvider, LifecycleBinder, ShortcutService,
    TriggerCallback, ViewLifecycle, WindowService,
};
use std::sync::Arc;
use tauri::{AppHandle, Manager, Wry};
use tauri_plugin_global_shortcut::{GlobalShortcut, GlobalShortcutExt, ShortcutState};

/// Global shortcuts through tauri-plugin-global-shortcut
pub struct PluginShortcuts {
    app: AppHandle,
}

#[async_trait]
impl ShortcutService for PluginShortcuts {
    async fn register(&self, combination: &str, on_trigger: TriggerCallback) -> Result<(), String> {
        self.app
            .global_shortcut()
            .on_shortcut(combination, move |_app, shortcut, event| {
                // The plugin reports both edges; only a press triggers
                if event.state == ShortcutState::Pressed {
                    debug!("Hotkey pressed: {}", shortcut);
                    tauri::async_runtime::spawn(on_trigger());
                }
            })
            .map_err(|e| e.to_string())
    }

    async fn unregister_all(&self) -> Result<(), String> {
        self.app
            .global_shortcut()
            .unregister_all()
            .map_err(|e| e.to_string())
    }
}

/// Host commands run in-process, same handlers the front end invokes
pub struct HostCommands {
    app: AppHandle,
}

#[async_trait]
impl WindowService for HostCommands {
    async fn invoke_command(&self, name: &str) -> Result<(), String> {
        commands::invoke_by_name(&self.app, name)
    }
}

/// Resolves host services once the global-shortcut plugin is installed
pub struct TauriHost {
    app: AppHandle,
}

#[async_trait]
impl CapabilityProvider for TauriHost {
    async fn resolve(&self) -> Result<Capabilities, String> {
        if self.app.try_state::<GlobalShortcut<Wry>>().is_none() {
            return Err("global-shortcut plugin is not installed".to_string());
        }

        Ok(Capabilities {
            shortcuts: Arc::new(PluginShortcuts {
                app: self.app.clone(),
            }),
            window: Arc::new(HostCommands {
                app: self.app.clone(),
            }),
        })
    }
}

/// Mount slot for the main view, wired to this app's host services
pub fn view_lifecycle(app: AppHandle, config: BinderConfig) -> ViewLifecycle {
    let provider = Arc::new(TauriHost { app });
    ViewLifecycle::new(LifecycleBinder::new(config, provider))
}

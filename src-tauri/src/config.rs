use log::{info, warn};
use serde_json::Value;
use shortcut_binder::BinderConfig;
use tauri::{AppHandle, Manager};

/// Section of `plugins` in tauri.conf.json holding the launcher shortcut
pub const CONFIG_KEY: &str = "launcherShortcut";

/// Overrides the configured combination
pub const SHORTCUT_ENV: &str = "RELAUNCHPAD_SHORTCUT";

/// Load the shortcut config from tauri.conf.json and the environment
pub fn load(app: &AppHandle) -> BinderConfig {
    let section = app.config().plugins.0.get(CONFIG_KEY);
    let config = resolve(section, std::env::var(SHORTCUT_ENV).ok());
    info!("⌨️  Launcher shortcut: {} -> {}", config.combination, config.command);
    config
}

fn resolve(section: Option<&Value>, env_override: Option<String>) -> BinderConfig {
    let config = match section {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("⚠️  Invalid {} config, using defaults: {}", CONFIG_KEY, e);
            BinderConfig::default()
        }),
        None => BinderConfig::default(),
    };

    match env_override.as_deref().map(str::trim) {
        Some(combination) if !combination.is_empty() => config.with_combination(combination),
        _ => config,
    }
}

use crate::service::{trigger, CapabilityProvider, ShortcutService, WindowService};
use crate::{BinderConfig, BinderError, Diagnostics, LogDiagnostics};
use log::{debug, info};
use std::sync::Arc;

/// Binds the configured shortcut when a view activates
pub struct LifecycleBinder {
    config: BinderConfig,
    provider: Arc<dyn CapabilityProvider>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl LifecycleBinder {
    pub fn new(config: BinderConfig, provider: Arc<dyn CapabilityProvider>) -> Self {
        Self {
            config,
            provider,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }

    /// Report failures somewhere other than the log
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Register the shortcut.
    ///
    /// Returns the handle that releases it, or `None` if setup failed. A
    /// failed setup is reported and leaves nothing to release.
    pub async fn activate(&self) -> Option<Deactivation> {
        let capabilities = match self.provider.resolve().await {
            Ok(capabilities) => capabilities,
            Err(e) => {
                self.diagnostics.report(&BinderError::Unavailable(e));
                return None;
            }
        };

        let on_trigger = {
            let window = capabilities.window.clone();
            let command = self.config.command.clone();
            let diagnostics = self.diagnostics.clone();
            trigger(move || run_command(window.clone(), command.clone(), diagnostics.clone()))
        };

        let combination = &self.config.combination;
        if let Err(message) = capabilities.shortcuts.register(combination, on_trigger).await {
            self.diagnostics.report(&BinderError::Register {
                combination: combination.clone(),
                message,
            });
            return None;
        }

        info!("✅ Global shortcut registered: {}", combination);
        Some(Deactivation {
            shortcuts: capabilities.shortcuts,
            diagnostics: self.diagnostics.clone(),
        })
    }
}

async fn run_command(window: Arc<dyn WindowService>, command: String, diagnostics: Arc<dyn Diagnostics>) {
    debug!("Shortcut triggered, invoking {}", command);
    if let Err(message) = window.invoke_command(&command).await {
        diagnostics.report(&BinderError::Command {
            name: command,
            message,
        });
    }
}

/// Releases the shortcuts registered by one activation
#[must_use = "dropping a Deactivation leaves the shortcut registered"]
pub struct Deactivation {
    shortcuts: Arc<dyn ShortcutService>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Deactivation {
    pub async fn run(self) {
        match self.shortcuts.unregister_all().await {
            Ok(()) => info!("Global shortcuts unregistered"),
            Err(e) => self.diagnostics.report(&BinderError::UnregisterAll(e)),
        }
    }
}

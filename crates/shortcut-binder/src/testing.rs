// In-memory host services for unit tests

use crate::service::{Capabilities, CapabilityProvider, ShortcutService, TriggerCallback, WindowService};
use crate::{BinderError, Diagnostics};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeShortcuts {
    bindings: Mutex<Vec<(String, TriggerCallback)>>,
    unregister_calls: AtomicUsize,
    register_error: Mutex<Option<String>>,
    unregister_error: Mutex<Option<String>>,
}

impl FakeShortcuts {
    pub fn fail_register(&self, message: &str) {
        *self.register_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_unregister(&self, message: &str) {
        *self.unregister_error.lock().unwrap() = Some(message.to_string());
    }

    /// Every combination passed to `register`, in call order
    pub fn registered(&self) -> Vec<String> {
        self.bindings.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    /// Press every live binding once
    pub async fn fire(&self) {
        let callbacks: Vec<TriggerCallback> =
            self.bindings.lock().unwrap().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback().await;
        }
    }
}

#[async_trait]
impl ShortcutService for FakeShortcuts {
    async fn register(&self, combination: &str, on_trigger: TriggerCallback) -> Result<(), String> {
        if let Some(message) = self.register_error.lock().unwrap().clone() {
            return Err(message);
        }
        self.bindings.lock().unwrap().push((combination.to_string(), on_trigger));
        Ok(())
    }

    async fn unregister_all(&self) -> Result<(), String> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.unregister_error.lock().unwrap().clone() {
            return Err(message);
        }
        // Registrations stay in `bindings` so tests can count them
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWindow {
    commands: Mutex<Vec<String>>,
    error: Mutex<Option<String>>,
}

impl FakeWindow {
    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl WindowService for FakeWindow {
    async fn invoke_command(&self, name: &str) -> Result<(), String> {
        self.commands.lock().unwrap().push(name.to_string());
        match self.error.lock().unwrap().clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

struct FakeProvider {
    shortcuts: Arc<FakeShortcuts>,
    window: Arc<FakeWindow>,
    resolve_calls: AtomicUsize,
    error: Mutex<Option<String>>,
}

#[async_trait]
impl CapabilityProvider for FakeProvider {
    async fn resolve(&self) -> Result<Capabilities, String> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(message);
        }
        Ok(Capabilities {
            shortcuts: self.shortcuts.clone(),
            window: self.window.clone(),
        })
    }
}

pub struct FakeHost {
    pub shortcuts: Arc<FakeShortcuts>,
    pub window: Arc<FakeWindow>,
    provider: Arc<FakeProvider>,
}

impl FakeHost {
    pub fn new() -> Self {
        let shortcuts = Arc::new(FakeShortcuts::default());
        let window = Arc::new(FakeWindow::default());
        let provider = Arc::new(FakeProvider {
            shortcuts: shortcuts.clone(),
            window: window.clone(),
            resolve_calls: AtomicUsize::new(0),
            error: Mutex::new(None),
        });
        Self { shortcuts, window, provider }
    }

    pub fn provider(&self) -> Arc<dyn CapabilityProvider> {
        self.provider.clone()
    }

    pub fn fail_resolve(&self, message: &str) {
        *self.provider.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn resolve_calls(&self) -> usize {
        self.provider.resolve_calls.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<BinderError>>,
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<BinderError> {
        self.reports.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, failure: &BinderError) {
        self.reports.lock().unwrap().push(failure.clone());
    }
}

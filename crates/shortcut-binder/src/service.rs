//! Host capabilities the binder depends on.
//!
//! Errors cross these traits as plain strings, the same way host commands
//! report failures to the front end.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a shortcut trigger
pub type TriggerFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Zero-argument async action run when a registered shortcut fires
pub type TriggerCallback = Arc<dyn Fn() -> TriggerFuture + Send + Sync + 'static>;

/// Wrap an async closure as a [`TriggerCallback`]
pub fn trigger<F, Fut>(action: F) -> TriggerCallback
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move || Box::pin(action()) as TriggerFuture)
}

/// Global shortcut registry owned by the host
#[async_trait]
pub trait ShortcutService: Send + Sync {
    async fn register(&self, combination: &str, on_trigger: TriggerCallback) -> Result<(), String>;

    /// Release every global shortcut the host holds, not just ours
    async fn unregister_all(&self) -> Result<(), String>;
}

/// Named commands exposed by the native shell
#[async_trait]
pub trait WindowService: Send + Sync {
    async fn invoke_command(&self, name: &str) -> Result<(), String>;
}

/// Services resolved for one activation
#[derive(Clone)]
pub struct Capabilities {
    pub shortcuts: Arc<dyn ShortcutService>,
    pub window: Arc<dyn WindowService>,
}

/// Resolves host services when a view activates.
///
/// Resolution is deferred until activation so a binder can be built before
/// the host has finished installing its plugins.
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    async fn resolve(&self) -> Result<Capabilities, String>;
}

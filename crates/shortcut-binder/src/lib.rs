// Global shortcut lifecycle binding for a mounted view
//!
//! # shortcut-binder
//!
//! Keeps one global shortcut registered while a view is mounted:
//! - on mount, the configured combination is bound to a host command
//! - on unmount, every global shortcut the host holds is released
//!
//! Failures never propagate. They are reported to a [`Diagnostics`] sink
//! and the view keeps working without the shortcut.
//!
//! The host is reached only through the traits in [`service`], resolved
//! lazily by a [`CapabilityProvider`] each time a view activates.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use shortcut_binder::{BinderConfig, CapabilityProvider, LifecycleBinder, ViewLifecycle};
//!
//! # async fn mount(provider: Arc<dyn CapabilityProvider>) {
//! let binder = LifecycleBinder::new(BinderConfig::default(), provider);
//! let view = ViewLifecycle::new(binder);
//!
//! view.mount().await;
//! // ... Alt+Space now brings the main window forward ...
//! view.unmount().await;
//! # }
//! ```

mod binder;
mod config;
mod diagnostics;
mod error;
mod lifecycle;
pub mod service;

pub use binder::{Deactivation, LifecycleBinder};
pub use config::{BinderConfig, DEFAULT_COMBINATION, SHOW_MAIN_WINDOW};
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::BinderError;
pub use lifecycle::{LifecycleEvent, LifecycleSender, LifecycleWorker, ViewLifecycle};
pub use service::{
    trigger, Capabilities, CapabilityProvider, ShortcutService, TriggerCallback, TriggerFuture,
    WindowService,
};

#[cfg(test)]
pub(crate) mod testing;

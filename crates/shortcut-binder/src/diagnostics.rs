use crate::BinderError;
use log::error;

/// Sink for failures that have no caller to report to
pub trait Diagnostics: Send + Sync {
    fn report(&self, failure: &BinderError);
}

/// Writes failures through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, failure: &BinderError) {
        error!("❌ {}", failure);
    }
}

use serde::Deserialize;

/// Combination bound when nothing else is configured
pub const DEFAULT_COMBINATION: &str = "Alt+Space";

/// Host command that brings the launcher forward
pub const SHOW_MAIN_WINDOW: &str = "show_main_window";

/// Which shortcut to bind and which host command it runs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinderConfig {
    /// Accelerator string understood by the host (default: Alt+Space)
    pub combination: String,

    /// Host command invoked on trigger (default: show_main_window)
    pub command: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            combination: DEFAULT_COMBINATION.to_string(),
            command: SHOW_MAIN_WINDOW.to_string(),
        }
    }
}

impl BinderConfig {
    /// Replace the combination, keeping the command
    pub fn with_combination(mut self, combination: impl Into<String>) -> Self {
        self.combination = combination.into();
        self
    }
}

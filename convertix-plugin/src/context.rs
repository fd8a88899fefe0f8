//! Evaluation Context

use convertix_core::{DEFAULT_DECIMALS, MAX_DECIMALS, format_result};

/// Evaluation context passed to plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Decimal places used when a function renders a number as text
    pub decimals: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }

    /// Render a number with this context's display precision
    pub fn format(&self, value: f64) -> String {
        format_result(value, self.decimals)
    }
}

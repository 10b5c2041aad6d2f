//! Simulator configuration.
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Largest run accepted from configuration (2^24 appends).
pub const MAX_APPENDS: usize = 1 << 24;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Number of sequential appends per run.
    #[serde(default = "default_appends")]
    #[validate(range(max = MAX_APPENDS))]
    pub appends: usize,

    /// Mirror every resize as a trace line.
    #[serde(default = "default_true")]
    pub trace: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            appends: default_appends(),
            trace: default_true(),
        }
    }
}

fn default_appends() -> usize {
    6
}

fn default_true() -> bool {
    true
}

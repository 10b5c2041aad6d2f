//! Summary of a finished simulation run.

use blake3::Hasher;

use growlab_core::SimulationError;

use crate::event::ResizeEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub appends: usize,
    pub final_size: usize,
    pub final_capacity: usize,
    /// Resize events in the order they occurred.
    pub events: Vec<ResizeEvent>,
    /// Elements copied across every resize.
    pub total_copies: usize,
}

impl SimulationReport {
    /// Average work per append, counting one write per append plus every
    /// element copied during resizes. Stays below 3 for any `appends`.
    pub fn amortized_cost(&self) -> f64 {
        if self.appends == 0 {
            return 0.0;
        }
        (self.appends + self.total_copies) as f64 / self.appends as f64
    }

    /// Deterministic BLAKE3 digest of the resize trace and final shape,
    /// hex encoded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Hasher::new();
        hasher.update(&(self.appends as u64).to_le_bytes());
        for event in &self.events {
            event.hash_into(&mut hasher);
        }
        hasher.update(&(self.final_size as u64).to_le_bytes());
        hasher.update(&(self.final_capacity as u64).to_le_bytes());
        hex::encode(hasher.finalize().as_bytes())
    }

    /// Checks the fingerprint against an expected hex digest.
    pub fn verify_fingerprint(&self, expected: &str) -> Result<(), SimulationError> {
        let actual = self.fingerprint();
        if actual.eq_ignore_ascii_case(expected.trim()) {
            Ok(())
        } else {
            Err(SimulationError::FingerprintMismatch {
                expected: expected.to_string(),
                actual,
            })
        }
    }
}

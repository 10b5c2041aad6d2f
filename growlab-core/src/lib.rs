//! # growlab-core
//!
//! Shared building blocks for the growlab exercises.
//!
//! ### Key Submodules:
//! - `sequences`: single-pass transformations over integer sequences
//!   (most frequent, dedup, pair sums, running totals)
//! - `complexity`: time/space profiles for every exercise
//! - `error`: the error type shared with the simulator

pub mod complexity;
pub mod error;
pub mod sequences;

pub mod prelude {
    pub use crate::complexity::*;
    pub use crate::error::*;
    pub use crate::sequences::*;
}

pub use error::SimulationError;

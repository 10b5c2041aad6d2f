// growlab-simulator/src/lib.rs

/*!
# Growlab Simulator

Models amortized dynamic-array growth: `n` sequential values are appended to a
store that starts with a single slot and doubles whenever it is full. Every
doubling is reported as a [`ResizeEvent`] in the order it happened.

## Key Components:
- **Growable Array:** Owned backing store replaced on every resize.
- **Resize Events:** Returned event log, the functional result of a run.
- **Observers:** Optional side channels (trace lines, metrics).
- **Report:** Copy accounting, amortized cost and a deterministic fingerprint.

A single append costs O(1) unless it resizes, in which case it copies every
existing value. Resizes happen O(log n) times and their costs form a geometric
series, so `n` appends cost O(n) in total.
*/

use tracing::{debug, instrument};

use growlab_core::SimulationError;

pub mod array;
pub mod event;
pub mod observer;
pub mod report;

pub use array::GrowableArray;
pub use event::ResizeEvent;
pub use observer::{ResizeObserver, TracingObserver};
pub use report::SimulationReport;

/// Drives one growable array through a run of sequential appends.
///
/// The simulator owns no array state between runs; each call to
/// [`Simulator::run`] starts from a fresh store of capacity 1.
#[derive(Default)]
pub struct Simulator {
    observers: Vec<Box<dyn ResizeObserver>>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer that sees every resize as it happens.
    pub fn with_observer(mut self, observer: Box<dyn ResizeObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validates a signed append count and runs the simulation.
    ///
    /// Fails fast with [`SimulationError::InvalidArgument`] for negative `n`.
    pub fn simulate(&mut self, n: i64) -> Result<SimulationReport, SimulationError> {
        let appends = usize::try_from(n).map_err(|_| {
            SimulationError::InvalidArgument(format!(
                "append count must be a non-negative integer, got {n}"
            ))
        })?;
        Ok(self.run(appends))
    }

    /// Appends `0..appends` and returns the report; the store is discarded.
    pub fn run(&mut self, appends: usize) -> SimulationReport {
        self.run_with_store(appends).0
    }

    /// Like [`Simulator::run`] but also hands back the final store.
    #[instrument(level = "debug", skip(self))]
    pub fn run_with_store(&mut self, appends: usize) -> (SimulationReport, GrowableArray) {
        let mut array = GrowableArray::new();
        let mut events = Vec::new();

        for value in 0..appends {
            if let Some(event) = array.push(value as u64) {
                for observer in &mut self.observers {
                    observer.on_resize(&event);
                }
                events.push(event);
            }
        }

        let report = SimulationReport {
            appends,
            final_size: array.len(),
            final_capacity: array.capacity(),
            total_copies: events.iter().map(|e| e.copied).sum(),
            events,
        };
        debug!(
            size = report.final_size,
            capacity = report.final_capacity,
            "run finished"
        );

        for observer in &mut self.observers {
            observer.on_complete(&report);
        }

        (report, array)
    }
}

/// Runs a fresh simulation of `n` appends and returns its resize events.
pub fn simulate(n: i64) -> Result<Vec<ResizeEvent>, SimulationError> {
    Simulator::new().simulate(n).map(|report| report.events)
}

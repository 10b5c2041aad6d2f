//! Observers notified as a simulation runs.
//!
//! The returned event log is the functional result of a run; observers are
//! side channels (trace lines, metrics) and never influence it.

use tracing::info;

use crate::event::ResizeEvent;
use crate::report::SimulationReport;

pub trait ResizeObserver {
    /// Called once per resize, before the triggering value is written.
    fn on_resize(&mut self, event: &ResizeEvent);

    /// Called once after the last append.
    fn on_complete(&mut self, _report: &SimulationReport) {}
}

impl<F> ResizeObserver for F
where
    F: FnMut(&ResizeEvent),
{
    fn on_resize(&mut self, event: &ResizeEvent) {
        self(event)
    }
}

/// Mirrors every resize as a `Resizing from {old} to {new}` trace line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResizeObserver for TracingObserver {
    fn on_resize(&mut self, event: &ResizeEvent) {
        info!(
            append_index = event.append_index,
            copied = event.copied,
            "Resizing from {} to {}",
            event.old_capacity,
            event.new_capacity
        );
    }

    fn on_complete(&mut self, report: &SimulationReport) {
        info!(
            appends = report.appends,
            capacity = report.final_capacity,
            resizes = report.events.len(),
            "Simulation complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_tracing_observer_emits_trace_line() {
        let mut observer = TracingObserver;
        observer.on_resize(&ResizeEvent::doubling(3, 2));
        assert!(logs_contain("Resizing from 2 to 4"));
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &ResizeEvent| seen.push(event.new_capacity);
            observer.on_resize(&ResizeEvent::doubling(2, 1));
            observer.on_resize(&ResizeEvent::doubling(3, 2));
        }
        assert_eq!(seen, vec![2, 4]);
    }
}

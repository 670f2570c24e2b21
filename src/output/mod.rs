//! Output collaborators for the simulation.
//!
//! The driving loop hands every completed step's body states to a
//! [`StepSink`]; the sink is the sole consumer of per-step state and the
//! core never queries it back.

pub mod csv;
pub mod progress;

use crate::error::Result;
use crate::simulation::states::Body;

/// Receiver for per-step simulation output.
pub trait StepSink {
    /// Called once before the first step with the initial body set.
    fn begin(&mut self, bodies: &[Body]) -> Result<()>;

    /// Called once per completed step with the bodies in collection order.
    fn record_step(&mut self, bodies: &[Body]) -> Result<()>;

    /// Called once after the final step.
    fn finish(&mut self) -> Result<()>;
}

/// Sink that discards everything. Used by tests and benchmarks.
pub struct NullSink;

impl StepSink for NullSink {
    fn begin(&mut self, _bodies: &[Body]) -> Result<()> {
        Ok(())
    }

    fn record_step(&mut self, _bodies: &[Body]) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

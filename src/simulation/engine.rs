//! High-level runtime engine settings and the driving loop.
//!
//! [`Engine`] selects the integration scheme; [`run`] repeats the per-step
//! contract until the configured duration is covered, handing every
//! completed step's positions to the output sink.

use tracing::info;

use crate::configuration::config::IntegratorConfig;
use crate::error::{Error, Result};
use crate::output::progress::ProgressMeter;
use crate::output::StepSink;
use crate::simulation::integrator::{euler_cromer_step, euler_step};
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or euler-cromer
}

/// Run the scenario to completion.
///
/// Fixed-step loop: the condition is a strict less-than on the elapsed
/// simulated time, so `ceil(t_end / h0)` steps are taken in total. After
/// each completed step the sink receives every body's position in
/// collection order; the sink is never queried back.
pub fn run(scenario: &mut Scenario, sink: &mut dyn StepSink) -> Result<()> {
    if scenario.system.bodies.is_empty() {
        return Err(Error::InvalidScenario("no bodies to simulate".into()));
    }

    let params = scenario.parameters.clone();
    let mut progress = ProgressMeter::new(params.t_end);

    sink.begin(&scenario.system.bodies)?;
    info!(
        bodies = scenario.system.bodies.len(),
        h0 = params.h0,
        t_end = params.t_end,
        "beginning simulation"
    );

    while scenario.system.t < params.t_end {
        progress.update(scenario.system.t);
        match scenario.engine.integrator {
            IntegratorConfig::Euler => {
                euler_step(&mut scenario.system, &scenario.forces, &params);
            }
            IntegratorConfig::EulerCromer => {
                euler_cromer_step(&mut scenario.system, &scenario.forces, &params);
            }
        }
        sink.record_step(&scenario.system.bodies)?;
    }

    sink.finish()?;
    progress.finish();
    Ok(())
}

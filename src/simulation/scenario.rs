//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces the runtime
//! bundle consumed by the driving loop:
//! - engine settings ([`Engine`])
//! - numerical parameters ([`Parameters`])
//! - system state ([`System`] with bodies at t = 0)
//! - the active force model ([`NewtonianGravity`])
//!
//! A scenario with no bodies of its own is seeded with the default solar
//! system dataset.

use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::math::vector::Vec3;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// A fully-initialized simulation scenario, ready to run.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    /// Map a deserialized [`ScenarioConfig`] into the runtime bundle.
    ///
    /// The step size and duration must both be positive; an empty body
    /// list falls back to [`default_solar_system`].
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        if !(p_cfg.h0 > 0.0) {
            return Err(Error::InvalidScenario(format!(
                "time step must be a positive number of seconds, got {}",
                p_cfg.h0
            )));
        }
        if !(p_cfg.t_end > 0.0) {
            return Err(Error::InvalidScenario(format!(
                "simulated duration must be a positive number of seconds, got {}",
                p_cfg.t_end
            )));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`. Component lists of
        // the wrong length are repaired by the vector pad/truncate policy.
        let mut bodies: Vec<Body> = cfg.bodies.iter().map(body_from_config).collect();
        if bodies.is_empty() {
            info!("scenario contains no bodies, seeding default solar system");
            bodies = default_solar_system();
        }

        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces: NewtonianGravity,
        })
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    let position = Vec3::from_components(&bc.position);
    let velocity = Vec3::from_components(&bc.velocity);
    let acceleration = bc
        .acceleration
        .as_deref()
        .map(Vec3::from_components)
        .unwrap_or_default();
    Body::with_acceleration(bc.name.clone(), bc.mass, position, velocity, acceleration)
}

/// The default solar system: the Sun, the eight planets, the Moon, and
/// Pluto. Planetary data courtesy of NASA JPL, in base SI units.
pub fn default_solar_system() -> Vec<Body> {
    vec![
        Body::new(
            "The Sun",
            1.989e30,
            Vec3::new([0.0, 0.0, 0.0]),
            Vec3::new([1.998619875971241, 1.177175852520643e1, -6.135600299763972e-2]),
        ),
        Body::new(
            "Mercury",
            3.3011e23,
            Vec3::new([1.275387239870491e10, -6.680195324480709e10, -6.616376210554786e9]),
            Vec3::new([3.815800795678611e4, 1.123692837720359e4, -2.583452372780768e3]),
        ),
        Body::new(
            "Venus",
            4.867e24,
            Vec3::new([-8.073224723501202e10, 7.027586666429530e10, 5.627818208653621e9]),
            Vec3::new([-2.299827401900994e4, -2.669115882767952e4, 9.610940692989782e2]),
        ),
        Body::new(
            "Earth",
            5.972e24,
            Vec3::new([4.788721549926552e10, 1.398390053760727e11, -2.917617879798263e7]),
            Vec3::new([-2.869322295421606e4, 9.472398427890313e3, -1.294094780725619]),
        ),
        Body::new(
            "The Moon",
            734.9e20,
            Vec3::new([4.749196053391321e10, 1.399182076993898e11, -3.486943982706219e7]),
            Vec3::new([-2.890724003060377e4, 8.531016069261970e3, 8.300527233703736e1]),
        ),
        Body::new(
            "Mars",
            6.4171e23,
            Vec3::new([-2.360304784158461e11, 7.782743203688863e10, 7.409494561464485e9]),
            Vec3::new([-6.646816636079097e3, -2.094094408471671e4, -2.759397656641038e2]),
        ),
        Body::new(
            "Jupiter",
            1.89813e27,
            Vec3::new([-7.635337060440624e11, 2.666352191711917e11, 1.596697237644111e10]),
            Vec3::new([-4.459151830811911e3, -1.171879602036105e4, 1.485480013373461e2]),
        ),
        Body::new(
            "Saturn",
            5.68319e26,
            Vec3::new([-5.754602000703751e11, -1.380800977297312e12, 4.691113811667019e10]),
            Vec3::new([8.388118620089763e3, -3.745812490969359e3, -2.682504240279582e2]),
        ),
        Body::new(
            "Uranus",
            86.8103e24,
            Vec3::new([2.828705362370189e12, 9.657796340541244e11, -3.305961929341555e10]),
            Vec3::new([-2.249907923122420e3, 6.127203368970902e3, 5.166083013695255e1]),
        ),
        Body::new(
            "Neptune",
            102.41e24,
            Vec3::new([4.177286553745139e12, -1.624410031732890e12, -6.281810904534376e10]),
            Vec3::new([1.934495516018552e3, 5.098519902111810e3, -1.496666233625485e2]),
        ),
        Body::new(
            "Pluto",
            1.308e22,
            Vec3::new([1.263871593868758e12, -4.769395770475431e12, 1.447666788459496e11]),
            Vec3::new([5.347856858111191e3, 2.674281760600502e2, -1.564505494419083e3]),
        ),
    ]
}

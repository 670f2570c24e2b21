pub mod configuration;
pub mod error;
pub mod math;
pub mod output;
pub mod simulation;

pub use math::vector::{PhysicsVector, Vec3};
pub use simulation::states::{Body, System};
pub use simulation::forces::{Acceleration, NewtonianGravity, G};
pub use simulation::integrator::{
    accumulate_accelerations, centre_of_mass, euler_cromer_step, euler_step,
    recentre_on_barycentre,
};
pub use simulation::params::Parameters;
pub use simulation::engine::{run, Engine};
pub use simulation::scenario::{default_solar_system, Scenario};

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use output::csv::CsvSink;
pub use output::{NullSink, StepSink};

pub use error::{Error, Result};

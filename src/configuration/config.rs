//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integration scheme selection
//! - [`ParametersConfig`] – step size and total simulated duration
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario file
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler-cromer"   # or "euler"
//!
//! parameters:
//!   t_end: 3.154e7               # total simulated duration, seconds
//!   h0: 3600.0                   # fixed step size, seconds
//!
//! bodies:
//!   - name: "Alpha"
//!     mass: 1.0e30
//!     position: [ 0.0, 0.0, 0.0 ]       # m
//!     velocity: [ 0.0, 0.0, 0.0 ]       # m/s
//!   - name: "Beta"
//!     mass: 1.0e24
//!     position: [ 1.5e11, 0.0, 0.0 ]
//!     velocity: [ 0.0, 2.98e4, 0.0 ]
//! ```
//!
//! `bodies` may be omitted entirely, in which case the engine seeds its
//! default solar-system dataset. A body's `acceleration` may be given but
//! defaults to zero.

use serde::Deserialize;

/// Which integration scheme the engine advances bodies with.
/// `integrator: "euler"` or `integrator: "euler-cromer"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Explicit Euler: position then velocity, both from state at time n
    Euler,

    #[serde(rename = "euler-cromer")] // Semi-implicit Euler: velocity first, position from the updated velocity
    EulerCromer,
}

/// High-level engine configuration.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
}

/// Global numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated duration, seconds
    pub h0: f64,    // fixed step size, seconds
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,          // mass of the body, kg
    pub position: Vec<f64>, // initial position, m
    pub velocity: Vec<f64>, // initial velocity, m/s
    #[serde(default)]
    pub acceleration: Option<Vec<f64>>, // initial acceleration, m/s^2; zero when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // integration scheme selection
    pub parameters: ParametersConfig, // step size and duration
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // initial state of the system; empty -> default dataset
}

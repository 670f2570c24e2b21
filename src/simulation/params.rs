//! Numerical parameters for the simulation.
//!
//! `Parameters` holds the runtime settings of a run: the fixed integration
//! step size and the total simulated duration, both in seconds.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated duration
    pub h0: f64,    // fixed step size
}

//! Core state types for the N-body simulation.
//!
//! Defines [`Body`], a named point mass with position, velocity, and
//! acceleration, and [`System`], the ordered collection of bodies plus the
//! current simulation time `t`.
//!
//! All quantities are in base SI units (kg, m, m/s); `f64` holds the solar
//! system comfortably and base units avoid scale-factor mistakes.

use std::fmt;

use crate::math::vector::Vec3;
use crate::simulation::forces::G;

/// A simulated point mass.
///
/// A body holds no reference to any other body; every cross-body
/// interaction goes through the collection handed to the force
/// accumulation pass. The `acceleration` field is whatever the last
/// accumulation pass computed and is stale until the next one.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub mass: f64,          // kg
    pub position: Vec3,     // m
    pub velocity: Vec3,     // m/s
    pub acceleration: Vec3, // m/s^2
}

impl Body {
    /// A body with zero initial acceleration.
    pub fn new(name: impl Into<String>, mass: f64, position: Vec3, velocity: Vec3) -> Self {
        Self::with_acceleration(name, mass, position, velocity, Vec3::zeros())
    }

    pub fn with_acceleration(
        name: impl Into<String>,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
        acceleration: Vec3,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            acceleration,
        }
    }

    /// Instantaneous gravitational acceleration this body experiences due
    /// to `other`: magnitude `G * m_other / r^2`, directed from this body
    /// toward `other`, with `r` the separation distance.
    ///
    /// Coincident bodies (`r = 0`) are not guarded: the inverse-square
    /// factor is infinite and the result goes non-finite.
    pub fn acceleration_from(&self, other: &Body) -> Vec3 {
        let offset = self.position - other.position;
        let r = offset.magnitude();
        offset.unit_vector().scaled_by(-(G * other.mass) / (r * r))
    }

    /// First-order position update: `position += velocity * dt`.
    pub fn advance_position(&mut self, dt: f64) {
        self.position += self.velocity.scaled_by(dt);
    }

    /// First-order velocity update: `velocity += acceleration * dt`.
    pub fn advance_velocity(&mut self, dt: f64) {
        self.velocity += self.acceleration.scaled_by(dt);
    }

    /// Explicit Euler update order: position first, so it is advanced with
    /// the pre-step velocity, then velocity from the fresh acceleration.
    pub fn step_euler(&mut self, dt: f64) {
        self.advance_position(dt);
        self.advance_velocity(dt);
    }

    /// Euler-Cromer (semi-implicit Euler) update order: velocity first,
    /// then position from the already-advanced velocity. The swap is the
    /// entire difference from [`step_euler`](Self::step_euler) and is what
    /// keeps the long-run energy drift bounded on orbital problems.
    pub fn step_euler_cromer(&mut self, dt: f64) {
        self.advance_velocity(dt);
        self.advance_position(dt);
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kg) at {}", self.name, self.mass, self.position)
    }
}

/// The full simulation state: the body collection and the current time.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, in input order
    pub t: f64,            // elapsed simulated time, s
}

impl System {
    /// A system at `t = 0`.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }
}

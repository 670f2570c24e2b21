//! Fixed-step time integrators for the N-body system.
//!
//! One step is: recenter every position on the system's barycentre,
//! accumulate every body's net acceleration from that consistent snapshot,
//! then advance every body under the chosen update order (Euler or
//! Euler-Cromer) and bump `sys.t` by the fixed step.
//!
//! The accumulation pass completes before any body is advanced, so within
//! a step no body ever sees another body's half-updated position and the
//! result does not depend on collection order.

use crate::math::vector::Vec3;
use crate::simulation::forces::Acceleration;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Mass-weighted average position, `sum(m_i * x_i) / sum(m_i)`.
/// An empty collection has no barycentre; returns the zero vector.
pub fn centre_of_mass(bodies: &[Body]) -> Vec3 {
    if bodies.is_empty() {
        return Vec3::zeros();
    }
    let mut weighted = Vec3::zeros();
    let mut total_mass = 0.0;
    for body in bodies {
        weighted += body.position.scaled_by(body.mass);
        total_mass += body.mass;
    }
    weighted / total_mass
}

/// Translate every body so the centre of mass sits at the origin. The
/// planets do not orbit the centre of the sun, they orbit the system's
/// joint barycentre; pinning it to the origin each step stops the whole
/// frame drifting across the output.
pub fn recentre_on_barycentre(bodies: &mut [Body]) {
    let com = centre_of_mass(bodies);
    for body in bodies.iter_mut() {
        body.position -= com;
    }
}

/// Run one full force-accumulation pass and store each body's net
/// acceleration on the body itself. The pass reads positions through an
/// immutable snapshot of the collection and only writes afterwards.
pub fn accumulate_accelerations(sys: &mut System, forces: &dyn Acceleration) {
    let mut accels = vec![Vec3::zeros(); sys.bodies.len()];
    forces.acceleration(sys.t, &*sys, &mut accels);
    for (body, a) in sys.bodies.iter_mut().zip(accels) {
        body.acceleration = a;
    }
}

/// Advance the system by one explicit Euler step: position and velocity
/// updates both drawn from the state at time n.
pub fn euler_step(sys: &mut System, forces: &dyn Acceleration, params: &Parameters) {
    recentre_on_barycentre(&mut sys.bodies);
    accumulate_accelerations(sys, forces);
    for body in sys.bodies.iter_mut() {
        body.step_euler(params.h0);
    }
    sys.t += params.h0;
}

/// Advance the system by one Euler-Cromer step. Identical to
/// [`euler_step`] except each body's position update uses the already
/// advanced (n+1) velocity.
pub fn euler_cromer_step(sys: &mut System, forces: &dyn Acceleration, params: &Parameters) {
    recentre_on_barycentre(&mut sys.bodies);
    accumulate_accelerations(sys, forces);
    for body in sys.bodies.iter_mut() {
        body.step_euler_cromer(params.h0);
    }
    sys.t += params.h0;
}

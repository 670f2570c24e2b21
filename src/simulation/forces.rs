//! Force / acceleration contributors for the n-body engine.
//!
//! Defines the [`Acceleration`] trait and the direct Newtonian gravity
//! implementation that sums the pairwise inverse-square law over the full
//! body collection.

use crate::math::vector::Vec3;
use crate::simulation::states::System;

/// The gravitational constant, SI units. G is notoriously hard to measure
/// precisely, so five decimal places is all we get here.
pub const G: f64 = 6.67408e-11;

/// Trait for acceleration sources operating on a [`System`].
/// Implementations write each body's net contribution into `out[i]`.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [Vec3]);
}

/// Direct Newtonian gravity, unsoftened, evaluated as a full O(n^2) sweep:
/// every body sums [`Body::acceleration_from`] over every other body.
///
/// [`Body::acceleration_from`]: crate::simulation::states::Body::acceleration_from
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [Vec3]) {
        for (i, body) in sys.bodies.iter().enumerate() {
            let mut sum = Vec3::zeros();
            for other in &sys.bodies {
                // Skip self by identity, not by value, so bodies that
                // happen to compare equal still attract each other.
                if std::ptr::eq(body, other) {
                    continue;
                }
                sum += body.acceleration_from(other);
            }
            out[i] = sum;
        }
    }
}

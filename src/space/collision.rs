//! Ball-ball collision detection and response
//!
//! Detection is discrete, once per tick: fast balls can tunnel through each
//! other. Response is a perfectly elastic bounce along the center axis
//! followed by a mass-weighted positional push so no overlap survives.

use std::cmp::Ordering;

use glam::DVec2;

use super::ball::Ball;
use crate::config::DegeneratePolicy;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// True unless the two circles are strictly disjoint
///
/// Tangency, containment, coincident centers and even NaN distances all
/// count as colliding.
pub fn colliding(a: &Ball, b: &Ball) -> bool {
    let distance = a.position.distance(b.position);
    let reach = a.radius + b.radius;
    !matches!(distance.partial_cmp(&reach), Some(Ordering::Greater))
}

/// 1-D elastic collision along the collision axis
///
/// Returns the post-collision velocities of both bodies.
#[inline]
pub fn elastic_exchange(v1: f64, v2: f64, m1: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let out1 = ((m1 - m2) * v1 + (m2 + m2) * v2) / total;
    let out2 = ((m1 + m1) * v1 + (m2 - m1) * v2) / total;
    (out1, out2)
}

/// Rotate a velocity into the frame whose x axis is `angle`
fn into_frame(speed: DVec2, angle: f64) -> DVec2 {
    let (magnitude, direction) = cartesian_to_polar(speed);
    polar_to_cartesian(magnitude, direction - angle)
}

/// Rotate a collision-frame velocity back to world space
fn out_of_frame(speed: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(speed)
}

/// Bounce two colliding balls and push them apart
///
/// `a` is the later ball in the collection, `b` the one currently being
/// updated. Both speeds and both positions change. After the push the
/// centers are exactly `a.radius + b.radius` apart, the lighter ball having
/// moved proportionally further.
pub fn resolve_collision(a: &mut Ball, b: &mut Ball, policy: DegeneratePolicy) {
    let axis = b.position - a.position;
    let angle = axis.y.atan2(axis.x);

    let frame_a = into_frame(a.speed, angle);
    let frame_b = into_frame(b.speed, angle);

    // Only the component along the axis is exchanged
    let (along_a, along_b) = elastic_exchange(frame_a.x, frame_b.x, a.mass, b.mass);

    a.speed = out_of_frame(DVec2::new(along_a, frame_a.y), angle);
    b.speed = out_of_frame(DVec2::new(along_b, frame_b.y), angle);

    separate(a, b, policy);
}

/// Minimum translation distance push, weighted by inverse mass
fn separate(a: &mut Ball, b: &mut Ball, policy: DegeneratePolicy) {
    let delta = a.position - b.position;
    let d = delta.length();
    let reach = a.radius + b.radius;

    let mtd = if d == 0.0 && policy.is_guarded() {
        // No axis to push along; pick one
        DVec2::X * reach
    } else {
        delta * ((reach - d) / d)
    };

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_total = inv_a + inv_b;

    a.position += mtd * (inv_a / inv_total);
    b.position -= mtd * (inv_b / inv_total);
}

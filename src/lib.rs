//! Floating Space - a self-organizing layout of floating balls
//!
//! Core modules:
//! - `space`: Tick-driven physics (drift to target, repulsion, elastic collisions)
//! - `config`: Physics tuning, defaulting to the constants in `consts`
//! - `scene`: Seeded layout generation for demos and tests

pub mod config;
pub mod scene;
pub mod space;

pub use config::{DegeneratePolicy, PhysicsConfig, UpdateOrder};
pub use scene::{SceneSpec, generate_scene, retarget_ring};
pub use space::{Ball, FloatingSpace, NullPainter, Painter, SpaceStats};

use glam::DVec2;

/// Physics constants (one tick = one implicit time unit)
pub mod consts {
    /// Constant per-axis acceleration toward the target
    pub const TARGET_NUDGE: f64 = 0.005;
    /// Radius change per tick toward the target radius
    pub const RADIUS_STEP: f64 = 0.5;

    /// Gravity-to-target strength (scaled by distance² / mass)
    pub const GRAVITY_COULOMB: f64 = 0.00001;
    /// Floor for the gravity pull so it always beats friction
    pub const GRAVITY_MIN_FORCE: f64 = 0.01;

    /// Repulsion strength between balls (scaled by mass / distance²)
    pub const REPULSION_COULOMB: f64 = 2.0;
    /// Hard cap on a single pairwise repulsion
    pub const REPULSION_MAX_FORCE: f64 = 1.0;

    /// Friction used by `Ball::new` unless overridden
    pub const DEFAULT_FRICTION: f64 = 0.9;
}

/// Unit vector from `from` toward `to`, divided by the raw distance `d`
///
/// No guard: `d == 0` yields NaN components, callers decide the policy.
#[inline]
pub fn unit_toward(from: DVec2, to: DVec2, d: f64) -> DVec2 {
    (to - from) / d
}

/// Convert polar (magnitude, direction) to cartesian
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian to polar (magnitude, direction)
#[inline]
pub fn cartesian_to_polar(v: DVec2) -> (f64, f64) {
    (v.length(), v.y.atan2(v.x))
}

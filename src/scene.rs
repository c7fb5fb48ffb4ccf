//! Seeded scene generation
//!
//! Builds a reproducible starting layout: balls scattered over a rectangle,
//! each assigned a slot on a ring around the center to drift to. The same
//! seed always produces the same scene.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRICTION;
use crate::polar_to_cartesian;
use crate::space::Ball;

/// Parameters for `generate_scene`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    pub seed: u64,
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub friction: f64,
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self {
            seed: 1,
            count: 12,
            width: 1200.0,
            height: 800.0,
            min_radius: 15.0,
            max_radius: 45.0,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl SceneSpec {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ring radius that keeps targets inside the shorter side
    pub fn ring_radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - self.max_radius).max(0.0)
    }
}

/// Mass grows linearly with radius so big balls hold their place
#[inline]
pub fn mass_for_radius(radius: f64) -> f64 {
    radius / 10.0
}

/// Create the balls described by `spec`
pub fn generate_scene(spec: &SceneSpec) -> Vec<Ball> {
    // NaN, infinite and negative extents collapse to zero
    let extent = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let spec = &SceneSpec {
        width: extent(spec.width),
        height: extent(spec.height),
        ..spec.clone()
    };

    let mut rng = Pcg32::seed_from_u64(spec.seed);
    let ring = ring_slots(spec.center(), spec.ring_radius(), spec.count, 0.0);

    let balls: Vec<Ball> = ring
        .into_iter()
        .map(|target| {
            let position = DVec2::new(
                rng.random_range(0.0..=spec.width),
                rng.random_range(0.0..=spec.height),
            );
            let target_radius = if spec.max_radius > spec.min_radius
                && (spec.max_radius - spec.min_radius).is_finite()
            {
                rng.random_range(spec.min_radius..spec.max_radius)
            } else {
                spec.min_radius
            };

            // Grow in from a dot
            Ball::new(position, 0.0, mass_for_radius(target_radius))
                .with_target(target)
                .with_target_radius(target_radius)
                .with_friction(spec.friction)
        })
        .collect();

    log::info!(
        "Scene seed {}: {} balls, ring radius {:.1}",
        spec.seed,
        balls.len(),
        spec.ring_radius()
    );

    balls
}

/// Evenly spaced points on a circle, starting at `phase` radians
pub fn ring_slots(center: DVec2, radius: f64, count: usize, phase: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| center + polar_to_cartesian(radius, phase + TAU * i as f64 / count as f64))
        .collect()
}

/// Move every target to a ring slot, in collection order
pub fn retarget_ring(balls: &mut [Ball], center: DVec2, radius: f64, phase: f64) {
    let slots = ring_slots(center, radius, balls.len(), phase);
    for (ball, slot) in balls.iter_mut().zip(slots) {
        ball.target_position = slot;
    }
}

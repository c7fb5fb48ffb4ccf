//! Ball entity
//!
//! The space owns its balls by value; identity is the index in the collection.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRICTION;

/// A floating ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Current center
    pub position: DVec2,
    /// Current velocity (distance per tick)
    pub speed: DVec2,
    /// Where the ball is drifting to (set by the owner)
    pub target_position: DVec2,
    pub radius: f64,
    pub target_radius: f64,
    /// Must be > 0; divided by in gravity and collision correction
    pub mass: f64,
    /// Per-tick speed multiplier, expected in [0, 1)
    pub friction: f64,
}

impl Ball {
    /// A resting ball whose targets are its current position and radius
    pub fn new(position: DVec2, radius: f64, mass: f64) -> Self {
        Self {
            position,
            speed: DVec2::ZERO,
            target_position: position,
            radius,
            target_radius: radius,
            mass,
            friction: DEFAULT_FRICTION,
        }
    }

    pub fn with_target(mut self, target: DVec2) -> Self {
        self.target_position = target;
        self
    }

    pub fn with_target_radius(mut self, target_radius: f64) -> Self {
        self.target_radius = target_radius;
        self
    }

    pub fn with_speed(mut self, speed: DVec2) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Strict point-in-circle test (a point on the rim is outside)
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// False once NaN/Infinity has leaked into position, speed or radius
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.speed.is_finite() && self.radius.is_finite()
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.speed.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball_targets_itself() {
        let ball = Ball::new(DVec2::new(3.0, 4.0), 10.0, 2.0);
        assert_eq!(ball.target_position, ball.position);
        assert_eq!(ball.target_radius, 10.0);
        assert_eq!(ball.speed, DVec2::ZERO);
        assert_eq!(ball.friction, DEFAULT_FRICTION);
    }

    #[test]
    fn test_contains_is_strict() {
        let ball = Ball::new(DVec2::ZERO, 10.0, 1.0);
        assert!(ball.contains(DVec2::new(9.9, 0.0)));
        assert!(!ball.contains(DVec2::new(10.0, 0.0)));
        assert!(!ball.contains(DVec2::new(8.0, 8.0)));
    }

    #[test]
    fn test_is_finite() {
        let mut ball = Ball::new(DVec2::ZERO, 10.0, 1.0);
        assert!(ball.is_finite());
        ball.speed.x = f64::NAN;
        assert!(!ball.is_finite());
    }
}

//! Per-ball integration and force accumulation
//!
//! Forces are applied straight to speed (unit mass per tick). The order in
//! which `FloatingSpace` calls these matters and is fixed there.

use glam::DVec2;

use super::ball::Ball;
use crate::config::PhysicsConfig;
use crate::unit_toward;

/// Move by the current speed
#[inline]
pub fn integrate(ball: &mut Ball) {
    ball.position += ball.speed;
}

/// Scale speed by the ball's friction (not validated)
#[inline]
pub fn apply_friction(ball: &mut Ball) {
    ball.speed *= ball.friction;
}

/// Constant-magnitude pull toward the target on each axis
///
/// Equal coordinates count as "past the target" and get pushed back.
pub fn nudge_toward_target(ball: &mut Ball, nudge: f64) {
    if ball.position.x < ball.target_position.x {
        ball.speed.x += nudge;
    } else {
        ball.speed.x -= nudge;
    }

    if ball.position.y < ball.target_position.y {
        ball.speed.y += nudge;
    } else {
        ball.speed.y -= nudge;
    }
}

/// Step the radius toward its target; never snaps, so it can hover one step around it
pub fn ease_radius(ball: &mut Ball, step: f64) {
    if ball.radius < ball.target_radius {
        ball.radius += step;
    } else {
        ball.radius -= step;
    }
}

/// Attraction toward the ball's own target
///
/// Magnitude is `coulomb * d² / mass`, floored at `gravity_min_force`. Heavier
/// balls get a weaker pull. When the ball sits exactly on its target the
/// direction is undefined: guarded configs return zero.
pub fn gravity_force(ball: &Ball, config: &PhysicsConfig) -> DVec2 {
    let d = ball.position.distance(ball.target_position);
    if d == 0.0 && config.degenerate.is_guarded() {
        return DVec2::ZERO;
    }

    let mut force = config.gravity_coulomb * d * d / ball.mass;
    if force < config.gravity_min_force {
        force = config.gravity_min_force;
    }

    unit_toward(ball.position, ball.target_position, d) * force
}

/// Net repulsion on the ball at `index` from every other source
///
/// `sources` yields `(position, mass)` for the whole collection in order,
/// including the ball itself (skipped by index). The result points away from
/// the neighbours and is meant to be added to speed.
pub fn repulsion_force<I>(index: usize, position: DVec2, sources: I, config: &PhysicsConfig) -> DVec2
where
    I: IntoIterator<Item = (DVec2, f64)>,
{
    let mut push = DVec2::ZERO;

    for (j, (other, mass)) in sources.into_iter().enumerate() {
        if j == index {
            continue;
        }

        let d = position.distance(other);
        if d == 0.0 && config.degenerate.is_guarded() {
            continue;
        }

        let mut force = config.repulsion_coulomb * mass / (d * d);
        // Keep small or near balls from being flung away
        if force > config.repulsion_max_force {
            force = config.repulsion_max_force;
        }

        push -= unit_toward(position, other, d) * force;
    }

    push
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DegeneratePolicy;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(DVec2::new(x, y), 10.0, 1.0)
    }

    #[test]
    fn test_integrate_adds_speed() {
        let mut ball = ball_at(1.0, 2.0).with_speed(DVec2::new(0.5, -1.0));
        integrate(&mut ball);
        assert_eq!(ball.position, DVec2::new(1.5, 1.0));
    }

    #[test]
    fn test_friction_decays_monotonically() {
        let mut ball = ball_at(0.0, 0.0)
            .with_speed(DVec2::new(3.0, -4.0))
            .with_friction(0.9);

        let mut last = ball.speed.length();
        for _ in 0..200 {
            apply_friction(&mut ball);
            let now = ball.speed.length();
            assert!(now < last);
            last = now;
        }
        assert!(last < 1e-8);
    }

    #[test]
    fn test_nudge_direction_per_axis() {
        let mut ball = ball_at(0.0, 0.0).with_target(DVec2::new(10.0, -10.0));
        nudge_toward_target(&mut ball, 0.005);
        assert_eq!(ball.speed, DVec2::new(0.005, -0.005));

        // On target counts as past it
        let mut ball = ball_at(5.0, 5.0);
        nudge_toward_target(&mut ball, 0.005);
        assert_eq!(ball.speed, DVec2::new(-0.005, -0.005));
    }

    #[test]
    fn test_ease_radius_hovers_at_target() {
        let mut ball = ball_at(0.0, 0.0).with_target_radius(11.0);
        ease_radius(&mut ball, 0.5);
        assert_eq!(ball.radius, 10.5);
        ease_radius(&mut ball, 0.5);
        assert_eq!(ball.radius, 11.0);
        ease_radius(&mut ball, 0.5);
        assert_eq!(ball.radius, 10.5);
    }

    #[test]
    fn test_gravity_floor_and_direction() {
        let config = PhysicsConfig::default();
        let ball = ball_at(0.0, 0.0).with_target(DVec2::new(10.0, 0.0));
        // 1e-5 * 100 / 1 = 0.001, floored to 0.01
        let pull = gravity_force(&ball, &config);
        assert!((pull.x - 0.01).abs() < 1e-12);
        assert_eq!(pull.y, 0.0);

        let far = ball_at(0.0, 0.0).with_target(DVec2::new(0.0, 100.0));
        let pull = gravity_force(&far, &config);
        assert!((pull.y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_weaker_for_heavier_ball() {
        let config = PhysicsConfig::default();
        let light = Ball::new(DVec2::ZERO, 10.0, 1.0).with_target(DVec2::new(300.0, 0.0));
        let heavy = Ball::new(DVec2::ZERO, 10.0, 3.0).with_target(DVec2::new(300.0, 0.0));
        assert!(gravity_force(&light, &config).x > gravity_force(&heavy, &config).x);
    }

    #[test]
    fn test_gravity_on_target() {
        let ball = ball_at(5.0, 5.0);
        assert_eq!(gravity_force(&ball, &PhysicsConfig::default()), DVec2::ZERO);

        let config = PhysicsConfig {
            degenerate: DegeneratePolicy::Propagate,
            ..Default::default()
        };
        assert!(gravity_force(&ball, &config).is_nan());
    }

    #[test]
    fn test_repulsion_pushes_away_and_caps() {
        let config = PhysicsConfig::default();
        let sources = [(DVec2::ZERO, 1.0), (DVec2::new(20.0, 0.0), 50.0)];

        // 2 * 50 / 400 = 0.25
        let push = repulsion_force(0, DVec2::ZERO, sources, &config);
        assert!((push.x + 0.25).abs() < 1e-12);
        assert_eq!(push.y, 0.0);

        // Close neighbour: 2 * 1 / 1 = 2, capped at 1
        let push = repulsion_force(1, DVec2::new(1.0, 0.0), sources, &config);
        assert!((push.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_repulsion_sums_neighbours() {
        let config = PhysicsConfig::default();
        let sources = [
            (DVec2::new(-20.0, 0.0), 1.0),
            (DVec2::ZERO, 1.0),
            (DVec2::new(20.0, 0.0), 1.0),
        ];
        let push = repulsion_force(1, DVec2::ZERO, sources, &config);
        assert!(push.length() < 1e-12);
    }

    #[test]
    fn test_repulsion_coincident_centers() {
        let sources = [(DVec2::ZERO, 1.0), (DVec2::ZERO, 1.0)];
        let push = repulsion_force(0, DVec2::ZERO, sources, &PhysicsConfig::default());
        assert_eq!(push, DVec2::ZERO);

        let config = PhysicsConfig {
            degenerate: DegeneratePolicy::Propagate,
            ..Default::default()
        };
        assert!(repulsion_force(0, DVec2::ZERO, sources, &config).is_nan());
    }
}

//! The floating space: ball collection plus the per-tick physics loop

use glam::DVec2;

use super::ball::Ball;
use super::collision::{colliding, resolve_collision};
use super::forces::{
    apply_friction, ease_radius, gravity_force, integrate, nudge_toward_target, repulsion_force,
};
use super::painter::Painter;
use crate::config::{PhysicsConfig, UpdateOrder};

/// Aggregate health of the space, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpaceStats {
    pub balls: usize,
    pub kinetic_energy: f64,
    /// Deepest overlap between any two balls (0 when none overlap)
    pub max_overlap: f64,
    /// Balls whose state contains NaN/Infinity
    pub non_finite: usize,
}

/// A set of floating balls that drift to their targets without overlapping
///
/// The owner may add or remove balls freely between ticks. Nothing here keeps
/// identities: a ball is its index in the collection.
#[derive(Debug, Clone, Default)]
pub struct FloatingSpace {
    balls: Vec<Ball>,
    config: PhysicsConfig,
    time_ticks: u64,
    /// Set once a non-finite ball has been reported, cleared when healthy again
    diverged: bool,
}

impl FloatingSpace {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Start over with an empty collection
    pub fn initialize(&mut self) {
        self.balls.clear();
        self.time_ticks = 0;
        self.diverged = false;
        log::info!("Floating space initialized ({:?} order)", self.config.update_order);
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    /// Append a ball, returning its index
    pub fn add_ball(&mut self, ball: Ball) -> usize {
        self.balls.push(ball);
        self.balls.len() - 1
    }

    /// Remove the ball at `index`; later balls shift down by one
    pub fn remove_ball(&mut self, index: usize) -> Option<Ball> {
        if index < self.balls.len() {
            Some(self.balls.remove(index))
        } else {
            None
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut Vec<Ball> {
        &mut self.balls
    }

    pub fn ball(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn ball_mut(&mut self, index: usize) -> Option<&mut Ball> {
        self.balls.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Number of physics steps since `initialize`
    pub fn tick_count(&self) -> u64 {
        self.time_ticks
    }

    /// Advance one tick and hand every ball to the painter
    pub fn physics_loop<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.step();
        self.paint(painter);
    }

    /// Advance one tick without drawing
    ///
    /// Balls are processed in collection order. For ball `i`: integrate,
    /// friction, nudge, radius easing, collisions against every later ball,
    /// repulsion from all others, then gravity toward its target. In
    /// `Sequential` order repulsion sees positions already moved this tick.
    pub fn step(&mut self) {
        self.time_ticks += 1;

        let snapshot: Option<Vec<(DVec2, f64)>> = match self.config.update_order {
            UpdateOrder::Sequential => None,
            UpdateOrder::Snapshot => Some(self.field_sources().collect()),
        };

        for i in 0..self.balls.len() {
            self.advance(i);
            self.collide_with_later(i);

            let push = match &snapshot {
                Some(field) => repulsion_force(i, field[i].0, field.iter().copied(), &self.config),
                None => repulsion_force(
                    i,
                    self.balls[i].position,
                    self.field_sources(),
                    &self.config,
                ),
            };
            self.balls[i].speed += push;

            let pull = gravity_force(&self.balls[i], &self.config);
            self.balls[i].speed += pull;
        }

        self.check_divergence();
    }

    /// Background front-to-back, then foreground back-to-front
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        for (index, ball) in self.balls.iter().enumerate() {
            painter.draw_background(index, ball);
        }
        for (index, ball) in self.balls.iter().enumerate().rev() {
            painter.draw_foreground(index, ball);
        }
    }

    /// Index of the first ball containing the point, if any
    ///
    /// Lowest index wins when balls overlap.
    pub fn is_inside(&self, x: f64, y: f64) -> Option<usize> {
        let point = DVec2::new(x, y);
        self.balls.iter().position(|ball| ball.contains(point))
    }

    /// Whether the ball at `index` contains the point (false if no such ball)
    pub fn is_inside_ball(&self, index: usize, x: f64, y: f64) -> bool {
        self.balls
            .get(index)
            .is_some_and(|ball| ball.contains(DVec2::new(x, y)))
    }

    pub fn stats(&self) -> SpaceStats {
        let mut max_overlap: f64 = 0.0;
        for (i, a) in self.balls.iter().enumerate() {
            for b in &self.balls[i + 1..] {
                let overlap = a.radius + b.radius - a.position.distance(b.position);
                if overlap > max_overlap {
                    max_overlap = overlap;
                }
            }
        }

        SpaceStats {
            balls: self.balls.len(),
            kinetic_energy: self.balls.iter().map(Ball::kinetic_energy).sum(),
            max_overlap,
            non_finite: self.balls.iter().filter(|b| !b.is_finite()).count(),
        }
    }

    fn field_sources(&self) -> impl Iterator<Item = (DVec2, f64)> + '_ {
        self.balls.iter().map(|b| (b.position, b.mass))
    }

    /// Integration, friction, target nudge and radius easing for one ball
    fn advance(&mut self, i: usize) {
        let config = &self.config;
        let ball = &mut self.balls[i];

        integrate(ball);
        apply_friction(ball);
        nudge_toward_target(ball, config.target_nudge);
        ease_radius(ball, config.radius_step);
    }

    /// Resolve ball `i` against every later ball it touches
    fn collide_with_later(&mut self, i: usize) {
        let policy = self.config.degenerate;

        for k in (i + 1)..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(k);
            let current = &mut head[i];
            let later = &mut tail[0];

            if colliding(current, later) {
                resolve_collision(later, current, policy);
            }
        }
    }

    fn check_divergence(&mut self) {
        match self.balls.iter().position(|b| !b.is_finite()) {
            Some(index) if !self.diverged => {
                log::warn!(
                    "Ball {} has non-finite state at tick {}",
                    index,
                    self.time_ticks
                );
                self.diverged = true;
            }
            Some(_) => {}
            None => self.diverged = false,
        }
    }
}

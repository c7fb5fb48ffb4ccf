//! Rendering hand-off
//!
//! The space draws nothing itself. Once per tick it walks the balls twice and
//! hands each one to a `Painter`.

use super::ball::Ball;

/// Receives the two draw passes of a tick
///
/// Implementations must not call back into the space.
pub trait Painter {
    /// Called front-to-back, in collection order
    fn draw_background(&mut self, index: usize, ball: &Ball);
    /// Called back-to-front, in reverse collection order
    fn draw_foreground(&mut self, index: usize, ball: &Ball);
}

/// Painter that draws nothing (headless stepping)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn draw_background(&mut self, _index: usize, _ball: &Ball) {}
    fn draw_foreground(&mut self, _index: usize, _ball: &Ball) {}
}

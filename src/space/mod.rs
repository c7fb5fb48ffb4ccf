//! Floating space simulation
//!
//! Everything that moves the balls lives here. Stepping is synchronous and
//! deterministic:
//! - One tick = one implicit time unit
//! - Stable iteration order (collection index)
//! - No rendering dependencies (drawing goes through `Painter`)

pub mod ball;
pub mod collision;
pub mod floating;
pub mod forces;
pub mod painter;

pub use ball::Ball;
pub use collision::{colliding, elastic_exchange, resolve_collision};
pub use floating::{FloatingSpace, SpaceStats};
pub use forces::{apply_friction, ease_radius, gravity_force, integrate, nudge_toward_target, repulsion_force};
pub use painter::{NullPainter, Painter};

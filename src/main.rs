//! Floating Space headless demo
//!
//! Builds a seeded scene, runs the physics loop and prints the final layout.
//! Usage: `floating-space [seed] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
use floating_space::{Ball, FloatingSpace, PhysicsConfig, Painter, SceneSpec, generate_scene};

/// Counts draw calls instead of drawing
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct CountingPainter {
    backgrounds: u64,
    foregrounds: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl Painter for CountingPainter {
    fn draw_background(&mut self, _index: usize, _ball: &Ball) {
        self.backgrounds += 1;
    }

    fn draw_foreground(&mut self, _index: usize, _ball: &Ball) {
        self.foregrounds += 1;
    }
}

/// Ticks between stat log lines
#[cfg(not(target_arch = "wasm32"))]
const LOG_EVERY: u64 = 100;

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, name: &str) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {} {:?}", name, raw);
            default
        }),
        None => default,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = parse_arg(args.next(), 1, "seed");
    let ticks: u64 = parse_arg(args.next(), 1000, "tick count");

    let config = PhysicsConfig::load_or_default(std::env::var("FLOATING_SPACE_CONFIG").ok().as_deref());

    let mut space = FloatingSpace::new(config);
    space.initialize();

    let spec = SceneSpec {
        seed,
        ..SceneSpec::default()
    };
    for ball in generate_scene(&spec) {
        space.add_ball(ball);
    }

    log::info!("Floating space starting: {} balls, {} ticks", space.len(), ticks);

    let mut painter = CountingPainter::default();
    for _ in 0..ticks {
        space.physics_loop(&mut painter);

        if space.tick_count() % LOG_EVERY == 0 {
            let stats = space.stats();
            log::debug!(
                "tick {}: energy={:.4} overlap={:.2} non_finite={}",
                space.tick_count(),
                stats.kinetic_energy,
                stats.max_overlap,
                stats.non_finite
            );
        }
    }

    let stats = space.stats();
    log::info!(
        "Done after {} ticks: energy={:.4} overlap={:.2} draws={}/{}",
        space.tick_count(),
        stats.kinetic_energy,
        stats.max_overlap,
        painter.backgrounds,
        painter.foregrounds
    );

    match serde_json::to_string_pretty(space.balls()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize layout: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on wasm
}

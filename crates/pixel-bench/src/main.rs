use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use pixel_wm::components::WindowKind;
use pixel_wm::window::{Compositor, CompositorError, WindowId, WindowSpec};

const MIN_WINDOW: u16 = 60;

#[derive(Parser, Debug)]
#[command(
    name = "pixel-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare full repaints with dirty-region repaints over random window moves"
)]
struct BenchCli {
    /// Buffer width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u16,

    /// Buffer height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u16,

    /// Number of top-level windows to stack.
    #[arg(long, default_value_t = 12)]
    windows: usize,

    /// Number of random moves to replay.
    #[arg(long, default_value_t = 500)]
    moves: usize,

    /// Seed for the move sequence. Defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug)]
struct BenchConfig {
    width: u16,
    height: u16,
    windows: usize,
    moves: usize,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if cli.width < MIN_WINDOW * 2 || cli.height < MIN_WINDOW * 2 {
            return Err(format!(
                "buffer must be at least {0}x{0} pixels",
                MIN_WINDOW * 2
            ));
        }
        if !(1..=256).contains(&cli.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        if !(1..=100_000).contains(&cli.moves) {
            return Err("moves must be between 1 and 100000".to_string());
        }
        Ok(Self {
            width: cli.width,
            height: cli.height,
            windows: cli.windows,
            moves: cli.moves,
            seed: cli.seed.unwrap_or_else(clock_seed),
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    let stats = run_benchmark(&config).map_err(io::Error::other)?;
    println!("{}", stats.final_report(&config));
    Ok(())
}

/// Two identical desktops replay the same moves: one repaints the whole
/// screen after each move, the other lets `move_window` repaint only the
/// exposed area.
fn run_benchmark(config: &BenchConfig) -> Result<BenchStats, CompositorError> {
    let mut layout = Rng::new(config.seed);
    let (mut full, windows) = build_desktop(config, &mut layout)?;
    let (mut dirty, _) = build_desktop(config, &mut Rng::new(config.seed))?;
    full.paint_screen();
    dirty.paint_screen();

    let mut stats = BenchStats::default();
    let mut moves = Rng::new(config.seed ^ 0x9E37_79B9_7F4A_7C15);
    for _ in 0..config.moves {
        let id = windows[moves.below(windows.len() as u32) as usize];
        let (w, h) = full.window(id).map(|w| w.size()).unwrap_or((0, 0));
        let x = moves.below(u32::from(config.width.saturating_sub(w / 2))) as i32;
        let y = moves.below(u32::from(config.height.saturating_sub(h / 2))) as i32;

        let started = Instant::now();
        full.place_window(id, x, y)?;
        full.paint_screen();
        stats.full.record(started.elapsed());

        let started = Instant::now();
        let exposed = dirty.move_window(id, x, y)?;
        stats.dirty.record(started.elapsed());
        stats.exposed_rects += exposed.len() as u64;
    }
    stats.buffers_match = full.canvas().pixels() == dirty.canvas().pixels();
    Ok(stats)
}

fn build_desktop(
    config: &BenchConfig,
    rng: &mut Rng,
) -> Result<(Compositor, Vec<WindowId>), CompositorError> {
    let mut compositor = Compositor::new(config.width, config.height)?;
    let root = compositor.root();
    let mut windows = Vec::with_capacity(config.windows);
    for _ in 0..config.windows {
        let w = MIN_WINDOW + rng.below(u32::from(config.width / 3)) as u16;
        let h = MIN_WINDOW + rng.below(u32::from(config.height / 3)) as u16;
        let x = rng.below(u32::from(config.width - w / 2)) as i32;
        let y = rng.below(u32::from(config.height - h / 2)) as i32;
        let id =
            compositor.create_window(root, WindowSpec::decorated(x, y, w, h), WindowKind::Plain)?;
        compositor.set_title(id, format!("Window {}", windows.len() + 1))?;
        windows.push(id);
    }
    Ok((compositor, windows))
}

#[derive(Default)]
struct Timing {
    count: u64,
    total: Duration,
    fastest: Option<Duration>,
    slowest: Duration,
}

impl Timing {
    fn record(&mut self, elapsed: Duration) {
        self.count = self.count.saturating_add(1);
        self.total += elapsed;
        self.fastest = Some(self.fastest.map_or(elapsed, |f| f.min(elapsed)));
        self.slowest = self.slowest.max(elapsed);
    }

    fn average_ms(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.total.as_secs_f64() / self.count as f64) * 1_000.0
    }

    fn fastest_ms(&self) -> f64 {
        self.fastest.unwrap_or_default().as_secs_f64() * 1_000.0
    }

    fn slowest_ms(&self) -> f64 {
        self.slowest.as_secs_f64() * 1_000.0
    }
}

#[derive(Default)]
struct BenchStats {
    full: Timing,
    dirty: Timing,
    exposed_rects: u64,
    buffers_match: bool,
}

impl BenchStats {
    fn speedup(&self) -> f64 {
        let dirty = self.dirty.average_ms();
        if dirty > 0.0 {
            self.full.average_ms() / dirty
        } else {
            0.0
        }
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        indoc::formatdoc!(
            r#"
            Repaint bench: {width}x{height}, {windows} windows, {moves} moves (seed {seed}).
            Full repaint:  avg {full_avg:.3} ms | best {full_best:.3} ms | worst {full_worst:.3} ms
            Dirty repaint: avg {dirty_avg:.3} ms | best {dirty_best:.3} ms | worst {dirty_worst:.3} ms
            Exposed rects: {exposed} total (~{per_move:.1}/move)
            Speedup: {speedup:.2}x | Buffers match: {matched}
            "#,
            width = config.width,
            height = config.height,
            windows = config.windows,
            moves = config.moves,
            seed = config.seed,
            full_avg = self.full.average_ms(),
            full_best = self.full.fastest_ms(),
            full_worst = self.full.slowest_ms(),
            dirty_avg = self.dirty.average_ms(),
            dirty_best = self.dirty.fastest_ms(),
            dirty_worst = self.dirty.slowest_ms(),
            exposed = self.exposed_rects,
            per_move = self.exposed_rects as f64 / config.moves as f64,
            speedup = self.speedup(),
            matched = if self.buffers_match { "yes" } else { "NO" },
        )
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        ^ 0xA5A5_A5A5_1234_5678
}

/// 64-bit LCG; plenty for shuffling windows around.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 { 0 } else { self.next() % bound }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(windows: usize, moves: usize) -> BenchConfig {
        BenchConfig {
            width: 320,
            height: 240,
            windows,
            moves,
            seed: 42,
        }
    }

    #[test]
    fn rejects_out_of_range_arguments() {
        let cli = BenchCli {
            width: 50,
            height: 768,
            windows: 4,
            moves: 10,
            seed: Some(1),
        };
        assert!(BenchConfig::try_from(&cli).is_err());
        let cli = BenchCli {
            width: 1024,
            windows: 0,
            ..cli
        };
        assert!(BenchConfig::try_from(&cli).is_err());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..16 {
            assert_eq!(a.next(), b.next());
        }
        assert_eq!(Rng::new(1).below(0), 0);
    }

    #[test]
    fn dirty_repaint_agrees_with_full_repaint() {
        let stats = run_benchmark(&config(6, 40)).unwrap();
        assert!(stats.buffers_match);
        assert_eq!(stats.full.count, 40);
        assert_eq!(stats.dirty.count, 40);
        let report = stats.final_report(&config(6, 40));
        assert!(report.contains("Buffers match: yes"));
    }
}

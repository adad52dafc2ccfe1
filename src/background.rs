//! Decorative layout data for the hero and page backgrounds.
//!
//! Everything here is a pure function of a seed so the server render and the
//! hydrated page produce the same markup.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

pub const BACKGROUND_SEED: u64 = 0x5eed_da7a;
pub const HERO_PARTICLES: usize = 1200;

const NODE_COUNT: usize = 20;
const CONNECTION_COUNT: usize = 8;
const GRID_LINE_COUNT: usize = 10;
const STREAM_COUNT: usize = 6;
const CHART_BAR_COUNT: usize = 8;
const INDICATOR_COUNT: usize = 12;
const PARTICLE_COUNT: usize = 15;
const HERO_BAR_COUNT: usize = 14;

pub const SYMBOLS: [&str; 8] = ["∑", "μ", "σ", "Δ", "λ", "π", "∇", "Ω"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataNode {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub size: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub position: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataStream {
    pub left: f64,
    pub delay: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub height: f64,
    pub left: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub symbol: &'static str,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub x: f64,
    pub y: f64,
}

pub static METRICS: [Metric; 4] = [
    Metric {
        label: "Accuracy",
        value: "94.7%",
        x: 15.0,
        y: 20.0,
    },
    Metric {
        label: "Processing",
        value: "2.3s",
        x: 75.0,
        y: 35.0,
    },
    Metric {
        label: "Insights",
        value: "847",
        x: 25.0,
        y: 70.0,
    },
    Metric {
        label: "Models",
        value: "23",
        x: 80.0,
        y: 75.0,
    },
];

/// Positions are percentages of the container, delays and durations seconds,
/// sizes pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayout {
    pub nodes: Vec<DataNode>,
    pub connections: Vec<Connection>,
    pub grid_lines: Vec<GridLine>,
    pub streams: Vec<DataStream>,
    pub chart_bars: Vec<ChartBar>,
    pub indicators: Vec<Indicator>,
    pub particles: Vec<Particle>,
    pub metrics: &'static [Metric],
}

impl BackgroundLayout {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let nodes = (0..NODE_COUNT)
            .map(|_| DataNode {
                left: rng.gen_range(7.5..92.5),
                top: rng.gen_range(10.0..90.0),
                delay: rng.gen_range(0.0..12.0),
                size: rng.gen_range(4.0..10.0),
                tone: if rng.gen_bool(0.5) {
                    Tone::Primary
                } else {
                    Tone::Secondary
                },
            })
            .collect();

        let connections = (0..CONNECTION_COUNT)
            .map(|_| Connection {
                start_x: rng.gen_range(10.0..90.0),
                start_y: rng.gen_range(15.0..85.0),
                end_x: rng.gen_range(10.0..90.0),
                end_y: rng.gen_range(15.0..85.0),
                delay: rng.gen_range(0.0..8.0),
                duration: rng.gen_range(8.0..14.0),
            })
            .collect();

        let grid_lines = (0..GRID_LINE_COUNT)
            .map(|i| GridLine {
                position: (i + 1) as f64 * 10.0,
                delay: rng.gen_range(0.0..5.0),
            })
            .collect();

        let streams = (0..STREAM_COUNT)
            .map(|i| DataStream {
                left: 15.0 + i as f64 * 14.0,
                delay: i as f64 * 0.8,
                height: rng.gen_range(60.0..100.0),
            })
            .collect();

        let chart_bars = (0..CHART_BAR_COUNT)
            .map(|i| ChartBar {
                height: rng.gen_range(20.0..80.0),
                left: 10.0 + i as f64 * 10.0,
                delay: i as f64 * 0.3,
            })
            .collect();

        let indicators = (0..INDICATOR_COUNT)
            .map(|_| Indicator {
                symbol: SYMBOLS.choose(&mut rng).copied().unwrap_or(SYMBOLS[0]),
                left: rng.gen_range(5.0..95.0),
                top: rng.gen_range(10.0..90.0),
                delay: rng.gen_range(0.0..15.0),
                font_size: rng.gen_range(12.0..18.0),
            })
            .collect();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..10.0),
                duration: rng.gen_range(6.0..10.0),
            })
            .collect();

        Self {
            nodes,
            connections,
            grid_lines,
            streams,
            chart_bars,
            indicators,
            particles,
            metrics: &METRICS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroBar {
    pub x: f64,
}

/// Point cloud and bar chart behind the hero text, in scene units centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroScene {
    pub particles: Vec<[f64; 3]>,
    pub bars: Vec<HeroBar>,
}

impl HeroScene {
    pub const WIDTH: f64 = 12.0;
    pub const HEIGHT: f64 = 6.0;
    pub const DEPTH: f64 = 4.0;

    pub fn generate(seed: u64, particle_count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..particle_count)
            .map(|_| {
                [
                    (rng.gen::<f64>() - 0.5) * Self::WIDTH,
                    (rng.gen::<f64>() - 0.5) * Self::HEIGHT,
                    (rng.gen::<f64>() - 0.5) * Self::DEPTH,
                ]
            })
            .collect();
        let bars = (0..HERO_BAR_COUNT)
            .map(|i| HeroBar {
                x: -3.9 + i as f64 * 0.6,
            })
            .collect();
        Self { particles, bars }
    }
}

/// Period of [`bar_scale`] in seconds.
pub const BAR_PERIOD: f64 = std::f64::consts::PI / 1.2;

/// Vertical scale of hero bar `index` at `t` seconds.
pub fn bar_scale(t: f64, index: usize) -> f64 {
    0.6 + (t * 1.2 + index as f64 * 0.4).sin().abs() * 1.8
}

/// Samples one period of [`bar_scale`] for bar `index` as
/// `(percent of period, scale)` pairs, both ends included.
pub fn bar_keyframes(index: usize, steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|k| {
            let frac = k as f64 / steps as f64;
            (frac * 100.0, bar_scale(frac * BAR_PERIOD, index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(
            BackgroundLayout::generate(BACKGROUND_SEED),
            BackgroundLayout::generate(BACKGROUND_SEED)
        );
        assert_ne!(BackgroundLayout::generate(1), BackgroundLayout::generate(2));
    }

    #[test]
    fn test_layout_counts() {
        let layout = BackgroundLayout::generate(7);
        assert_eq!(layout.nodes.len(), 20);
        assert_eq!(layout.connections.len(), 8);
        assert_eq!(layout.grid_lines.len(), 10);
        assert_eq!(layout.streams.len(), 6);
        assert_eq!(layout.chart_bars.len(), 8);
        assert_eq!(layout.indicators.len(), 12);
        assert_eq!(layout.particles.len(), 15);
        assert_eq!(layout.metrics.len(), 4);
    }

    #[test]
    fn test_layout_ranges() {
        for seed in 0..32 {
            let layout = BackgroundLayout::generate(seed);
            for n in &layout.nodes {
                assert!((7.5..92.5).contains(&n.left));
                assert!((10.0..90.0).contains(&n.top));
                assert!((4.0..10.0).contains(&n.size));
            }
            for c in &layout.connections {
                assert!((10.0..90.0).contains(&c.start_x));
                assert!((15.0..85.0).contains(&c.end_y));
                assert!((8.0..14.0).contains(&c.duration));
            }
            for ind in &layout.indicators {
                assert!(SYMBOLS.contains(&ind.symbol));
                assert!((12.0..18.0).contains(&ind.font_size));
            }
        }
    }

    #[test]
    fn test_fixed_positions() {
        let layout = BackgroundLayout::generate(3);
        let grid = layout.grid_lines.iter().map(|g| g.position).collect::<Vec<_>>();
        assert_eq!(grid[0], 10.0);
        assert_eq!(grid[9], 100.0);
        assert_eq!(layout.streams[5].left, 85.0);
        assert_eq!(layout.chart_bars[7].left, 80.0);
    }

    #[test]
    fn test_hero_scene() {
        let scene = HeroScene::generate(BACKGROUND_SEED, 500);
        assert_eq!(scene.particles.len(), 500);
        assert_eq!(scene.bars.len(), 14);
        for [x, y, z] in &scene.particles {
            assert!(x.abs() <= 6.0);
            assert!(y.abs() <= 3.0);
            assert!(z.abs() <= 2.0);
        }
        assert!((scene.bars[0].x + 3.9).abs() < 1e-9);
        assert!((scene.bars[13].x - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_bar_scale_bounds() {
        for i in 0..14 {
            for step in 0..100 {
                let s = bar_scale(step as f64 * 0.1, i);
                assert!((0.6..=2.4 + 1e-9).contains(&s));
            }
        }
        assert!((bar_scale(0.0, 0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_bar_keyframes() {
        let frames = bar_keyframes(3, 12);
        assert_eq!(frames.len(), 13);
        assert_eq!(frames[0].0, 0.0);
        assert_eq!(frames[12].0, 100.0);
        // one full period, so the loop has no seam
        assert!((frames[0].1 - frames[12].1).abs() < 1e-9);
        for (k, (_, scale)) in frames.iter().enumerate() {
            let t = k as f64 / 12.0 * BAR_PERIOD;
            assert!((scale - bar_scale(t, 3)).abs() < 1e-9);
        }
        assert_eq!(bar_keyframes(0, 0).len(), 2);
    }
}

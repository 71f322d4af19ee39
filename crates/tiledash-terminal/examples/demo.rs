//! Animated dashboard with every tile type.
//!
//! Run with: cargo run -p tiledash-terminal --example demo -- --frames 200 --fps 25
//!
//! Logging goes to stderr; set `RUST_LOG=tiledash_terminal=debug` and redirect
//! stderr to a file to watch frames being drawn.

use clap::Parser;
use std::time::{Duration, Instant};
use tiledash_terminal::widgets::{
    ColorGradientVGauge, ColorRangeVGauge, HBrailleChart, HBrailleFilledChart, HChart, HGauge,
    Log, Text, VChart, VGauge,
};
use tiledash_terminal::{ColorMode, Dashboard, DisplayConfig, Render, Rgb, Session, Tile};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "demo", about = "Animated tiledash dashboard")]
struct Args {
    /// Number of frames to draw before exiting
    #[arg(long, default_value_t = 200)]
    frames: u32,

    /// Frames per second
    #[arg(long, default_value_t = 25)]
    fps: u32,

    /// Color mode: truecolor, 256, 16 or mono (detected when omitted)
    #[arg(long)]
    color: Option<ColorMode>,
}

const MAGENTA: Rgb = Rgb::new(205, 0, 205);
const GREEN: Rgb = Rgb::new(0, 205, 0);
const BLUE: Rgb = Rgb::new(0, 0, 238);
const YELLOW: Rgb = Rgb::new(205, 205, 0);
const RED: Rgb = Rgb::new(205, 0, 0);

/// Paths to the tiles the animation updates.
const TITLE_GAUGE: [usize; 2] = [0, 0];
const LABEL_GAUGES: [[usize; 2]; 2] = [[0, 1], [0, 2]];
const VGAUGES: [usize; 2] = [0, 7];
const LOG: [usize; 2] = [1, 1];
const VCHART: [usize; 2] = [1, 2];
const HCHART: [usize; 2] = [1, 3];
const BRAILLE: [usize; 2] = [1, 4];
const FILLED: [usize; 2] = [1, 5];

fn layout() -> Tile {
    let labelled = |value: i32| {
        Tile::new(HGauge::new(value).with_label("only label")).with_border_color(MAGENTA)
    };
    let vgauge = |value: i32| Tile::new(VGauge::new(value)).with_border_color(GREEN);

    let gauges = Tile::vsplit([
        Tile::new(HGauge::new(50)).with_title("only title").with_border_color(MAGENTA),
        labelled(20),
        labelled(30),
        labelled(50),
        labelled(80),
        Tile::new(HGauge::new(20)),
        Tile::new(HGauge::new(55).with_label("label, no border")).with_border(false),
        Tile::hsplit([
            vgauge(0),
            vgauge(5),
            vgauge(30),
            vgauge(50),
            vgauge(80).with_text_color(BLUE),
            vgauge(95).with_text_color(YELLOW),
            Tile::new(ColorRangeVGauge::new(
                100,
                vec![(33.0, GREEN), (66.0, BLUE), (100.0, RED)],
            ))
            .with_border_color(GREEN),
            Tile::new(ColorGradientVGauge::new(0)).with_border_color(GREEN),
        ]),
    ]);

    let panels = Tile::vsplit([
        Tile::new(Text::new("Hello World,\nthis is tiledash.")).with_border_color(GREEN),
        Tile::new(Log::new()).with_title("logs").with_border_color(MAGENTA),
        Tile::new(VChart::new()).with_border_color(GREEN).with_text_color(GREEN),
        Tile::new(HChart::new()).with_border_color(GREEN).with_text_color(GREEN),
        Tile::new(HBrailleChart::new()).with_border_color(GREEN).with_text_color(GREEN),
        Tile::new(HBrailleFilledChart::new()).with_border_color(GREEN).with_text_color(GREEN),
    ]);

    Tile::hsplit([gauges, panels])
        .with_title("tiledash")
        .with_border(true)
}

fn update<T: Render>(root: &mut Tile, path: &[usize], f: impl FnOnce(&mut T)) {
    if let Some(content) = root.at_mut(path).and_then(|t| t.content_mut::<T>()) {
        f(content);
    }
}

fn animate(root: &mut Tile, cycle: u32) {
    let c = f64::from(cycle);
    update(root, &TITLE_GAUGE, |g: &mut HGauge| {
        g.set_value((50.0 + 49.9 * (c / 80.0).sin()).trunc());
    });
    update(root, &LABEL_GAUGES[0], |g: &mut HGauge| {
        g.set_value((50.0 + 45.0 * (c / 20.0).sin()).trunc());
    });
    update(root, &LABEL_GAUGES[1], |g: &mut HGauge| {
        g.set_value((50.0 + 45.0 * (c / 30.0 + 3.0).sin()).trunc());
    });

    if let Some(vgauges) = root.at_mut(&VGAUGES) {
        for i in 0..vgauges.items().len() {
            let value = 50.0 + 49.9 * (c / 12.0 + i as f64).sin();
            let Some(tile) = vgauges.item_mut(i) else { continue };
            if let Some(g) = tile.content_mut::<VGauge>() {
                g.set_value(value);
            } else if let Some(g) = tile.content_mut::<ColorRangeVGauge>() {
                g.set_value(value);
            } else if let Some(g) = tile.content_mut::<ColorGradientVGauge>() {
                g.set_value(value);
            }
        }
    }

    update(root, &VCHART, |ch: &mut VChart| ch.append(50.0 + 50.0 * (c / 16.0).sin()));
    update(root, &HCHART, |ch: &mut HChart| ch.append(99.9 * (c / 26.0).sin().abs()));
    update(root, &BRAILLE, |ch: &mut HBrailleChart| ch.append(50.0 + 50.0 * (c / 6.0).sin()));
    update(root, &FILLED, |ch: &mut HBrailleFilledChart| {
        ch.append(50.0 + 50.0 * (c / 16.0).sin());
    });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = DisplayConfig::from_env();
    if let Some(mode) = args.color {
        config = config.with_color_mode(mode);
    }
    let frame_time = Duration::from_secs(1) / args.fps.max(1);

    let mut dash: Dashboard = Dashboard::with_config(layout(), config);
    update(dash.root_mut(), &LOG, |log: &mut Log| {
        log.append("0 -----");
        log.append("1 Hello");
        log.append("2 -----");
    });

    let _session = Session::stdout()?;
    let started = Instant::now();
    let mut last_second = 0;
    for cycle in 0..args.frames {
        let frame_start = Instant::now();
        animate(dash.root_mut(), cycle);

        let second = started.elapsed().as_secs();
        if second != last_second {
            last_second = second;
            update(dash.root_mut(), &LOG, |log: &mut Log| log.append(format!("{second}s elapsed")));
        }

        dash.display()?;
        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
    tracing::info!(frames = args.frames, elapsed = ?started.elapsed(), "demo finished");
    Ok(())
}

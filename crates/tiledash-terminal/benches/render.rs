//! Criterion benchmarks for tiledash-terminal
//!
//! Run with: cargo bench -p tiledash-terminal

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tiledash_terminal::widgets::{
    HBrailleChart, HBrailleFilledChart, HChart, HGauge, Log, Text, VChart, VGauge,
};
use tiledash_terminal::{
    render_frame, CellBuffer, ColorMode, DisplayConfig, Rgb, TerminalSurface, Tile,
};

fn dashboard() -> Tile {
    let mut vchart = VChart::new();
    let mut hchart = HChart::new();
    let mut braille = HBrailleChart::new();
    let mut filled = HBrailleFilledChart::new();
    let mut log = Log::new();
    for i in 0..500_u32 {
        let v = f64::from(i % 100);
        vchart.append(v);
        hchart.append(v);
        braille.append(100.0 - v);
        filled.append(v / 2.0);
        log.append(format!("event {i}"));
    }
    Tile::vsplit([
        Tile::hsplit([
            Tile::new(Text::new("status\nok")).with_title("text"),
            Tile::new(HGauge::new(42).with_label("cpu")).with_title("gauge"),
            Tile::new(VGauge::new(73)).with_title("vgauge"),
        ]),
        Tile::hsplit([
            Tile::new(vchart).with_title("vchart"),
            Tile::new(hchart).with_title("hchart"),
        ]),
        Tile::hsplit([
            Tile::new(braille).with_title("braille"),
            Tile::new(filled).with_title("filled"),
            Tile::new(log).with_title("log"),
        ]),
    ])
    .with_border(true)
    .with_title("bench")
    .with_color_high(Rgb::new(255, 80, 80))
    .with_color_low(Rgb::new(80, 80, 255))
}

// =============================================================================
// FRAME BENCHMARKS
// =============================================================================

fn bench_cell_buffer_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_cell_buffer");
    let config = DisplayConfig::default();

    for (w, h) in [(80_u16, 24_u16), (200, 60)] {
        let mut root = dashboard();
        let mut buf = CellBuffer::new(w, h);
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        group.bench_function(format!("{w}x{h}"), |b| {
            b.iter(|| render_frame(black_box(&mut root), &mut buf, &config));
        });
    }

    group.finish();
}

fn bench_terminal_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_terminal");
    let config = DisplayConfig::default();

    for mode in [ColorMode::TrueColor, ColorMode::Color256] {
        let mut root = dashboard();
        let mut surface = TerminalSurface::with_size(std::io::sink(), 120, 40, mode);
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| render_frame(black_box(&mut root), &mut surface, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cell_buffer_frame, bench_terminal_frame);
criterion_main!(benches);

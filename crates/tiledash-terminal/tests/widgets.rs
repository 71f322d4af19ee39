//! Widgets at the edges: tiny areas, wild values, sparse histories.

use proptest::prelude::*;
use tiledash_terminal::widgets::{
    braille_dots, filled_braille, ColorGradientVGauge, ColorRangeVGauge, HBrailleChart,
    HBrailleFilledChart, HChart, HGauge, Log, Text, VChart, VGauge,
};
use tiledash_terminal::{
    render_frame, CellBuffer, DisplayConfig, Rect, Render, Rgb, StyleChain, Tile, TileColors,
};

fn every_widget(value: f64) -> Vec<Box<dyn Render>> {
    let mut vchart = VChart::new();
    let mut hchart = HChart::new();
    let mut braille = HBrailleChart::new();
    let mut filled = HBrailleFilledChart::new();
    let mut log = Log::new().with_gradient(true);
    for i in 0..60 {
        let sample = value + f64::from(i);
        vchart.append(sample);
        hchart.append(sample);
        braille.append(sample);
        filled.append(sample);
        log.append(format!("line {i} {value}"));
    }
    vec![
        Box::new(HGauge::new(value)),
        Box::new(HGauge::new(value).with_label("load")),
        Box::new(VGauge::new(value)),
        Box::new(ColorRangeVGauge::new(value, vec![(50.0, Rgb::new(0, 255, 0))])),
        Box::new(ColorGradientVGauge::new(value)),
        Box::new(vchart),
        Box::new(hchart),
        Box::new(braille),
        Box::new(filled),
        Box::new(log),
        Box::new(Text::new(format!("{value}\nsecond line\nthird"))),
    ]
}

/// Marks cells outside the area; no widget ever prints it.
const MARGIN: &str = "¤";

fn value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0..1000.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(100.0),
    ]
}

fn full_cells(value: f64, label: Option<&str>, w: u16) -> usize {
    let gauge = match label {
        Some(l) => HGauge::new(value).with_label(l),
        None => HGauge::new(value),
    };
    let mut buf = CellBuffer::new(w, 1);
    let colors = TileColors::new();
    gauge.render(&mut buf, Rect::new(0, 0, w, 1), &StyleChain::root(&colors));
    buf.row_text(0).matches('█').count()
}

// =============================================================================
// Every widget stays inside its area
// =============================================================================

proptest! {
    #[test]
    fn widgets_never_write_outside_area(
        value in value_strategy(),
        w in 1u16..30,
        h in 1u16..12,
    ) {
        let colors = TileColors::new();
        let style = StyleChain::root(&colors);
        for widget in every_widget(value) {
            // one-cell margin all around
            let border = MARGIN.repeat(usize::from(w) + 2);
            let mut buf = CellBuffer::new(w + 2, h + 2);
            {
                use tiledash_terminal::Surface;
                for row in 0..h + 2 {
                    buf.move_to(row, 0);
                    buf.print(&border);
                }
            }
            widget.render(&mut buf, Rect::new(1, 1, w, h), &style);

            let lines = buf.lines();
            prop_assert_eq!(&lines[0], &border, "{}", widget.kind());
            prop_assert_eq!(&lines[usize::from(h) + 1], &border);
            for row in 1..=h {
                prop_assert_eq!(buf.symbol(row, 0), MARGIN, "{} left edge", widget.kind());
                prop_assert_eq!(buf.symbol(row, w + 1), MARGIN, "{} right edge", widget.kind());
                for col in 1..=w {
                    prop_assert_ne!(buf.symbol(row, col), MARGIN, "{} left a hole", widget.kind());
                }
            }
        }
    }

    #[test]
    fn gauge_full_cells_monotonic(
        a in 0.0..100.0f64,
        b in 0.0..100.0f64,
        w in 1u16..80,
        label in prop::option::of("[a-z]{1,6}"),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let count = |v: f64| full_cells(v, label.as_deref(), w);
        prop_assert!(count(low) <= count(high));
    }

    #[test]
    fn gauge_extremes_fill_usable_width(w in 1u16..80, label in prop::option::of("[a-z]{1,6}")) {
        let usable = match &label {
            Some(l) if l.len() + 1 < usize::from(w) => usize::from(w) - l.len() - 1,
            Some(_) => 0,
            None => usize::from(w),
        };
        prop_assert_eq!(full_cells(0.0, label.as_deref(), w), 0);
        prop_assert_eq!(full_cells(100.0, label.as_deref(), w), usable);
    }
}

// =============================================================================
// Tiles too small for their content
// =============================================================================

#[test]
fn bordered_tiles_too_small_draw_nothing() {
    for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2)] {
        let mut root = Tile::new(VGauge::new(100));
        let mut buf = CellBuffer::new(w, h + 1);
        render_frame(&mut root, &mut buf, &DisplayConfig::default()).unwrap();
        for line in buf.lines() {
            assert!(!line.contains('█'), "{w}x{h}: {line:?}");
        }
    }
}

#[test]
fn title_only_tile_leaves_room_below() {
    let mut root = Tile::new(HGauge::new(100)).with_border(false).with_title("gauge");
    let mut buf = CellBuffer::new(6, 3);
    render_frame(&mut root, &mut buf, &DisplayConfig::default()).unwrap();
    assert_eq!(buf.lines(), vec!["gauge ", "██████", "      "]);
}

// =============================================================================
// Sparse histories and logs
// =============================================================================

#[test]
fn empty_charts_render_blank() {
    let colors = TileColors::new();
    let style = StyleChain::root(&colors);
    let charts: Vec<Box<dyn Render>> = vec![
        Box::new(VChart::new()),
        Box::new(HChart::new()),
        Box::new(HBrailleChart::new()),
        Box::new(HBrailleFilledChart::new()),
        Box::new(Log::new()),
    ];
    for chart in charts {
        let mut buf = CellBuffer::new(5, 4);
        chart.render(&mut buf, Rect::new(0, 0, 5, 4), &style);
        for line in buf.lines() {
            assert_eq!(line, "     ", "{}", chart.kind());
        }
    }
}

#[test]
fn log_scrolls_oldest_out() {
    let mut log = Log::new();
    for i in 0..55 {
        log.append(format!("{i:02}"));
    }
    let mut buf = CellBuffer::new(2, 50);
    let colors = TileColors::new();
    log.render(&mut buf, Rect::new(0, 0, 2, 50), &StyleChain::root(&colors));
    assert_eq!(buf.row_text(0), "05");
    assert_eq!(buf.row_text(49), "54");
}

#[test]
fn log_wide_glyphs_clipped_to_width() {
    let mut log = Log::new();
    log.append("日本語のログ");
    let mut buf = CellBuffer::new(5, 1);
    let colors = TileColors::new();
    log.render(&mut buf, Rect::new(0, 0, 5, 1), &StyleChain::root(&colors));
    assert_eq!(buf.symbol(0, 0), "日");
    assert_eq!(buf.symbol(0, 2), "本");
    assert_eq!(buf.symbol(0, 4), " ");
}

#[test]
fn braille_helpers_cover_block() {
    assert_eq!(braille_dots(None, None), '\u{2800}');
    assert_eq!(braille_dots(Some(3), Some(0)), '\u{2848}');
    assert_eq!(filled_braille(3, 3), '\u{283F}');
    assert_eq!(filled_braille(0, 0), '\u{2800}');
}

//! Color inheritance through style chains.

use proptest::prelude::*;
use tiledash_core::{interpolate, ColorError, ColorSlot, History, Rgb, StyleChain, TileColors};

fn colors(text: Option<Rgb>, border: Option<Rgb>) -> TileColors {
    TileColors {
        text_color: text,
        border_color: border,
        ..TileColors::new()
    }
}

// =============================================================================
// Chain resolution
// =============================================================================

#[test]
fn nearest_override_wins() {
    let red = Rgb::new(255, 0, 0);
    let blue = Rgb::new(0, 0, 255);
    let root_colors = colors(Some(red), Some(red));
    let mid_colors = colors(Some(blue), None);
    let leaf_colors = TileColors::new();

    let root = StyleChain::root(&root_colors);
    let mid = root.child(&mid_colors);
    let leaf = mid.child(&leaf_colors);

    assert_eq!(leaf.text(), blue);
    assert_eq!(leaf.border(), red);
    assert_eq!(leaf.high(), Rgb::DEFAULT_GRAY);
}

#[test]
fn cached_root_defaults_end_the_walk() {
    let mut root_colors = colors(Some(Rgb::new(1, 1, 1)), None);
    root_colors.fill_unset(Rgb::DEFAULT_GRAY);
    assert!(root_colors.is_complete());
    assert_eq!(root_colors.text_color, Some(Rgb::new(1, 1, 1)));

    let leaf_colors = TileColors::new();
    let root = StyleChain::root(&root_colors);
    let leaf = root.child(&leaf_colors);
    for slot in ColorSlot::ALL {
        assert_eq!(leaf.resolve(slot), root_colors.get(slot).unwrap());
    }
}

#[test]
fn slot_names_are_strict() {
    assert_eq!(ColorSlot::from_name("color_low").unwrap(), ColorSlot::Low);
    assert!(matches!(
        ColorSlot::from_name("colour_low"),
        Err(ColorError::InvalidName(name)) if name == "colour_low"
    ));
}

#[test]
fn tile_colors_deserialize_with_gaps() {
    let json = r#"{"text_color": {"r": 10, "g": 20, "b": 30}}"#;
    let parsed: TileColors = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.text_color, Some(Rgb::new(10, 20, 30)));
    assert_eq!(parsed.border_color, None);
    assert!(!parsed.is_complete());
}

proptest! {
    #[test]
    fn deep_chain_resolves_to_deepest_override(depth in 1usize..16, set_at in 0usize..16) {
        let marker = Rgb::new(9, 8, 7);
        let levels: Vec<TileColors> = (0..depth)
            .map(|i| if i == set_at { colors(Some(marker), None) } else { TileColors::new() })
            .collect();

        fn walk(levels: &[TileColors], parent: Option<&StyleChain<'_>>) -> Rgb {
            match levels.split_first() {
                None => parent.map_or(Rgb::DEFAULT_GRAY, StyleChain::text),
                Some((first, rest)) => {
                    let chain = StyleChain::new(first, parent);
                    walk(rest, Some(&chain))
                }
            }
        }

        let expected = if set_at < depth { marker } else { Rgb::DEFAULT_GRAY };
        prop_assert_eq!(walk(&levels, None), expected);
    }

    // =========================================================================
    // Gradients and histories
    // =========================================================================

    #[test]
    fn gray_gradient_stays_gray(v in 0u8..=255, steps in 1usize..64, pos in 0usize..64) {
        let gray = Rgb::new(v, v, v);
        prop_assert_eq!(interpolate(gray, gray, steps, pos), gray);
    }

    #[test]
    fn history_keeps_newest(capacity in 1usize..64, extra in 0usize..64) {
        let mut history = History::new(capacity);
        history.extend(0..capacity + extra);
        let kept: Vec<usize> = history.iter().copied().collect();
        let expected: Vec<usize> = (extra..capacity + extra).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(history.latest(), Some(&(capacity + extra - 1)));
    }
}

//! Split layout laws, checked by painting each child with its own glyph.

use proptest::prelude::*;
use tiledash_terminal::{CellBuffer, Rect, Render, StyleChain, Surface, Tile};

/// Paints its whole area with one character.
struct Paint(char);

impl Render for Paint {
    fn render(&self, surface: &mut dyn Surface, area: Rect, _style: &StyleChain<'_>) {
        let line: String = std::iter::repeat(self.0).take(usize::from(area.width)).collect();
        for row in area.row..area.bottom() {
            surface.move_to(row, area.col);
            surface.print(&line);
        }
    }

    fn kind(&self) -> &'static str {
        "paint"
    }
}

const GLYPHS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

fn painted(n: usize) -> Vec<Tile> {
    GLYPHS[..n].iter().map(|&g| Tile::new(Paint(g)).with_border(false)).collect()
}

fn draw(root: &Tile, width: u16, height: u16) -> CellBuffer {
    let mut buf = CellBuffer::new(width, height);
    root.render(&mut buf, Rect::new(0, 0, width, height), None);
    buf
}

// =============================================================================
// Rect splitting
// =============================================================================

proptest! {
    #[test]
    fn split_rows_partition_height(h in 0u16..200, w in 0u16..50, n in 1usize..12) {
        let area = Rect::new(3, 5, w, h);
        let (rects, leftover) = area.split_rows(n);
        prop_assert_eq!(rects.len(), n);
        let each = h / n as u16;
        for (i, r) in rects.iter().enumerate() {
            prop_assert_eq!(r.height, each);
            prop_assert_eq!(r.width, w);
            prop_assert_eq!(r.row, 3 + each * i as u16);
            prop_assert_eq!(r.col, 5);
        }
        prop_assert_eq!(leftover.height, h % n as u16);
        prop_assert_eq!(leftover.row, 3 + each * n as u16);
    }

    #[test]
    fn split_cols_partition_width(w in 0u16..200, h in 0u16..50, n in 1usize..12) {
        let area = Rect::new(0, 7, w, h);
        let (rects, leftover) = area.split_cols(n);
        let each = w / n as u16;
        for (i, r) in rects.iter().enumerate() {
            prop_assert_eq!(r.width, each);
            prop_assert_eq!(r.height, h);
            prop_assert_eq!(r.col, 7 + each * i as u16);
        }
        prop_assert_eq!(leftover.width, w % n as u16);
        prop_assert_eq!(leftover.col + leftover.width, 7 + w);
    }

    // =========================================================================
    // Rendered splits
    // =========================================================================

    #[test]
    fn vsplit_rows_owned_by_children(w in 1u16..30, h in 1u16..40, n in 1usize..8) {
        let root = Tile::vsplit(painted(n));
        let buf = draw(&root, w, h);
        let each = usize::from(h) / n;
        for (row, line) in buf.lines().iter().enumerate() {
            let expected = if row < each * n {
                GLYPHS[row / each].to_string().repeat(usize::from(w))
            } else {
                " ".repeat(usize::from(w))
            };
            prop_assert_eq!(line, &expected);
        }
    }

    #[test]
    fn hsplit_columns_owned_by_children(w in 1u16..60, h in 1u16..10, n in 1usize..8) {
        let root = Tile::hsplit(painted(n));
        let buf = draw(&root, w, h);
        let each = usize::from(w) / n;
        let expected: String = (0..usize::from(w))
            .map(|col| if col < each * n { GLYPHS[col / each] } else { ' ' })
            .collect();
        for line in buf.lines() {
            prop_assert_eq!(&line, &expected);
        }
    }

    #[test]
    fn nested_splits_stay_inside_parent(w in 2u16..60, h in 2u16..30) {
        let root = Tile::hsplit([
            Tile::vsplit(painted(3)),
            Tile::new(Paint('z')).with_border(false),
        ])
        .with_border(true);
        let buf = draw(&root, w, h);
        let last = h - 1;
        for col in 0..w {
            let top = buf.symbol(0, col);
            let bottom = buf.symbol(last, col);
            prop_assert!(!top.starts_with(char::is_alphabetic), "col {} top {:?}", col, top);
            prop_assert!(!bottom.starts_with(char::is_alphabetic), "col {} bottom {:?}", col, bottom);
        }
    }
}

#[test]
fn leftover_filled_with_split_text_color() {
    let root = Tile::vsplit(painted(3)).with_text_color(tiledash_terminal::Rgb::new(1, 2, 3));
    let buf = draw(&root, 2, 5);
    assert_eq!(buf.lines(), vec!["aa", "bb", "cc", "  ", "  "]);
    assert_eq!(buf.fg(4, 0), Some(tiledash_terminal::Rgb::new(1, 2, 3)));
}

#[test]
fn more_children_than_rows() {
    let root = Tile::vsplit(painted(5));
    let buf = draw(&root, 3, 2);
    assert_eq!(buf.lines(), vec!["   ", "   "]);
}

//! Cell-addressed rectangles.

use serde::{Deserialize, Serialize};

/// A rectangle of terminal cells.
///
/// Rows grow downward, columns grow rightward. All shrinking saturates at
/// zero, so a `Rect` never has a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top row
    pub row: u16,
    /// Left column
    pub col: u16,
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(row: u16, col: u16, width: u16, height: u16) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// A rect with no cells at the given origin.
    #[must_use]
    pub const fn empty_at(row: u16, col: u16) -> Self {
        Self::new(row, col, 0, 0)
    }

    /// True if the rect covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// One past the last row.
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.row.saturating_add(self.height)
    }

    /// One past the last column.
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.col.saturating_add(self.width)
    }

    /// Shrink by `n` cells on every side.
    #[must_use]
    pub const fn inset(&self, n: u16) -> Self {
        Self::new(
            self.row.saturating_add(n),
            self.col.saturating_add(n),
            self.width.saturating_sub(n.saturating_mul(2)),
            self.height.saturating_sub(n.saturating_mul(2)),
        )
    }

    /// Drop the top `n` rows.
    #[must_use]
    pub const fn skip_rows(&self, n: u16) -> Self {
        let n = if n > self.height { self.height } else { n };
        Self::new(self.row + n, self.col, self.width, self.height - n)
    }

    /// Whether `other` lies entirely inside this rect.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.row >= self.row
            && other.col >= self.col
            && other.bottom() <= self.bottom()
            && other.right() <= self.right()
    }

    /// Stack `n` equal-height rows top to bottom.
    ///
    /// Each child is `height / n` rows tall and spans the full width. The
    /// returned leftover rect holds the `height % n` rows below the last
    /// child. `n == 0` yields no children and the whole rect as leftover.
    #[must_use]
    pub fn split_rows(&self, n: usize) -> (Vec<Self>, Self) {
        if n == 0 {
            return (Vec::new(), *self);
        }
        let item = (usize::from(self.height) / n) as u16;
        let children = (0..n)
            .map(|i| {
                let offset = item.saturating_mul(i as u16);
                Self::new(self.row.saturating_add(offset), self.col, self.width, item)
            })
            .collect();
        let used = item
            .saturating_mul(n.min(usize::from(u16::MAX)) as u16)
            .min(self.height);
        let leftover = Self::new(
            self.row.saturating_add(used),
            self.col,
            self.width,
            self.height - used,
        );
        (children, leftover)
    }

    /// Place `n` equal-width columns side by side.
    ///
    /// Each child is `width / n` columns wide and spans the full height. The
    /// leftover rect holds the `width % n` columns right of the last child.
    #[must_use]
    pub fn split_cols(&self, n: usize) -> (Vec<Self>, Self) {
        if n == 0 {
            return (Vec::new(), *self);
        }
        let item = (usize::from(self.width) / n) as u16;
        let children = (0..n)
            .map(|i| {
                let offset = item.saturating_mul(i as u16);
                Self::new(self.row, self.col.saturating_add(offset), item, self.height)
            })
            .collect();
        let used = item
            .saturating_mul(n.min(usize::from(u16::MAX)) as u16)
            .min(self.width);
        let leftover = Self::new(
            self.row,
            self.col.saturating_add(used),
            self.width - used,
            self.height,
        );
        (children, leftover)
    }
}

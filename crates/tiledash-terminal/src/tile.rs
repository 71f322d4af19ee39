//! The tile tree.
//!
//! A [`Tile`] is either a split, which divides its area among child tiles, or
//! a leaf that draws content through a [`Render`] implementation. Every tile
//! carries an optional title, a border flag and color overrides; colors that
//! are not overridden are inherited from the nearest ancestor that sets them.

use crate::measure;
use crate::surface::Surface;
use crate::widgets::symbols::border;
use std::any::Any;
use tiledash_core::{ColorError, ColorSlot, Rect, Rgb, StyleChain, TileColors};

/// Type-erased access to a concrete leaf.
pub trait AsAny: Any {
    /// `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;
    /// `self` as mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Content drawn inside a leaf tile.
///
/// `area` is what is left after the tile's border and title; it is never
/// empty. `style` resolves the tile's effective colors.
pub trait Render: AsAny + Send {
    /// Draw into `area`.
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>);

    /// Short name used in logs.
    fn kind(&self) -> &'static str;
}

/// Direction in which a split lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side, dividing the width (`HSplit`).
    Horizontal,
    /// Stacked top to bottom, dividing the height (`VSplit`).
    Vertical,
}

struct Split {
    orientation: Orientation,
    items: Vec<Tile>,
}

enum Body {
    Split(Split),
    Leaf(Box<dyn Render>),
}

/// A node of the dashboard layout.
pub struct Tile {
    title: Option<String>,
    border: bool,
    colors: TileColors,
    body: Body,
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Tile");
        s.field("kind", &self.kind())
            .field("title", &self.title)
            .field("border", &self.border)
            .field("colors", &self.colors);
        if let Body::Split(split) = &self.body {
            s.field("items", &split.items);
        }
        s.finish()
    }
}

impl<R: Render> From<R> for Tile {
    fn from(leaf: R) -> Self {
        Self::new(leaf)
    }
}

impl Tile {
    /// A bordered leaf tile.
    pub fn new(leaf: impl Render) -> Self {
        Self {
            title: None,
            border: true,
            colors: TileColors::new(),
            body: Body::Leaf(Box::new(leaf)),
        }
    }

    /// A borderless split with the given orientation.
    pub fn split(orientation: Orientation, items: impl IntoIterator<Item = Self>) -> Self {
        Self {
            title: None,
            border: false,
            colors: TileColors::new(),
            body: Body::Split(Split {
                orientation,
                items: items.into_iter().collect(),
            }),
        }
    }

    /// Children side by side.
    pub fn hsplit(items: impl IntoIterator<Item = Self>) -> Self {
        Self::split(Orientation::Horizontal, items)
    }

    /// Children stacked top to bottom.
    pub fn vsplit(items: impl IntoIterator<Item = Self>) -> Self {
        Self::split(Orientation::Vertical, items)
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Override the text color.
    #[must_use]
    pub fn with_text_color(mut self, color: Rgb) -> Self {
        self.colors.set(ColorSlot::Text, Some(color));
        self
    }

    /// Override the border color.
    #[must_use]
    pub fn with_border_color(mut self, color: Rgb) -> Self {
        self.colors.set(ColorSlot::Border, Some(color));
        self
    }

    /// Override the gradient high color.
    #[must_use]
    pub fn with_color_high(mut self, color: Rgb) -> Self {
        self.colors.set(ColorSlot::High, Some(color));
        self
    }

    /// Override the gradient low color.
    #[must_use]
    pub fn with_color_low(mut self, color: Rgb) -> Self {
        self.colors.set(ColorSlot::Low, Some(color));
        self
    }

    /// Title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Whether a border is drawn.
    pub const fn border(&self) -> bool {
        self.border
    }

    /// Enable or disable the border.
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// This tile's own color overrides.
    pub const fn colors(&self) -> &TileColors {
        &self.colors
    }

    /// Set or clear one override. `None` re-enables inheritance.
    pub fn set_color(&mut self, slot: ColorSlot, color: Option<Rgb>) {
        self.colors.set(slot, color);
    }

    /// Set or clear an override by slot name and color string.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidName`] for an unknown slot name and
    /// [`ColorError::InvalidFormat`] for an unparsable color. Nothing changes
    /// on error.
    pub fn set_color_by_name(&mut self, name: &str, value: Option<&str>) -> Result<(), ColorError> {
        let slot = ColorSlot::from_name(name)?;
        let color = value.map(Rgb::parse).transpose()?;
        self.colors.set(slot, color);
        Ok(())
    }

    /// Effective color for `slot` given the parent chain.
    pub fn resolve_color(&self, slot: ColorSlot, parent: Option<&StyleChain<'_>>) -> Rgb {
        StyleChain::new(&self.colors, parent).resolve(slot)
    }

    /// Effective color of the descendant at `path`, treating `self` as the root.
    ///
    /// `path` lists child indices from this tile down; an empty path is this
    /// tile. Returns `None` if the path leaves the tree.
    pub fn resolved_color(&self, path: &[usize], slot: ColorSlot) -> Option<Rgb> {
        self.resolve_along(path, slot, None)
    }

    fn resolve_along(
        &self,
        path: &[usize],
        slot: ColorSlot,
        parent: Option<&StyleChain<'_>>,
    ) -> Option<Rgb> {
        let chain = StyleChain::new(&self.colors, parent);
        match path.split_first() {
            None => Some(chain.resolve(slot)),
            Some((&index, rest)) => self.item(index)?.resolve_along(rest, slot, Some(&chain)),
        }
    }

    /// Store the neutral gray in every slot this tile leaves unset.
    ///
    /// Called on the root before rendering, so inheritance always ends at a
    /// concrete color.
    pub fn cache_root_defaults(&mut self) {
        self.colors.fill_unset(Rgb::DEFAULT_GRAY);
    }

    /// `"hsplit"`, `"vsplit"` or the leaf's kind.
    pub fn kind(&self) -> &'static str {
        match &self.body {
            Body::Split(split) => match split.orientation {
                Orientation::Horizontal => "hsplit",
                Orientation::Vertical => "vsplit",
            },
            Body::Leaf(leaf) => leaf.kind(),
        }
    }

    /// Split orientation, or `None` for a leaf.
    pub const fn orientation(&self) -> Option<Orientation> {
        match &self.body {
            Body::Split(split) => Some(split.orientation),
            Body::Leaf(_) => None,
        }
    }

    /// Children of a split; empty for a leaf.
    pub fn items(&self) -> &[Self] {
        match &self.body {
            Body::Split(split) => &split.items,
            Body::Leaf(_) => &[],
        }
    }

    /// Child at `index`.
    pub fn item(&self, index: usize) -> Option<&Self> {
        self.items().get(index)
    }

    /// Mutable child at `index`.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut Self> {
        match &mut self.body {
            Body::Split(split) => split.items.get_mut(index),
            Body::Leaf(_) => None,
        }
    }

    /// Descendant at `path` (child indices from this tile down).
    pub fn at(&self, path: &[usize]) -> Option<&Self> {
        path.iter().try_fold(self, |tile, &index| tile.item(index))
    }

    /// Mutable descendant at `path`.
    pub fn at_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        path.iter()
            .try_fold(self, |tile, &index| tile.item_mut(index))
    }

    /// Append a child to a split and return it.
    ///
    /// # Errors
    ///
    /// Leaves cannot hold children; the rejected child is handed back.
    pub fn push(&mut self, child: impl Into<Self>) -> Result<&mut Self, Self> {
        let child = child.into();
        match &mut self.body {
            Body::Split(split) => {
                split.items.push(child);
                let last = split.items.len() - 1;
                Ok(&mut split.items[last])
            }
            Body::Leaf(_) => Err(child),
        }
    }

    fn leaf(&self) -> Option<&dyn Render> {
        match &self.body {
            Body::Leaf(leaf) => Some(&**leaf),
            Body::Split(_) => None,
        }
    }

    /// The leaf content, if it is a `T`.
    pub fn content<T: Render>(&self) -> Option<&T> {
        self.leaf()?.as_any().downcast_ref::<T>()
    }

    /// Mutable leaf content, if it is a `T`.
    pub fn content_mut<T: Render>(&mut self) -> Option<&mut T> {
        match &mut self.body {
            Body::Leaf(leaf) => (**leaf).as_any_mut().downcast_mut::<T>(),
            Body::Split(_) => None,
        }
    }

    /// Draw this tile and everything below it into `area`.
    pub fn render(&self, surface: &mut dyn Surface, area: Rect, parent: Option<&StyleChain<'_>>) {
        let chain = StyleChain::new(&self.colors, parent);
        tracing::trace!(
            kind = self.kind(),
            row = area.row,
            col = area.col,
            width = area.width,
            height = area.height,
            "render tile"
        );
        let inner = self.draw_chrome(surface, area, &chain);

        match &self.body {
            Body::Leaf(leaf) => {
                if inner.is_empty() {
                    tracing::trace!(kind = leaf.kind(), "no room for content");
                } else {
                    leaf.render(surface, inner, &chain);
                }
            }
            Body::Split(split) => split.render(surface, inner, &chain),
        }
    }

    /// Draw border and title and return the area left for content.
    pub fn draw_chrome(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) -> Rect {
        if area.is_empty() {
            return area;
        }
        if self.border {
            return self.draw_border(surface, area, style);
        }
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => {
                let margin = title_margin(area.width, title);
                let line = format!("{}{title}", " ".repeat(margin));
                surface.set_fg(style.text());
                surface.move_to(area.row, area.col);
                surface.print(&measure::fit(&line, area.width));
                area.skip_rows(1)
            }
            _ => area,
        }
    }

    fn draw_border(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) -> Rect {
        if area.width < 2 || area.height < 2 {
            tracing::trace!(width = area.width, height = area.height, "too small for a border");
            return Rect::empty_at(area.row, area.col);
        }
        let inner_width = usize::from(area.width - 2);
        let right = area.col + area.width - 1;
        let bottom = area.row + area.height - 1;

        surface.set_fg(style.border());
        for row in area.row + 1..bottom {
            surface.move_to(row, area.col);
            surface.print(&border::VERTICAL.to_string());
            surface.move_to(row, right);
            surface.print(&border::VERTICAL.to_string());
        }

        surface.move_to(bottom, area.col);
        let mut edge = String::with_capacity((inner_width + 2) * 3);
        edge.push(border::BOTTOM_LEFT);
        edge.push_str(&measure::repeat(border::HORIZONTAL, inner_width));
        edge.push(border::BOTTOM_RIGHT);
        surface.print(&edge);

        surface.move_to(area.row, area.col);
        edge.clear();
        edge.push(border::TOP_LEFT);
        edge.push_str(&top_edge(self.title.as_deref(), area.width, inner_width));
        edge.push(border::TOP_RIGHT);
        surface.print(&edge);

        area.inset(1)
    }
}

/// Spacing around a title: one column per 20 spare columns.
fn title_margin(width: u16, title: &str) -> usize {
    let spare = i64::from(width) - measure::width(title) as i64;
    (spare / 20).max(0) as usize
}

/// Inside of the top border, exactly `inner_width` columns wide.
fn top_edge(title: Option<&str>, width: u16, inner_width: usize) -> String {
    let mut content = String::new();
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let margin = title_margin(width, title);
        content.push_str(&measure::repeat(border::HORIZONTAL, margin.saturating_sub(1)));
        content.push_str(&" ".repeat(margin));
        content.push_str(title);
        content.push_str(&" ".repeat(margin));
    }
    let (clipped, used) = measure::clip(&content, inner_width);
    let mut edge = clipped.to_string();
    edge.push_str(&measure::repeat(border::HORIZONTAL, inner_width - used));
    edge
}

impl Split {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        if self.items.is_empty() {
            return;
        }
        let (rects, leftover) = match self.orientation {
            Orientation::Vertical => area.split_rows(self.items.len()),
            Orientation::Horizontal => area.split_cols(self.items.len()),
        };
        for (item, rect) in self.items.iter().zip(rects) {
            item.render(surface, rect, Some(style));
        }
        fill(surface, leftover, style.text());
    }
}

/// Paint `area` with spaces in `color`.
pub(crate) fn fill(surface: &mut dyn Surface, area: Rect, color: Rgb) {
    if area.is_empty() {
        return;
    }
    let blank = " ".repeat(usize::from(area.width));
    surface.set_fg(color);
    for row in area.row..area.bottom() {
        surface.move_to(row, area.col);
        surface.print(&blank);
    }
}

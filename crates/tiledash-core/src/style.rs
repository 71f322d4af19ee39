//! Per-tile color overrides and their inheritance chain.
//!
//! A tile only stores the colors it overrides. Everything else is looked up
//! through its ancestors via a [`StyleChain`], which borrows each ancestor's
//! [`TileColors`] for the duration of a render pass.

use crate::color::Rgb;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// The four configurable color slots of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Text and filler glyphs
    Text,
    /// Border and title frame
    Border,
    /// Gradient start (top of a chart, start of a bar)
    High,
    /// Gradient end
    Low,
}

impl ColorSlot {
    /// Every slot, in declaration order.
    pub const ALL: [Self; 4] = [Self::Text, Self::Border, Self::High, Self::Low];

    /// Look up a slot by its configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidName`] for anything other than
    /// `text_color`, `border_color`, `color_high` or `color_low`.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "text_color" => Ok(Self::Text),
            "border_color" => Ok(Self::Border),
            "color_high" => Ok(Self::High),
            "color_low" => Ok(Self::Low),
            other => Err(ColorError::InvalidName(other.to_string())),
        }
    }

    /// Configuration name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text_color",
            Self::Border => "border_color",
            Self::High => "color_high",
            Self::Low => "color_low",
        }
    }
}

/// Explicit color overrides for one tile. `None` means "inherit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileColors {
    /// Text color
    pub text_color: Option<Rgb>,
    /// Border color
    pub border_color: Option<Rgb>,
    /// Gradient high color
    pub color_high: Option<Rgb>,
    /// Gradient low color
    pub color_low: Option<Rgb>,
}

impl TileColors {
    /// No overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text_color: None,
            border_color: None,
            color_high: None,
            color_low: None,
        }
    }

    /// Override for `slot`, if set.
    #[must_use]
    pub const fn get(&self, slot: ColorSlot) -> Option<Rgb> {
        match slot {
            ColorSlot::Text => self.text_color,
            ColorSlot::Border => self.border_color,
            ColorSlot::High => self.color_high,
            ColorSlot::Low => self.color_low,
        }
    }

    /// Set or clear the override for `slot`.
    pub fn set(&mut self, slot: ColorSlot, color: Option<Rgb>) {
        *self.slot_mut(slot) = color;
    }

    /// Store `color` in every slot that has no override.
    pub fn fill_unset(&mut self, color: Rgb) {
        for slot in ColorSlot::ALL {
            self.slot_mut(slot).get_or_insert(color);
        }
    }

    /// True if every slot has an override.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ColorSlot::ALL.iter().all(|&slot| self.get(slot).is_some())
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<Rgb> {
        match slot {
            ColorSlot::Text => &mut self.text_color,
            ColorSlot::Border => &mut self.border_color,
            ColorSlot::High => &mut self.color_high,
            ColorSlot::Low => &mut self.color_low,
        }
    }
}

/// A borrowed path from a tile up to the root.
///
/// Each link points at one tile's overrides and at its parent's link, so the
/// chain lives on the stack of the render pass and can never outlive or
/// cycle back into the tree.
#[derive(Debug, Clone, Copy)]
pub struct StyleChain<'a> {
    colors: &'a TileColors,
    parent: Option<&'a StyleChain<'a>>,
}

impl<'a> StyleChain<'a> {
    /// Chain for a root tile.
    #[must_use]
    pub const fn root(colors: &'a TileColors) -> Self {
        Self {
            colors,
            parent: None,
        }
    }

    /// Chain for a tile whose parent is `self`.
    #[must_use]
    pub const fn child(&'a self, colors: &'a TileColors) -> StyleChain<'a> {
        StyleChain {
            colors,
            parent: Some(self),
        }
    }

    /// Chain for `colors` below an optional parent.
    #[must_use]
    pub const fn new(colors: &'a TileColors, parent: Option<&'a StyleChain<'a>>) -> Self {
        Self { colors, parent }
    }

    /// This tile's own overrides.
    #[must_use]
    pub const fn colors(&self) -> &'a TileColors {
        self.colors
    }

    /// The parent link, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'a StyleChain<'a>> {
        self.parent
    }

    /// Effective color for `slot`: the nearest override walking up, else gray.
    #[must_use]
    pub fn resolve(&self, slot: ColorSlot) -> Rgb {
        let mut link = Some(self);
        while let Some(chain) = link {
            if let Some(color) = chain.colors.get(slot) {
                return color;
            }
            link = chain.parent;
        }
        Rgb::DEFAULT_GRAY
    }

    /// Resolved text color.
    #[must_use]
    pub fn text(&self) -> Rgb {
        self.resolve(ColorSlot::Text)
    }

    /// Resolved border color.
    #[must_use]
    pub fn border(&self) -> Rgb {
        self.resolve(ColorSlot::Border)
    }

    /// Resolved gradient high color.
    #[must_use]
    pub fn high(&self) -> Rgb {
        self.resolve(ColorSlot::High)
    }

    /// Resolved gradient low color.
    #[must_use]
    pub fn low(&self) -> Rgb {
        self.resolve(ColorSlot::Low)
    }
}

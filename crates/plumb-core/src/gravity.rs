//! Packed two-axis alignment keywords.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Mask for one axis sub-field.
const AXIS_MASK: u8 = 0b111;
/// Bit offset of the vertical sub-field.
const VERTICAL_SHIFT: u8 = 3;

/// Primary axis of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Children arranged left to right.
    Horizontal,
    /// Children arranged top to bottom.
    Vertical,
}

/// Declared directional alignment intent of an element.
///
/// Two independent 3-bit sub-fields packed into one byte: bits 0-2 hold the
/// horizontal alignment, bits 3-5 the vertical. Per axis the codes are
/// low = `0b01`, high = `0b10`, and center = `0b11`; center is exactly the
/// union of low and high, and no other combination is valid.
///
/// Reading or writing one axis never disturbs the other axis's bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Gravity {
    raw: u8,
}

impl Gravity {
    /// Horizontal low.
    pub const LEFT: Self = Self { raw: 0b01 };
    /// Horizontal high.
    pub const RIGHT: Self = Self { raw: 0b10 };
    /// Horizontal center, the union of [`Self::LEFT`] and [`Self::RIGHT`].
    pub const CENTER: Self = Self { raw: 0b11 };

    /// Vertical low.
    pub const TOP: Self = Self { raw: 0b01 << VERTICAL_SHIFT };
    /// Vertical high.
    pub const BOTTOM: Self = Self { raw: 0b10 << VERTICAL_SHIFT };
    /// Vertical center, the union of [`Self::TOP`] and [`Self::BOTTOM`].
    pub const MIDDLE: Self = Self { raw: 0b11 << VERTICAL_SHIFT };

    /// Reconstruct a gravity from its packed byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    /// The packed byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.raw
    }

    /// Decode a lowercase, space-delimited keyword string.
    ///
    /// The first recognized horizontal keyword (`left`, `center`, `right`)
    /// and the first recognized vertical keyword (`top`, `mid`, `middle`,
    /// `bottom`) found anywhere in the token sequence set their axis;
    /// unrecognized tokens are ignored. Axes with no match stay unset, so
    /// free-form input can never produce an invalid combination.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut gravity = Self::default();
        for token in text.split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "left" if !gravity.has_horizontal() => gravity.set_horizontal(Self::LEFT),
                "center" if !gravity.has_horizontal() => gravity.set_horizontal(Self::CENTER),
                "right" if !gravity.has_horizontal() => gravity.set_horizontal(Self::RIGHT),
                "top" if !gravity.has_vertical() => gravity.set_vertical(Self::TOP),
                "mid" | "middle" if !gravity.has_vertical() => gravity.set_vertical(Self::MIDDLE),
                "bottom" if !gravity.has_vertical() => gravity.set_vertical(Self::BOTTOM),
                _ => {}
            }
        }
        gravity
    }

    /// The horizontal sub-field, with vertical bits cleared.
    #[must_use]
    pub const fn horizontal(self) -> Self {
        Self {
            raw: self.raw & AXIS_MASK,
        }
    }

    /// Rewrite the horizontal sub-field, preserving the vertical bits exactly.
    pub fn set_horizontal(&mut self, value: Self) {
        self.raw = self.vertical().raw | (value.raw & AXIS_MASK);
    }

    /// The vertical sub-field, with horizontal bits cleared.
    #[must_use]
    pub const fn vertical(self) -> Self {
        Self {
            raw: self.raw & (AXIS_MASK << VERTICAL_SHIFT),
        }
    }

    /// Rewrite the vertical sub-field, preserving the horizontal bits exactly.
    pub fn set_vertical(&mut self, value: Self) {
        self.raw = self.horizontal().raw | (value.raw & (AXIS_MASK << VERTICAL_SHIFT));
    }

    /// True iff the horizontal sub-field is set.
    #[must_use]
    pub const fn has_horizontal(self) -> bool {
        self.raw & AXIS_MASK != 0
    }

    /// True iff the vertical sub-field is set.
    #[must_use]
    pub const fn has_vertical(self) -> bool {
        self.raw & (AXIS_MASK << VERTICAL_SHIFT) != 0
    }

    /// The sub-field for one axis.
    #[must_use]
    pub const fn along(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }
}

impl BitOr for Gravity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            raw: self.raw | rhs.raw,
        }
    }
}

impl BitOrAssign for Gravity {
    fn bitor_assign(&mut self, rhs: Self) {
        self.raw |= rhs.raw;
    }
}

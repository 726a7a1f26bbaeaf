// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Extent of an item along the primary scroll axis.
///
/// Built from a 2D frame via [`crate::ScrollAxis::item_extent`]. The bounds
/// are normalized on construction so that `min <= mid() <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemExtent {
    /// Leading edge of the item.
    pub min: f64,
    /// Trailing edge of the item.
    pub max: f64,
}

impl ItemExtent {
    /// Creates an extent covering `a..b`, swapping the bounds if needed.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Arithmetic midpoint of the extent.
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Distance between the leading and trailing edges.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies strictly between `min` and `max`.
    ///
    /// Offsets exactly on either edge are outside; an empty extent contains
    /// nothing.
    #[must_use]
    pub fn contains_strictly(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

/// Tolerances measured inward from the leading and trailing edges of the
/// first item.
///
/// Inside these slivers the snap keeps its previous state instead of
/// flipping. Built from [`kurbo::Insets`] via
/// [`crate::ScrollAxis::retractable_inset`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RetractableInset {
    /// Tolerance at the leading edge (top or left).
    pub leading: f64,
    /// Tolerance at the trailing edge (bottom or right).
    pub trailing: f64,
}

impl RetractableInset {
    /// No tolerance on either edge.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates an inset from leading and trailing tolerances.
    #[must_use]
    pub const fn new(leading: f64, trailing: f64) -> Self {
        Self { leading, trailing }
    }
}

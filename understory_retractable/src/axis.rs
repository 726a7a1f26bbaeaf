// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis and projection between 2D geometry and primary/cross pairs.
//!
//! The snap rules only ever look at one coordinate. Projecting onto
//! `(primary, cross)` up front keeps them identical for vertical and
//! horizontal scrolling; [`ScrollAxis::unproject`] restores the host's 2D
//! layout afterwards.

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::extent::{ItemExtent, RetractableInset};

/// Direction in which a scroll surface scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    /// Content scrolls along Y; the primary coordinate is `y`.
    #[default]
    Vertical,
    /// Content scrolls along X; the primary coordinate is `x`.
    Horizontal,
}

/// A 2D value split into its coordinate along a [`ScrollAxis`] and the
/// orthogonal one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPoint {
    /// Coordinate along the scroll axis.
    pub primary: f64,
    /// Coordinate across the scroll axis.
    pub cross: f64,
}

impl AxisPoint {
    /// Creates a new axis-relative point.
    #[must_use]
    pub const fn new(primary: f64, cross: f64) -> Self {
        Self { primary, cross }
    }
}

impl ScrollAxis {
    /// Returns the orthogonal axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Splits an offset into primary and cross coordinates.
    #[must_use]
    pub fn project(self, point: Point) -> AxisPoint {
        match self {
            Self::Vertical => AxisPoint::new(point.y, point.x),
            Self::Horizontal => AxisPoint::new(point.x, point.y),
        }
    }

    /// Splits a velocity into primary and cross components.
    #[must_use]
    pub fn project_vec(self, vec: Vec2) -> AxisPoint {
        self.project(vec.to_point())
    }

    /// Inverse of [`ScrollAxis::project`].
    #[must_use]
    pub fn unproject(self, point: AxisPoint) -> Point {
        match self {
            Self::Vertical => Point::new(point.cross, point.primary),
            Self::Horizontal => Point::new(point.primary, point.cross),
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub fn primary_of_size(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Returns `size` with its extent along this axis replaced by `primary`.
    #[must_use]
    pub fn with_primary_size(self, size: Size, primary: f64) -> Size {
        match self {
            Self::Vertical => Size::new(size.width, primary),
            Self::Horizontal => Size::new(primary, size.height),
        }
    }

    /// Extent of `frame` along this axis.
    #[must_use]
    pub fn item_extent(self, frame: Rect) -> ItemExtent {
        match self {
            Self::Vertical => ItemExtent::new(frame.y0, frame.y1),
            Self::Horizontal => ItemExtent::new(frame.x0, frame.x1),
        }
    }

    /// Picks the leading and trailing tolerances for this axis.
    ///
    /// Vertical uses `(top, bottom)`, horizontal uses `(left, right)`.
    #[must_use]
    pub fn retractable_inset(self, insets: Insets) -> RetractableInset {
        match self {
            Self::Vertical => RetractableInset::new(insets.y0, insets.y1),
            Self::Horizontal => RetractableInset::new(insets.x0, insets.x1),
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::axis::ScrollAxis;
use crate::resolver::{Resolution, RetractableResolver, RetractableResolverDebugInfo, SnapRequest};

/// Index of the item that can retract.
const FIRST_ITEM: usize = 0;

/// The layout engine that [`RetractableLayout`] wraps.
///
/// Implementations compute item geometry and their own scroll targets; the
/// wrapper only overrides [`BaseLayout::default_target_offset`] and
/// [`BaseLayout::default_content_size`].
pub trait BaseLayout {
    /// Target offset the engine would pick on its own when a gesture ends.
    ///
    /// The default keeps the proposed offset unchanged.
    fn default_target_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        let _ = velocity;
        proposed
    }

    /// Total scrollable content size as computed by the engine.
    fn default_content_size(&self) -> Size;

    /// Frame of the item at `index` in content coordinates, if laid out.
    fn item_frame(&self, index: usize) -> Option<Rect>;

    /// Size of the visible viewport of the scroll surface.
    fn viewport_size(&self) -> Size;

    /// Whether the host can answer the per-item geometry queries above.
    ///
    /// Returning `false` disables retractability the same way
    /// [`RetractableLayout::set_enabled`] does.
    fn supports_item_queries(&self) -> bool {
        true
    }
}

/// Settings the embedding application may change at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetractableConfig {
    /// Whether the first item snaps open or closed. Defaults to `true`.
    pub enabled: bool,
    /// Inset of the retractable area within the first item. Defaults to zero.
    pub retractable_area_inset: Insets,
}

impl Default for RetractableConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            retractable_area_inset: Insets::ZERO,
        }
    }
}

/// Wraps a [`BaseLayout`] so its first item rests fully revealed or fully
/// retracted after every scroll gesture.
///
/// Everything other than the target offset and the content size is read from
/// the base layout directly via [`RetractableLayout::base`].
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use understory_retractable::{BaseLayout, RetractableLayout};
///
/// // A 320x480 viewport over 5 rows of 100pt.
/// struct Rows;
///
/// impl BaseLayout for Rows {
///     fn default_content_size(&self) -> Size {
///         Size::new(320.0, 500.0)
///     }
///     fn item_frame(&self, index: usize) -> Option<Rect> {
///         let y = index as f64 * 100.0;
///         (index < 5).then(|| Rect::new(0.0, y, 320.0, y + 100.0))
///     }
///     fn viewport_size(&self) -> Size {
///         Size::new(320.0, 480.0)
///     }
/// }
///
/// let mut layout = RetractableLayout::new(Rows);
///
/// // Enough room to scroll the first row fully out of view.
/// assert_eq!(layout.content_size(), Size::new(320.0, 580.0));
///
/// // A slow release 30pt in settles back to fully revealed.
/// let target = layout.target_content_offset(Point::new(0.0, 30.0), Vec2::ZERO);
/// assert_eq!(target, Point::new(0.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct RetractableLayout<L> {
    base: L,
    resolver: RetractableResolver,
    config: RetractableConfig,
}

impl<L: BaseLayout> RetractableLayout<L> {
    /// Wraps `base` with the default configuration and a vertical axis.
    #[must_use]
    pub fn new(base: L) -> Self {
        Self::with_config(base, RetractableConfig::default())
    }

    /// Wraps `base` with the given configuration.
    #[must_use]
    pub fn with_config(base: L, config: RetractableConfig) -> Self {
        Self {
            base,
            resolver: RetractableResolver::new(),
            config,
        }
    }

    /// Returns the wrapped layout.
    #[must_use]
    pub fn base(&self) -> &L {
        &self.base
    }

    /// Returns the wrapped layout mutably.
    pub fn base_mut(&mut self) -> &mut L {
        &mut self.base
    }

    /// Unwraps the base layout.
    #[must_use]
    pub fn into_base(self) -> L {
        self.base
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> RetractableConfig {
        self.config
    }

    /// Replaces the configuration. Takes effect on the next call.
    pub fn set_config(&mut self, config: RetractableConfig) {
        self.config = config;
    }

    /// Returns `true` if the first item is retractable.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables or disables retractability of the first item.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Returns the inset of the retractable area within the first item.
    #[must_use]
    pub fn retractable_area_inset(&self) -> Insets {
        self.config.retractable_area_inset
    }

    /// Sets the inset of the retractable area within the first item.
    pub fn set_retractable_area_inset(&mut self, inset: Insets) {
        self.config.retractable_area_inset = inset;
    }

    /// Returns the scroll axis.
    #[must_use]
    pub fn scroll_axis(&self) -> ScrollAxis {
        self.resolver.axis()
    }

    /// Sets the scroll axis, forgetting the previous target if it changed.
    pub fn set_scroll_axis(&mut self, axis: ScrollAxis) {
        self.resolver.set_axis(axis);
    }

    /// Primary coordinate of the most recently returned target.
    #[must_use]
    pub fn last_target(&self) -> Option<f64> {
        self.resolver.last_target()
    }

    /// Target offset for a gesture ending at `proposed` with `velocity`.
    pub fn target_content_offset(&mut self, proposed: Point, velocity: Vec2) -> Point {
        self.resolve_target_content_offset(proposed, velocity).target
    }

    /// Same as [`RetractableLayout::target_content_offset`], also reporting
    /// which rule produced the target.
    pub fn resolve_target_content_offset(
        &mut self,
        proposed: Point,
        velocity: Vec2,
    ) -> Resolution {
        let request = SnapRequest {
            proposed,
            velocity,
            first_item_frame: self.active_first_item_frame(),
            inset: self.config.retractable_area_inset,
            enabled: self.config.enabled,
            supports_item_queries: self.base.supports_item_queries(),
        };
        let base = &self.base;
        self.resolver
            .resolve(&request, || base.default_target_offset(proposed, velocity))
    }

    /// Total scrollable content size.
    ///
    /// While retractability is active, the extent along the scroll axis is
    /// grown to at least the viewport plus the first item, so the first item
    /// can always be scrolled fully out of view.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let size = self.base.default_content_size();
        let Some(frame) = self.active_first_item_frame() else {
            return size;
        };
        let axis = self.resolver.axis();
        let required = axis.primary_of_size(self.base.viewport_size())
            + axis.item_extent(frame).length();
        let primary = axis.primary_of_size(size).max(required);
        axis.with_primary_size(size, primary)
    }

    /// Snapshot of the layout state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> RetractableLayoutDebugInfo {
        RetractableLayoutDebugInfo {
            config: self.config,
            supports_item_queries: self.base.supports_item_queries(),
            first_item_frame: self.base.item_frame(FIRST_ITEM),
            content_size: self.content_size(),
            resolver: self.resolver.debug_info(),
        }
    }

    fn active_first_item_frame(&self) -> Option<Rect> {
        if !self.config.enabled || !self.base.supports_item_queries() {
            return None;
        }
        self.base.item_frame(FIRST_ITEM)
    }
}

/// Debug snapshot of a [`RetractableLayout`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetractableLayoutDebugInfo {
    /// Current configuration.
    pub config: RetractableConfig,
    /// Whether the base layout answers per-item queries.
    pub supports_item_queries: bool,
    /// Frame of the first item as reported by the base layout.
    pub first_item_frame: Option<Rect>,
    /// Content size after the retractable adjustment.
    pub content_size: Size,
    /// State of the underlying resolver.
    pub resolver: RetractableResolverDebugInfo,
}

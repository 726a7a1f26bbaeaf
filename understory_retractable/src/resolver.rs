// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-target resolution for a retractable first item.
//!
//! ## Usage
//!
//! 1) When a scroll gesture ends, build a [`SnapRequest`] from the proposed
//!    resting offset, the release velocity, and the first item's frame.
//! 2) Call [`RetractableResolver::resolve`] with a closure producing the base
//!    layout's own target; it is only evaluated when the resolver passes
//!    through.
//! 3) Scroll to [`Resolution::target`].
//! 4) Call [`RetractableResolver::set_axis`] whenever the scroll direction
//!    changes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Insets, Point, Rect, Vec2};
//! use understory_retractable::{RetractableResolver, SnapRequest};
//!
//! let mut resolver = RetractableResolver::new();
//! let frame = Rect::new(0.0, 0.0, 320.0, 100.0);
//!
//! // Released 60pt into a 100pt header while flinging downward: retract.
//! let request = SnapRequest::new(Point::new(0.0, 60.0), Vec2::new(0.0, 5.0))
//!     .with_first_item_frame(Some(frame))
//!     .with_inset(Insets::new(0.0, 8.0, 0.0, 8.0));
//! let res = resolver.resolve(&request, || request.proposed);
//! assert_eq!(res.target, Point::new(0.0, 100.0));
//!
//! // Dragged back a little, still inside the trailing sliver: stay retracted.
//! let request = request.with_proposed(Point::new(0.0, 95.0));
//! let res = resolver.resolve(&request, || request.proposed);
//! assert_eq!(res.target, Point::new(0.0, 100.0));
//! ```

use kurbo::{Insets, Point, Rect, Vec2};

use crate::axis::{AxisPoint, ScrollAxis};
use crate::extent::{ItemExtent, RetractableInset};

/// Inputs for one snap resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapRequest {
    /// Offset the scroll surface would come to rest at on its own.
    pub proposed: Point,
    /// Scroll velocity at gesture end.
    pub velocity: Vec2,
    /// Frame of the first item, if it is laid out.
    pub first_item_frame: Option<Rect>,
    /// Retractable area inset of the first item.
    pub inset: Insets,
    /// Whether retractability is enabled.
    pub enabled: bool,
    /// Whether the host supports the per-item geometry queries this needs.
    pub supports_item_queries: bool,
}

impl SnapRequest {
    /// Creates an enabled request with no first-item frame and a zero inset.
    #[must_use]
    pub fn new(proposed: Point, velocity: Vec2) -> Self {
        Self {
            proposed,
            velocity,
            first_item_frame: None,
            inset: Insets::ZERO,
            enabled: true,
            supports_item_queries: true,
        }
    }

    /// Replaces the proposed offset.
    #[must_use]
    pub fn with_proposed(mut self, proposed: Point) -> Self {
        self.proposed = proposed;
        self
    }

    /// Replaces the velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the first item's frame.
    #[must_use]
    pub fn with_first_item_frame(mut self, frame: Option<Rect>) -> Self {
        self.first_item_frame = frame;
        self
    }

    /// Sets the retractable area inset.
    #[must_use]
    pub fn with_inset(mut self, inset: Insets) -> Self {
        self.inset = inset;
        self
    }

    /// Enables or disables retractability for this request.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether the host supports per-item geometry queries.
    #[must_use]
    pub fn with_item_queries(mut self, supported: bool) -> Self {
        self.supports_item_queries = supported;
        self
    }
}

/// Why a resolution fell back to the base layout's target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassthroughReason {
    /// Retractability is switched off.
    Disabled,
    /// The host cannot answer per-item geometry queries.
    ItemQueriesUnsupported,
    /// The first item has no frame (for example, the list is empty).
    NoFirstItem,
    /// The proposed offset is on or outside the first item's edges.
    OutsideRetractableZone,
}

/// Which rule chose between revealing and retracting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapCause {
    /// Moving back toward the start, but still within the trailing inset.
    TrailingTolerance,
    /// Moving toward the end, but still within the leading inset.
    LeadingTolerance,
    /// Followed the direction of travel relative to the previous target.
    Direction,
    /// No previous target; followed the sign of the velocity.
    Velocity,
    /// No previous target and zero velocity; picked the nearer half.
    Midpoint,
}

/// Outcome of a resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapDecision {
    /// The base layout's target was used unchanged.
    Passthrough(PassthroughReason),
    /// Snapped to the first item's leading edge (fully shown).
    Reveal(SnapCause),
    /// Snapped to the first item's trailing edge (fully hidden).
    Retract(SnapCause),
}

impl SnapDecision {
    /// Returns `true` if the resolver replaced the base layout's target.
    #[must_use]
    pub fn is_snap(self) -> bool {
        !matches!(self, Self::Passthrough(_))
    }
}

/// Target offset together with the decision that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Offset to scroll to.
    pub target: Point,
    /// Rule that produced `target`.
    pub decision: SnapDecision,
}

/// Decides where a scroll gesture comes to rest so the first item ends
/// either fully revealed or fully retracted.
///
/// The resolver remembers the primary coordinate of the last target it
/// returned and uses it as hysteresis for the next decision. The memory is
/// cleared whenever the axis changes.
#[derive(Clone, Debug, Default)]
pub struct RetractableResolver {
    axis: ScrollAxis,
    last_target: Option<f64>,
}

impl RetractableResolver {
    /// Creates a vertical resolver with no previous target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver for the given axis with no previous target.
    #[must_use]
    pub fn with_axis(axis: ScrollAxis) -> Self {
        Self {
            axis,
            last_target: None,
        }
    }

    /// Returns the current scroll axis.
    #[must_use]
    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Sets the scroll axis.
    ///
    /// Switching to a different axis forgets the previous target, so the next
    /// in-zone resolution falls back to the velocity rule.
    pub fn set_axis(&mut self, axis: ScrollAxis) {
        if self.axis != axis {
            self.axis = axis;
            self.last_target = None;
        }
    }

    /// Primary coordinate of the most recently returned target.
    #[must_use]
    pub fn last_target(&self) -> Option<f64> {
        self.last_target
    }

    /// Forgets the previous target.
    pub fn forget_last_target(&mut self) {
        self.last_target = None;
    }

    /// Resolves the target offset for `request`.
    ///
    /// `fallback` computes the base layout's target and is only called when
    /// the result is a [`SnapDecision::Passthrough`]. The primary coordinate
    /// of the returned target is remembered in every case.
    pub fn resolve(
        &mut self,
        request: &SnapRequest,
        fallback: impl FnOnce() -> Point,
    ) -> Resolution {
        debug_assert!(
            request.proposed.is_finite(),
            "proposed offset must be finite"
        );
        debug_assert!(request.velocity.is_finite(), "velocity must be finite");

        if !request.enabled {
            return self.pass_through(PassthroughReason::Disabled, fallback);
        }
        if !request.supports_item_queries {
            return self.pass_through(PassthroughReason::ItemQueriesUnsupported, fallback);
        }
        let Some(frame) = request.first_item_frame else {
            return self.pass_through(PassthroughReason::NoFirstItem, fallback);
        };

        let proposed = self.axis.project(request.proposed);
        let velocity = self.axis.project_vec(request.velocity);
        let extent = self.axis.item_extent(frame);
        let inset = self.axis.retractable_inset(request.inset);

        if !extent.contains_strictly(proposed.primary) {
            return self.pass_through(PassthroughReason::OutsideRetractableZone, fallback);
        }

        let decision = match self.last_target {
            Some(last) => decide_with_history(last, proposed.primary, extent, inset),
            None => decide_from_velocity(velocity.primary, proposed.primary, extent),
        };
        let primary = if matches!(decision, SnapDecision::Retract(_)) {
            extent.max
        } else {
            extent.min
        };

        self.last_target = Some(primary);
        Resolution {
            target: self.axis.unproject(AxisPoint::new(primary, proposed.cross)),
            decision,
        }
    }

    /// Snapshot of the resolver state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> RetractableResolverDebugInfo {
        RetractableResolverDebugInfo {
            axis: self.axis,
            last_target: self.last_target,
        }
    }

    fn pass_through(
        &mut self,
        reason: PassthroughReason,
        fallback: impl FnOnce() -> Point,
    ) -> Resolution {
        let target = fallback();
        self.last_target = Some(self.axis.project(target).primary);
        Resolution {
            target,
            decision: SnapDecision::Passthrough(reason),
        }
    }
}

fn decide_with_history(
    last: f64,
    proposed: f64,
    extent: ItemExtent,
    inset: RetractableInset,
) -> SnapDecision {
    if last > proposed {
        if proposed > extent.max - inset.trailing {
            SnapDecision::Retract(SnapCause::TrailingTolerance)
        } else {
            SnapDecision::Reveal(SnapCause::Direction)
        }
    } else if proposed < inset.leading {
        // Compared against the raw inset, not `extent.min + inset.leading`.
        SnapDecision::Reveal(SnapCause::LeadingTolerance)
    } else {
        SnapDecision::Retract(SnapCause::Direction)
    }
}

fn decide_from_velocity(velocity: f64, proposed: f64, extent: ItemExtent) -> SnapDecision {
    if velocity > 0.0 {
        SnapDecision::Retract(SnapCause::Velocity)
    } else if velocity < 0.0 {
        SnapDecision::Reveal(SnapCause::Velocity)
    } else if proposed > extent.mid() {
        SnapDecision::Retract(SnapCause::Midpoint)
    } else {
        SnapDecision::Reveal(SnapCause::Midpoint)
    }
}

/// Debug snapshot of a [`RetractableResolver`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetractableResolverDebugInfo {
    /// Current scroll axis.
    pub axis: ScrollAxis,
    /// Primary coordinate of the last returned target, if any.
    pub last_target: Option<f64>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Vec2};

    use super::{
        PassthroughReason, RetractableResolver, SnapCause, SnapDecision, SnapRequest,
    };
    use crate::axis::ScrollAxis;

    fn header_request(proposed_y: f64, velocity_y: f64) -> SnapRequest {
        SnapRequest::new(Point::new(0.0, proposed_y), Vec2::new(0.0, velocity_y))
            .with_first_item_frame(Some(Rect::new(0.0, 0.0, 320.0, 100.0)))
            .with_inset(Insets::new(0.0, 8.0, 0.0, 8.0))
    }

    fn resolve(resolver: &mut RetractableResolver, request: &SnapRequest) -> (Point, SnapDecision) {
        let res = resolver.resolve(request, || request.proposed);
        (res.target, res.decision)
    }

    #[test]
    fn positive_velocity_retracts_without_history() {
        let mut r = RetractableResolver::new();
        let (target, decision) = resolve(&mut r, &header_request(60.0, 5.0));
        assert_eq!(target, Point::new(0.0, 100.0));
        assert_eq!(decision, SnapDecision::Retract(SnapCause::Velocity));
        assert_eq!(r.last_target(), Some(100.0));
    }

    #[test]
    fn negative_velocity_reveals_without_history() {
        let mut r = RetractableResolver::new();
        let request = header_request(60.0, 5.0).with_velocity(Vec2::new(3.0, -5.0));
        let (target, decision) = resolve(&mut r, &request);
        assert_eq!(target, Point::new(0.0, 0.0));
        assert_eq!(decision, SnapDecision::Reveal(SnapCause::Velocity));
    }

    #[test]
    fn zero_velocity_uses_midpoint() {
        let mut r = RetractableResolver::new();
        let (target, decision) = resolve(&mut r, &header_request(51.0, 0.0));
        assert_eq!(target.y, 100.0);
        assert_eq!(decision, SnapDecision::Retract(SnapCause::Midpoint));

        r.forget_last_target();
        let (target, decision) = resolve(&mut r, &header_request(50.0, 0.0));
        assert_eq!(target.y, 0.0, "exact midpoint reveals");
        assert_eq!(decision, SnapDecision::Reveal(SnapCause::Midpoint));
    }

    #[test]
    fn trailing_tolerance_keeps_item_retracted() {
        let mut r = RetractableResolver::new();
        resolve(&mut r, &header_request(60.0, 5.0));
        let (target, decision) = resolve(&mut r, &header_request(95.0, -1.0));
        assert_eq!(target, Point::new(0.0, 100.0));
        assert_eq!(decision, SnapDecision::Retract(SnapCause::TrailingTolerance));
    }

    #[test]
    fn moving_back_past_tolerance_reveals() {
        let mut r = RetractableResolver::new();
        resolve(&mut r, &header_request(60.0, 5.0));
        let (target, decision) = resolve(&mut r, &header_request(50.0, 3.0));
        assert_eq!(target, Point::new(0.0, 0.0));
        assert_eq!(decision, SnapDecision::Reveal(SnapCause::Direction));
    }

    #[test]
    fn leading_tolerance_keeps_item_revealed() {
        let mut r = RetractableResolver::new();
        resolve(&mut r, &header_request(60.0, -5.0));
        assert_eq!(r.last_target(), Some(0.0));

        let (target, decision) = resolve(&mut r, &header_request(5.0, 1.0));
        assert_eq!(target.y, 0.0);
        assert_eq!(decision, SnapDecision::Reveal(SnapCause::LeadingTolerance));

        let (target, decision) = resolve(&mut r, &header_request(30.0, -1.0));
        assert_eq!(target.y, 100.0);
        assert_eq!(decision, SnapDecision::Retract(SnapCause::Direction));
    }

    #[test]
    fn leading_tolerance_is_compared_to_raw_inset() {
        // The first item starts at 50, so the leading sliver check against 8
        // never fires and moving forward always retracts.
        let mut r = RetractableResolver::new();
        let request = SnapRequest::new(Point::new(0.0, 55.0), Vec2::ZERO)
            .with_first_item_frame(Some(Rect::new(0.0, 50.0, 320.0, 150.0)))
            .with_inset(Insets::new(0.0, 8.0, 0.0, 8.0));
        r.resolve(&request, || Point::new(0.0, 50.0));
        let res = r.resolve(&request, || request.proposed);
        assert_eq!(res.decision, SnapDecision::Retract(SnapCause::Direction));
        assert_eq!(res.target.y, 150.0);
    }

    #[test]
    fn edges_pass_through() {
        let mut r = RetractableResolver::new();
        for y in [0.0, 100.0, -20.0, 150.0] {
            let (target, decision) = resolve(&mut r, &header_request(y, 5.0));
            assert_eq!(target.y, y);
            assert_eq!(
                decision,
                SnapDecision::Passthrough(PassthroughReason::OutsideRetractableZone)
            );
            assert_eq!(r.last_target(), Some(y));
        }
    }

    #[test]
    fn passthrough_order_and_recording() {
        let mut r = RetractableResolver::new();
        let request = header_request(60.0, 5.0)
            .with_enabled(false)
            .with_item_queries(false)
            .with_first_item_frame(None);
        let res = r.resolve(&request, || Point::new(0.0, 42.0));
        assert_eq!(res.target, Point::new(0.0, 42.0));
        assert_eq!(
            res.decision,
            SnapDecision::Passthrough(PassthroughReason::Disabled)
        );
        assert_eq!(r.last_target(), Some(42.0));

        let res = r.resolve(&request.with_enabled(true), || request.proposed);
        assert_eq!(
            res.decision,
            SnapDecision::Passthrough(PassthroughReason::ItemQueriesUnsupported)
        );

        let res = r.resolve(
            &request.with_enabled(true).with_item_queries(true),
            || request.proposed,
        );
        assert_eq!(
            res.decision,
            SnapDecision::Passthrough(PassthroughReason::NoFirstItem)
        );
        assert!(!res.decision.is_snap());
    }

    #[test]
    fn fallback_is_not_called_when_snapping() {
        let mut r = RetractableResolver::new();
        let res = r.resolve(&header_request(60.0, 5.0), || {
            panic!("fallback must not run for an in-zone snap")
        });
        assert!(res.decision.is_snap());
    }

    #[test]
    fn axis_change_clears_history_but_same_axis_does_not() {
        let mut r = RetractableResolver::new();
        resolve(&mut r, &header_request(60.0, 5.0));
        r.set_axis(ScrollAxis::Vertical);
        assert_eq!(r.last_target(), Some(100.0));

        r.set_axis(ScrollAxis::Horizontal);
        assert_eq!(r.last_target(), None);
        assert_eq!(
            r.debug_info().axis,
            ScrollAxis::Horizontal,
            "axis is reported in the snapshot"
        );
    }

    #[test]
    fn horizontal_axis_uses_x_and_left_right_insets() {
        let mut r = RetractableResolver::with_axis(ScrollAxis::Horizontal);
        let request = SnapRequest::new(Point::new(60.0, 7.0), Vec2::new(5.0, -100.0))
            .with_first_item_frame(Some(Rect::new(0.0, 0.0, 100.0, 480.0)))
            .with_inset(Insets::new(8.0, 0.0, 8.0, 0.0));
        let res = r.resolve(&request, || request.proposed);
        assert_eq!(res.target, Point::new(100.0, 7.0));

        let res = r.resolve(&request.with_proposed(Point::new(95.0, 7.0)), || {
            request.proposed
        });
        assert_eq!(res.target, Point::new(100.0, 7.0));
        assert_eq!(
            res.decision,
            SnapDecision::Retract(SnapCause::TrailingTolerance)
        );
    }
}

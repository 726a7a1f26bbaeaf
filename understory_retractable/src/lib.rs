// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_retractable --heading-base-level=0

//! Understory Retractable: snap policy for a retractable first item.
//!
//! Lists and grids often lead with a search bar or header that should either
//! be fully visible or scrolled fully out of view, never left half-shown after
//! a fling. This crate decides where a scroll gesture comes to rest so that
//! the first item ends up in one of those two states.
//!
//! The core concepts are:
//!
//! - [`ScrollAxis`] and [`AxisPoint`]: project 2D offsets onto the scroll axis
//!   and back, so the snap rules are written once for both directions.
//! - [`RetractableResolver`]: given a proposed resting offset, the release
//!   velocity and the first item's frame, picks the leading or trailing edge
//!   of the first item. It remembers its previous target and uses it as
//!   hysteresis; the memory is cleared when the axis changes.
//! - [`BaseLayout`] and [`RetractableLayout`]: wrap an existing layout engine,
//!   overriding only its target offset and content size computations.
//!
//! Every result carries a [`SnapDecision`] explaining which rule produced it,
//! and both the resolver and the layout expose a `debug_info` snapshot.
//!
//! This crate deliberately does **not** compute item geometry. Host frameworks
//! are responsible for:
//!
//! - Laying out items and reporting the first item's frame.
//! - Calling [`RetractableLayout::target_content_offset`] when a scroll
//!   gesture ends and animating to the result.
//! - Sizing the scroll surface with [`RetractableLayout::content_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Point, Rect, Size, Vec2};
//! use understory_retractable::{BaseLayout, RetractableLayout, ScrollAxis};
//!
//! // A search bar of 56pt above 20 rows of 44pt.
//! struct SearchList;
//!
//! impl BaseLayout for SearchList {
//!     fn default_content_size(&self) -> Size {
//!         Size::new(375.0, 56.0 + 20.0 * 44.0)
//!     }
//!     fn item_frame(&self, index: usize) -> Option<Rect> {
//!         match index {
//!             0 => Some(Rect::new(0.0, 0.0, 375.0, 56.0)),
//!             _ => None,
//!         }
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(375.0, 667.0)
//!     }
//! }
//!
//! let mut layout = RetractableLayout::new(SearchList);
//! layout.set_retractable_area_inset(Insets::new(0.0, 8.0, 0.0, 8.0));
//! assert_eq!(layout.scroll_axis(), ScrollAxis::Vertical);
//!
//! // Flung upward 20pt into the search bar: hide it completely.
//! let target = layout.target_content_offset(Point::new(0.0, 20.0), Vec2::new(0.0, 1.5));
//! assert_eq!(target, Point::new(0.0, 56.0));
//!
//! // Past the search bar the base layout's target is used as is.
//! let target = layout.target_content_offset(Point::new(0.0, 300.0), Vec2::new(0.0, 1.5));
//! assert_eq!(target, Point::new(0.0, 300.0));
//! ```
//!
//! All offsets and frames live in the scroll surface's content coordinates and
//! are expected to be finite. This crate is `no_std`.

#![no_std]

mod axis;
mod extent;
mod layout;
mod resolver;

pub use axis::{AxisPoint, ScrollAxis};
pub use extent::{ItemExtent, RetractableInset};
pub use layout::{BaseLayout, RetractableConfig, RetractableLayout, RetractableLayoutDebugInfo};
pub use resolver::{
    PassthroughReason, Resolution, RetractableResolver, RetractableResolverDebugInfo, SnapCause,
    SnapDecision, SnapRequest,
};

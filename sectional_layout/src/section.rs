// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved layout description consumed by a rendering surface.

use core::num::NonZeroUsize;

use kurbo::{Insets, Vec2};
use smallvec::{SmallVec, smallvec};

use crate::SizeSpec;

/// Arrangement axis of a group's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children are laid out side by side.
    Horizontal,
    /// Children are stacked top to bottom.
    Vertical,
}

/// The atomic layout unit, typically one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpec {
    /// Intended size of the item.
    pub size: SizeSpec,
}

impl ItemSpec {
    /// Creates an item of the given size.
    #[must_use]
    pub const fn new(size: SizeSpec) -> Self {
        Self { size }
    }
}

/// A positioned container of items within a section.
///
/// `items` is the group's child template; `repeat` says how many times the
/// template is instantiated along `axis` (always 1 for horizontal groups
/// here, N for vertical clusters).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    /// Intended size of the group.
    pub size: SizeSpec,
    /// Arrangement axis of the children.
    pub axis: Axis,
    /// Ordered child items forming the group's template.
    pub items: SmallVec<[ItemSpec; 1]>,
    /// How many times the template repeats along `axis`.
    pub repeat: NonZeroUsize,
    /// Fixed spacing between consecutive items, if any.
    pub inter_item_spacing: Option<f64>,
}

impl GroupSpec {
    /// A horizontal group holding a single run of `items`.
    #[must_use]
    pub fn horizontal(size: SizeSpec, items: SmallVec<[ItemSpec; 1]>) -> Self {
        Self {
            size,
            axis: Axis::Horizontal,
            items,
            repeat: NonZeroUsize::MIN,
            inter_item_spacing: None,
        }
    }

    /// A vertical group repeating `item` `count` times with fixed `spacing`.
    #[must_use]
    pub fn vertical(size: SizeSpec, item: ItemSpec, count: NonZeroUsize, spacing: f64) -> Self {
        Self {
            size,
            axis: Axis::Vertical,
            items: smallvec![item],
            repeat: count,
            inter_item_spacing: Some(spacing),
        }
    }

    /// Total number of items instantiated per group: the template length
    /// times the repeat count.
    #[must_use]
    pub fn item_total(&self) -> usize {
        self.items.len() * self.repeat.get()
    }
}

/// Anchor edge for a boundary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Anchored above the section's content.
    Top,
}

/// A boundary title strip anchored to a section edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderSpec {
    /// Intended size of the header.
    pub size: SizeSpec,
    /// Edge the header is anchored to.
    pub anchor: Anchor,
    /// Absolute offset from the anchored edge.
    pub offset: Vec2,
}

/// How a section scrolls relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// The section scrolls orthogonally to its container, snapping one group
    /// per page.
    Paged,
    /// The section scrolls together with its container.
    Contiguous,
}

/// The fully resolved layout for one section.
///
/// Produced on demand by [`resolve`](crate::resolve), consumed immediately by
/// the rendering surface, and discarded. It is never mutated after creation
/// and never reused across container geometry changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    /// The section's group template.
    pub group: GroupSpec,
    /// Scrolling behavior of the section.
    pub scroll: ScrollBehavior,
    /// Fixed spacing between consecutive groups; meaningful for contiguous
    /// sections.
    pub inter_group_spacing: f64,
    /// Resolved content insets. `x0`/`x1` are the leading/trailing lengths,
    /// `y0`/`y1` top/bottom.
    pub content_insets: Insets,
    /// The section's title strip, if it displays one.
    pub header: Option<HeaderSpec>,
}

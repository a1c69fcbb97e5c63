// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section archetypes and their validated configuration.
//!
//! A [`SectionKind`] is a closed set of three layout archetypes. Each kind
//! owns its width-ratio constants and is validated at construction, so a
//! kind that exists always produces a well-formed layout; resolution itself
//! has no error path.

use core::fmt;
use core::num::NonZeroUsize;

use crate::{LayoutEnvironment, SectionSpec};

/// Mean of the item and group width ratios: the fraction of the container's
/// width the section's content effectively occupies.
#[must_use]
pub fn content_width_ratio(item_width_ratio: f64, group_width_ratio: f64) -> f64 {
    (item_width_ratio + group_width_ratio) / 2.0
}

/// Fraction of the container's width left as the leading (and trailing)
/// inset: `1 - content_width_ratio`.
///
/// Non-negative for any pair of ratios in `(0, 1]`, which is exactly the
/// range the kind constructors accept.
#[must_use]
pub fn inset_leading_ratio(item_width_ratio: f64, group_width_ratio: f64) -> f64 {
    1.0 - content_width_ratio(item_width_ratio, group_width_ratio)
}

/// Rejected section-kind configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A width ratio was outside `(0, 1]` or not finite.
    RatioOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A spacing, inset, or height was negative or not finite.
    InvalidLength {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatioOutOfRange { name, value } => {
                write!(f, "{name} must lie in (0, 1]; got {value}")
            }
            Self::InvalidLength { name, value } => {
                write!(f, "{name} must be finite and non-negative; got {value}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn ratio(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(ConfigError::RatioOutOfRange { name, value })
    }
}

fn length(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidLength { name, value })
    }
}

/// Wide paged cards: one full-height item per group, one group per page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryKind {
    item_width_ratio: f64,
    group_width_ratio: f64,
    vertical_insets: f64,
    content_height: f64,
}

impl GalleryKind {
    /// Creates a gallery kind.
    ///
    /// # Errors
    ///
    /// Width ratios must lie in `(0, 1]`; `vertical_insets` and
    /// `content_height` must be finite and non-negative.
    pub fn new(
        item_width_ratio: f64,
        group_width_ratio: f64,
        vertical_insets: f64,
        content_height: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            item_width_ratio: ratio("item_width_ratio", item_width_ratio)?,
            group_width_ratio: ratio("group_width_ratio", group_width_ratio)?,
            vertical_insets: length("vertical_insets", vertical_insets)?,
            content_height: length("content_height", content_height)?,
        })
    }

    /// Width of each card as a fraction of the container's width.
    #[must_use]
    pub const fn item_width_ratio(&self) -> f64 {
        self.item_width_ratio
    }

    /// Width of each page's group as a fraction of the container's width.
    #[must_use]
    pub const fn group_width_ratio(&self) -> f64 {
        self.group_width_ratio
    }

    /// Fixed top and bottom content insets.
    #[must_use]
    pub const fn vertical_insets(&self) -> f64 {
        self.vertical_insets
    }

    /// Estimated height of the gallery's content.
    #[must_use]
    pub const fn content_height(&self) -> f64 {
        self.content_height
    }
}

/// Paged clusters of vertically stacked items under a title strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterKind {
    item_width_ratio: f64,
    group_width_ratio: f64,
    vertical_insets: f64,
    item_count: NonZeroUsize,
    inter_item_spacing: f64,
}

impl ClusterKind {
    /// Self-sizing height hint for each item in the cluster.
    pub const ITEM_HEIGHT_ESTIMATE: f64 = 100.0;
    /// Fixed height of each cluster group.
    pub const GROUP_HEIGHT: f64 = 300.0;
    /// Fixed height of the title strip above the section.
    pub const HEADER_HEIGHT: f64 = 44.0;

    /// Creates a cluster kind stacking `item_count` items per page.
    ///
    /// # Errors
    ///
    /// Width ratios must lie in `(0, 1]`; `vertical_insets` and
    /// `inter_item_spacing` must be finite and non-negative.
    pub fn new(
        item_width_ratio: f64,
        group_width_ratio: f64,
        vertical_insets: f64,
        item_count: NonZeroUsize,
        inter_item_spacing: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            item_width_ratio: ratio("item_width_ratio", item_width_ratio)?,
            group_width_ratio: ratio("group_width_ratio", group_width_ratio)?,
            vertical_insets: length("vertical_insets", vertical_insets)?,
            item_count,
            inter_item_spacing: length("inter_item_spacing", inter_item_spacing)?,
        })
    }

    /// Width of each stacked item as a fraction of the container's width.
    #[must_use]
    pub const fn item_width_ratio(&self) -> f64 {
        self.item_width_ratio
    }

    /// Width of each page's group as a fraction of the container's width.
    #[must_use]
    pub const fn group_width_ratio(&self) -> f64 {
        self.group_width_ratio
    }

    /// Fixed top and bottom content insets.
    #[must_use]
    pub const fn vertical_insets(&self) -> f64 {
        self.vertical_insets
    }

    /// Number of items stacked in each group.
    #[must_use]
    pub const fn item_count(&self) -> NonZeroUsize {
        self.item_count
    }

    /// Fixed spacing between consecutive stacked items.
    #[must_use]
    pub const fn inter_item_spacing(&self) -> f64 {
        self.inter_item_spacing
    }
}

/// Contiguous single-column rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListKind {
    item_width_ratio: f64,
    group_width_ratio: f64,
    vertical_insets: f64,
}

impl ListKind {
    /// Fixed height of each row.
    pub const ROW_HEIGHT: f64 = 44.0;
    /// Fixed spacing between consecutive rows.
    pub const INTER_GROUP_SPACING: f64 = 10.0;

    /// Creates a list kind.
    ///
    /// The width ratios only drive the shared inset rule; list rows
    /// themselves span the full content width.
    ///
    /// # Errors
    ///
    /// Width ratios must lie in `(0, 1]`; `vertical_insets` must be finite
    /// and non-negative.
    pub fn new(
        item_width_ratio: f64,
        group_width_ratio: f64,
        vertical_insets: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            item_width_ratio: ratio("item_width_ratio", item_width_ratio)?,
            group_width_ratio: ratio("group_width_ratio", group_width_ratio)?,
            vertical_insets: length("vertical_insets", vertical_insets)?,
        })
    }

    /// Item width ratio used by the shared inset rule.
    #[must_use]
    pub const fn item_width_ratio(&self) -> f64 {
        self.item_width_ratio
    }

    /// Group width ratio used by the shared inset rule.
    #[must_use]
    pub const fn group_width_ratio(&self) -> f64 {
        self.group_width_ratio
    }

    /// Fixed top and bottom content insets.
    #[must_use]
    pub const fn vertical_insets(&self) -> f64 {
        self.vertical_insets
    }
}

/// A closed set of section layout archetypes.
///
/// Hosts declare the ordered sequence of kinds for a screen; each kind is
/// resolved independently against the current [`LayoutEnvironment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionKind {
    /// Wide paged cards.
    Gallery(GalleryKind),
    /// Paged clusters of stacked items with a title strip.
    Cluster(ClusterKind),
    /// Contiguous single-column rows.
    List(ListKind),
}

impl SectionKind {
    /// Item width ratio of the underlying kind.
    #[must_use]
    pub const fn item_width_ratio(&self) -> f64 {
        match self {
            Self::Gallery(kind) => kind.item_width_ratio,
            Self::Cluster(kind) => kind.item_width_ratio,
            Self::List(kind) => kind.item_width_ratio,
        }
    }

    /// Group width ratio of the underlying kind.
    #[must_use]
    pub const fn group_width_ratio(&self) -> f64 {
        match self {
            Self::Gallery(kind) => kind.group_width_ratio,
            Self::Cluster(kind) => kind.group_width_ratio,
            Self::List(kind) => kind.group_width_ratio,
        }
    }

    /// Fixed top and bottom content insets of the underlying kind.
    #[must_use]
    pub const fn vertical_insets(&self) -> f64 {
        match self {
            Self::Gallery(kind) => kind.vertical_insets,
            Self::Cluster(kind) => kind.vertical_insets,
            Self::List(kind) => kind.vertical_insets,
        }
    }

    /// Fraction of the container's width left as this kind's leading inset.
    #[must_use]
    pub fn inset_leading_ratio(&self) -> f64 {
        inset_leading_ratio(self.item_width_ratio(), self.group_width_ratio())
    }

    /// Resolves this kind against `env`. See [`resolve`](crate::resolve).
    #[must_use]
    pub fn resolve(&self, env: &LayoutEnvironment) -> SectionSpec {
        crate::resolve(self, env)
    }
}

impl From<GalleryKind> for SectionKind {
    fn from(kind: GalleryKind) -> Self {
        Self::Gallery(kind)
    }
}

impl From<ClusterKind> for SectionKind {
    fn from(kind: ClusterKind) -> Self {
        Self::Cluster(kind)
    }
}

impl From<ListKind> for SectionKind {
    fn from(kind: ListKind) -> Self {
        Self::List(kind)
    }
}

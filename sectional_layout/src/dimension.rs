// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sizing vocabulary for items and groups.

/// A sizing value for one axis of an item or group.
///
/// Fractional variants are ratios of the resolving container's corresponding
/// dimension and are expected to lie in `(0, 1]`. Absolute and estimated
/// variants are lengths in logical pixels; an estimated length is a
/// self-sizing hint the rendering surface may refine after measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// A fraction of the container's width.
    FractionalWidth(f64),
    /// A fraction of the container's height.
    FractionalHeight(f64),
    /// An absolute length.
    Absolute(f64),
    /// An estimated length, used as a self-sizing hint.
    Estimated(f64),
}

impl Dimension {
    /// Returns `true` for the fractional variants.
    #[must_use]
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::FractionalWidth(_) | Self::FractionalHeight(_))
    }

    /// Returns the raw ratio or length carried by this dimension.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::FractionalWidth(v)
            | Self::FractionalHeight(v)
            | Self::Absolute(v)
            | Self::Estimated(v) => v,
        }
    }
}

/// The intended size of an item or group: one [`Dimension`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    /// Sizing along the horizontal axis.
    pub width: Dimension,
    /// Sizing along the vertical axis.
    pub height: Dimension,
}

impl SizeSpec {
    /// Creates a size from a width and a height dimension.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dimension, SizeSpec};

    #[test]
    fn fractional_variants_are_fractional() {
        assert!(Dimension::FractionalWidth(0.5).is_fractional());
        assert!(Dimension::FractionalHeight(1.0).is_fractional());
        assert!(!Dimension::Absolute(44.0).is_fractional());
        assert!(!Dimension::Estimated(100.0).is_fractional());
    }

    #[test]
    fn value_returns_the_carried_scalar() {
        assert_eq!(Dimension::FractionalWidth(0.97).value(), 0.97);
        assert_eq!(Dimension::Absolute(300.0).value(), 300.0);

        let size = SizeSpec::new(Dimension::FractionalWidth(1.0), Dimension::Absolute(44.0));
        assert_eq!(size.width.value(), 1.0);
        assert_eq!(size.height.value(), 44.0);
    }
}

// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layout-pass geometry supplied by the host.

use core::fmt;

/// Geometry of the container a section is resolved against.
///
/// Constructed once per layout pass and threaded through every
/// [`resolve`](crate::resolve) call. Hosts must not cache an environment
/// across passes: insets are derived from the width carried here, so a stale
/// environment reproduces a stale layout after rotation or a multitasking
/// resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEnvironment {
    container_width: f64,
    enclosing_width: Option<f64>,
}

impl LayoutEnvironment {
    /// Creates an environment for a container of the given content width.
    ///
    /// # Errors
    ///
    /// Rejects non-finite and non-positive widths; a degenerate width would
    /// otherwise silently resolve to a degenerate layout.
    pub fn new(container_width: f64) -> Result<Self, EnvironmentError> {
        Ok(Self {
            container_width: width(container_width)?,
            enclosing_width: None,
        })
    }

    /// Creates an environment for a nested (orthogonally scrolling) section,
    /// recording the enclosing container's width alongside its own.
    ///
    /// # Errors
    ///
    /// Both widths must be finite and positive.
    pub fn nested(container_width: f64, enclosing_width: f64) -> Result<Self, EnvironmentError> {
        Ok(Self {
            container_width: width(container_width)?,
            enclosing_width: Some(width(enclosing_width)?),
        })
    }

    /// Content width of the resolving container.
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Width of the enclosing container, if this environment describes a
    /// nested section.
    #[must_use]
    pub const fn enclosing_width(&self) -> Option<f64> {
        self.enclosing_width
    }
}

/// Rejected layout environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentError {
    /// A container width was zero or negative.
    NonPositiveWidth(f64),
    /// A container width was NaN or infinite.
    NonFiniteWidth(f64),
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWidth(w) => write!(f, "container width must be positive; got {w}"),
            Self::NonFiniteWidth(w) => write!(f, "container width must be finite; got {w}"),
        }
    }
}

impl core::error::Error for EnvironmentError {}

fn width(value: f64) -> Result<f64, EnvironmentError> {
    if !value.is_finite() {
        Err(EnvironmentError::NonFiniteWidth(value))
    } else if value <= 0.0 {
        Err(EnvironmentError::NonPositiveWidth(value))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{EnvironmentError, LayoutEnvironment};

    #[test]
    fn positive_widths_are_accepted() {
        let env = LayoutEnvironment::new(390.0).unwrap();
        assert_eq!(env.container_width(), 390.0);
        assert_eq!(env.enclosing_width(), None);
    }

    #[test]
    fn degenerate_widths_are_rejected() {
        assert_eq!(
            LayoutEnvironment::new(0.0),
            Err(EnvironmentError::NonPositiveWidth(0.0))
        );
        assert_eq!(
            LayoutEnvironment::new(-320.0),
            Err(EnvironmentError::NonPositiveWidth(-320.0))
        );
        assert!(matches!(
            LayoutEnvironment::new(f64::NAN),
            Err(EnvironmentError::NonFiniteWidth(_))
        ));
        assert_eq!(
            LayoutEnvironment::new(f64::INFINITY),
            Err(EnvironmentError::NonFiniteWidth(f64::INFINITY))
        );
    }

    #[test]
    fn nested_environments_record_the_enclosing_width() {
        let env = LayoutEnvironment::nested(358.8, 390.0).unwrap();
        assert_eq!(env.container_width(), 358.8);
        assert_eq!(env.enclosing_width(), Some(390.0));

        assert!(LayoutEnvironment::nested(358.8, 0.0).is_err());
    }
}

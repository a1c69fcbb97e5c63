// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectional Layout: compositional section-layout geometry.
//!
//! This crate provides a small, renderer-agnostic core for the kind of
//! screen a storefront app presents: an ordered stack of sections, each one
//! a horizontally paged or contiguously scrolling region of groups of items.
//! Given a section archetype and the current container width, it
//! deterministically produces the section's sizing ratios, spacing, content
//! insets, and optional header placement. Rendering, cell binding, and the
//! host view lifecycle are deliberately out of scope.
//!
//! The core concepts are:
//!
//! - [`Dimension`] and [`SizeSpec`]: the sizing vocabulary (fractions of the
//!   container, absolute lengths, self-sizing estimates).
//! - [`SectionKind`]: a closed set of three archetypes — [`GalleryKind`]
//!   (wide paged cards), [`ClusterKind`] (paged groups of N stacked items
//!   under a title strip), and [`ListKind`] (contiguous single-column rows).
//!   Each kind owns its width-ratio constants and is validated at
//!   construction, so an invalid configuration is unrepresentable.
//! - [`LayoutEnvironment`]: the per-layout-pass container geometry. Always
//!   thread the *current* environment through each call; insets derive from
//!   it, which is what keeps layouts correct across rotation and
//!   multitasking resizes.
//! - [`resolve`]: the resolver itself, a pure function from kind and
//!   environment to a [`SectionSpec`].
//! - [`CompositionalLayout`] and [`SectionDataSource`]: the host-facing
//!   ordered section sequence and the injected count provider.
//!
//! All kinds share one inset rule: the leading and trailing insets are
//! `container_width × (1 − (item_width_ratio + group_width_ratio) / 2)`,
//! centering the slightly-narrower group while leaving a peek margin for the
//! next page; top and bottom insets are a fixed per-kind constant.
//!
//! ## Minimal example
//!
//! ```rust
//! use sectional_layout::{GalleryKind, LayoutEnvironment, ScrollBehavior, SectionKind};
//!
//! // A wide paged card row.
//! let kind = SectionKind::Gallery(GalleryKind::new(0.97, 0.92, 12.0, 300.0)?);
//! let env = LayoutEnvironment::new(390.0)?;
//!
//! let section = kind.resolve(&env);
//! assert_eq!(section.scroll, ScrollBehavior::Paged);
//! // Leading inset is 390 * (1 - (0.97 + 0.92) / 2).
//! assert!((section.content_insets.x0 - 21.45).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Resolution is O(1) arithmetic with no I/O, no caching, and no shared
//! mutable state; every value involved is plain data, so calls are safe from
//! any thread even though the reference usage is a single-threaded layout
//! pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dimension;
mod environment;
mod kind;
mod layout;
mod resolve;
mod section;

pub use dimension::{Dimension, SizeSpec};
pub use environment::{EnvironmentError, LayoutEnvironment};
pub use kind::{
    ClusterKind, ConfigError, GalleryKind, ListKind, SectionKind, content_width_ratio,
    inset_leading_ratio,
};
pub use layout::{CompositionalLayout, SectionDataSource};
pub use resolve::resolve;
pub use section::{Anchor, Axis, GroupSpec, HeaderSpec, ItemSpec, ScrollBehavior, SectionSpec};

// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing section sequencing.

use alloc::vec::Vec;

use crate::{LayoutEnvironment, SectionKind, SectionSpec, resolve};

/// The ordered sections a host declares for one screen.
///
/// This holds only [`SectionKind`]s. Every resolution recomputes each section
/// from scratch against the environment it is given; no resolved geometry is
/// retained across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionalLayout {
    sections: Vec<SectionKind>,
}

impl CompositionalLayout {
    /// Creates a layout over the given ordered sections.
    #[must_use]
    pub fn new(sections: Vec<SectionKind>) -> Self {
        Self { sections }
    }

    /// Number of declared sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no sections are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the kind declared at `index`, if any.
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<&SectionKind> {
        self.sections.get(index)
    }

    /// Resolves the section at `index` against `env`.
    #[must_use]
    pub fn resolve_section(&self, index: usize, env: &LayoutEnvironment) -> Option<SectionSpec> {
        self.sections.get(index).map(|kind| resolve(kind, env))
    }

    /// Resolves every declared section against `env`, in declaration order.
    #[must_use]
    pub fn resolve_all(&self, env: &LayoutEnvironment) -> Vec<SectionSpec> {
        self.sections.iter().map(|kind| resolve(kind, env)).collect()
    }

    /// Resolves one section per `source.section_count()`, pairing each data
    /// section with the kind declared at the same index.
    ///
    /// The count is taken from the source as-is; data sections beyond the
    /// declared kinds are skipped.
    #[must_use]
    pub fn resolve_for_source<S: SectionDataSource>(
        &self,
        source: &S,
        env: &LayoutEnvironment,
    ) -> Vec<SectionSpec> {
        (0..source.section_count())
            .filter_map(|index| self.resolve_section(index, env))
            .collect()
    }
}

/// Injected provider of section and item counts.
///
/// Implemented by the host's data layer. The resolver consumes the counts
/// only to size iteration; it neither validates nor caches them.
pub trait SectionDataSource {
    /// Number of sections the data layer currently exposes.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;
}

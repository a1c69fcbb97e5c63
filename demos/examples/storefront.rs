// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A storefront screen: a paged gallery, a paged cluster of three stacked
//! rows under a title strip, and a contiguous list, resolved across several
//! container widths to show insets tracking the current geometry.
//!
//! Run:
//! - `cargo run -p sectional_demos --example storefront`

use std::num::NonZeroUsize;

use sectional_layout::{
    ClusterKind, CompositionalLayout, GalleryKind, LayoutEnvironment, ListKind, SectionDataSource,
    SectionKind,
};

/// Hardcoded counts standing in for a real data layer.
struct DemoSource;

impl SectionDataSource for DemoSource {
    fn section_count(&self) -> usize {
        3
    }

    fn item_count(&self, _section: usize) -> usize {
        20
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cluster_rows = NonZeroUsize::new(3).unwrap();
    let layout = CompositionalLayout::new(vec![
        SectionKind::Gallery(GalleryKind::new(0.97, 0.92, 12.0, 300.0)?),
        SectionKind::Cluster(ClusterKind::new(0.97, 0.92, 12.0, cluster_rows, 8.0)?),
        SectionKind::List(ListKind::new(0.97, 0.92, 12.0)?),
    ]);
    let source = DemoSource;

    // A narrow phone, a current phone, and a wide phone; a rotation or
    // multitasking resize is just the next pass with a different width.
    for width in [320.0, 390.0, 428.0] {
        let env = LayoutEnvironment::new(width)?;
        println!("container width {width}:");
        for (index, section) in layout.resolve_for_source(&source, &env).iter().enumerate() {
            let insets = section.content_insets;
            let items = section.group.item_total();
            println!(
                "  section {index} ({items} item{} per group, {:?}): \
                 insets leading/trailing {:.2}, top/bottom {:.0}, header: {}",
                if items == 1 { "" } else { "s" },
                section.scroll,
                insets.x0,
                insets.y0,
                if section.header.is_some() { "yes" } else { "no" },
            );
        }
        for section in 0..source.section_count() {
            let count = source.item_count(section);
            println!("  data: section {section} binds {count} items");
        }
    }

    Ok(())
}

// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout section resolver.
//!
//! [`resolve`] maps a [`SectionKind`] and a [`LayoutEnvironment`] to a fully
//! specified [`SectionSpec`]: item and group sizing, arrangement, scrolling
//! behavior, content insets, and the optional header. It is a pure function
//! of its inputs; identical inputs yield bit-identical output.

use kurbo::{Insets, Vec2};
use smallvec::smallvec;

use crate::{
    Anchor, ClusterKind, Dimension, GalleryKind, GroupSpec, HeaderSpec, ItemSpec,
    LayoutEnvironment, ListKind, ScrollBehavior, SectionKind, SectionSpec, SizeSpec,
    inset_leading_ratio,
};

/// Resolves `kind` against `env`, producing the section's full layout.
///
/// Insets are recomputed from `env`'s container width on every call; nothing
/// is cached between resolutions, so the output tracks rotation and
/// size-class changes as long as the host supplies the current environment.
#[must_use]
pub fn resolve(kind: &SectionKind, env: &LayoutEnvironment) -> SectionSpec {
    match kind {
        SectionKind::Gallery(gallery) => resolve_gallery(gallery, env),
        SectionKind::Cluster(cluster) => resolve_cluster(cluster, env),
        SectionKind::List(list) => resolve_list(list, env),
    }
}

/// The shared inset rule: leading and trailing insets center the
/// slightly-narrower group while leaving a peek margin for the next item;
/// top and bottom insets are the kind's fixed constant.
fn resolved_insets(
    item_width_ratio: f64,
    group_width_ratio: f64,
    vertical_insets: f64,
    env: &LayoutEnvironment,
) -> Insets {
    let horizontal =
        env.container_width() * inset_leading_ratio(item_width_ratio, group_width_ratio);
    Insets::new(horizontal, vertical_insets, horizontal, vertical_insets)
}

fn resolve_gallery(kind: &GalleryKind, env: &LayoutEnvironment) -> SectionSpec {
    let item = ItemSpec::new(SizeSpec::new(
        Dimension::FractionalWidth(kind.item_width_ratio()),
        Dimension::FractionalHeight(1.0),
    ));
    let group = GroupSpec::horizontal(
        SizeSpec::new(
            Dimension::FractionalWidth(kind.group_width_ratio()),
            Dimension::Estimated(kind.content_height()),
        ),
        smallvec![item],
    );

    SectionSpec {
        group,
        scroll: ScrollBehavior::Paged,
        inter_group_spacing: 0.0,
        content_insets: resolved_insets(
            kind.item_width_ratio(),
            kind.group_width_ratio(),
            kind.vertical_insets(),
            env,
        ),
        header: None,
    }
}

fn resolve_cluster(kind: &ClusterKind, env: &LayoutEnvironment) -> SectionSpec {
    let item = ItemSpec::new(SizeSpec::new(
        Dimension::FractionalWidth(kind.item_width_ratio()),
        Dimension::Estimated(ClusterKind::ITEM_HEIGHT_ESTIMATE),
    ));
    let group = GroupSpec::vertical(
        SizeSpec::new(
            Dimension::FractionalWidth(kind.group_width_ratio()),
            Dimension::Absolute(ClusterKind::GROUP_HEIGHT),
        ),
        item,
        kind.item_count(),
        kind.inter_item_spacing(),
    );
    let header = HeaderSpec {
        size: SizeSpec::new(
            Dimension::FractionalWidth(1.0),
            Dimension::Absolute(ClusterKind::HEADER_HEIGHT),
        ),
        anchor: Anchor::Top,
        offset: Vec2::ZERO,
    };

    SectionSpec {
        group,
        scroll: ScrollBehavior::Paged,
        inter_group_spacing: 0.0,
        content_insets: resolved_insets(
            kind.item_width_ratio(),
            kind.group_width_ratio(),
            kind.vertical_insets(),
            env,
        ),
        header: Some(header),
    }
}

fn resolve_list(kind: &ListKind, env: &LayoutEnvironment) -> SectionSpec {
    // Rows span the full content width; the configured ratios only feed the
    // shared inset rule.
    let item = ItemSpec::new(SizeSpec::new(
        Dimension::FractionalWidth(1.0),
        Dimension::FractionalHeight(1.0),
    ));
    let group = GroupSpec::horizontal(
        SizeSpec::new(
            Dimension::FractionalWidth(1.0),
            Dimension::Absolute(ListKind::ROW_HEIGHT),
        ),
        smallvec![item],
    );

    SectionSpec {
        group,
        scroll: ScrollBehavior::Contiguous,
        inter_group_spacing: ListKind::INTER_GROUP_SPACING,
        content_insets: resolved_insets(
            kind.item_width_ratio(),
            kind.group_width_ratio(),
            kind.vertical_insets(),
            env,
        ),
        header: None,
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::resolve;
    use crate::{
        Axis, ClusterKind, Dimension, GalleryKind, LayoutEnvironment, ListKind, ScrollBehavior,
        SectionKind, inset_leading_ratio,
    };

    fn gallery() -> SectionKind {
        SectionKind::Gallery(GalleryKind::new(0.97, 0.92, 12.0, 300.0).unwrap())
    }

    fn cluster() -> SectionKind {
        let count = NonZeroUsize::new(3).unwrap();
        SectionKind::Cluster(ClusterKind::new(0.97, 0.92, 12.0, count, 8.0).unwrap())
    }

    fn list() -> SectionKind {
        SectionKind::List(ListKind::new(0.97, 0.92, 12.0).unwrap())
    }

    fn env(width: f64) -> LayoutEnvironment {
        LayoutEnvironment::new(width).unwrap()
    }

    #[test]
    fn identical_inputs_resolve_identically() {
        let env = env(390.0);
        for kind in [gallery(), cluster(), list()] {
            assert_eq!(resolve(&kind, &env), resolve(&kind, &env));
        }
    }

    #[test]
    fn gallery_leading_inset_at_390() {
        let section = resolve(&gallery(), &env(390.0));
        let insets = section.content_insets;

        // 390 * (1 - (0.97 + 0.92) / 2) = 390 * 0.055.
        assert!((insets.x0 - 21.45).abs() < 1e-9);
        assert_eq!(insets.x0, insets.x1);
        assert_eq!(insets.y0, 12.0);
        assert_eq!(insets.y1, 12.0);
    }

    #[test]
    fn gallery_is_one_paged_full_height_card_per_group() {
        let section = resolve(&gallery(), &env(390.0));

        assert_eq!(section.scroll, ScrollBehavior::Paged);
        assert!(section.header.is_none());
        assert_eq!(section.group.axis, Axis::Horizontal);
        assert_eq!(section.group.items.len(), 1);
        assert_eq!(section.group.repeat.get(), 1);
        assert_eq!(
            section.group.items[0].size.width,
            Dimension::FractionalWidth(0.97)
        );
        assert_eq!(
            section.group.items[0].size.height,
            Dimension::FractionalHeight(1.0)
        );
        assert_eq!(section.group.size.height, Dimension::Estimated(300.0));
    }

    #[test]
    fn list_at_320_is_contiguous_with_row_spacing() {
        let section = resolve(&list(), &env(320.0));

        // 320 * 0.055.
        assert!((section.content_insets.x0 - 17.6).abs() < 1e-9);
        assert_eq!(section.scroll, ScrollBehavior::Contiguous);
        assert_eq!(section.inter_group_spacing, 10.0);
        assert!(section.header.is_none());
        assert_eq!(section.group.size.width, Dimension::FractionalWidth(1.0));
        assert_eq!(section.group.size.height, Dimension::Absolute(44.0));
    }

    #[test]
    fn cluster_at_414_stacks_three_spaced_items_under_a_header() {
        let section = resolve(&cluster(), &env(414.0));

        assert_eq!(section.scroll, ScrollBehavior::Paged);
        assert_eq!(section.group.axis, Axis::Vertical);
        assert_eq!(section.group.items.len(), 1);
        assert_eq!(section.group.repeat.get(), 3);
        assert_eq!(section.group.inter_item_spacing, Some(8.0));

        let header = section.header.expect("cluster sections carry a header");
        assert_eq!(header.size.width, Dimension::FractionalWidth(1.0));
        assert_eq!(header.size.height, Dimension::Absolute(44.0));
    }

    #[test]
    fn only_the_list_scrolls_contiguously() {
        let env = env(390.0);
        assert_eq!(resolve(&gallery(), &env).scroll, ScrollBehavior::Paged);
        assert_eq!(resolve(&cluster(), &env).scroll, ScrollBehavior::Paged);
        assert_eq!(resolve(&list(), &env).scroll, ScrollBehavior::Contiguous);
    }

    #[test]
    fn only_the_cluster_carries_a_header() {
        let env = env(390.0);
        assert!(resolve(&gallery(), &env).header.is_none());
        assert!(resolve(&cluster(), &env).header.is_some());
        assert!(resolve(&list(), &env).header.is_none());
    }

    #[test]
    fn insets_track_the_current_environment_width() {
        // Rotation regression: a resolver reading a cached global width would
        // report the same leading inset for both passes.
        let kind = gallery();
        let portrait = resolve(&kind, &env(320.0));
        let landscape = resolve(&kind, &env(568.0));

        assert_ne!(portrait.content_insets.x0, landscape.content_insets.x0);
        let ratio = landscape.content_insets.x0 / portrait.content_insets.x0;
        assert!((ratio - 568.0 / 320.0).abs() < 1e-9);
    }

    #[test]
    fn insets_follow_the_shared_rule_for_every_kind_and_width() {
        for kind in [gallery(), cluster(), list()] {
            for width in [320.0, 390.0, 414.0, 1024.0] {
                let section = resolve(&kind, &env(width));
                let expected = width * inset_leading_ratio(0.97, 0.92);
                assert_eq!(section.content_insets.x0, expected);
                assert_eq!(section.content_insets.x1, expected);
                assert_eq!(section.content_insets.y0, 12.0);
            }
        }
    }
}

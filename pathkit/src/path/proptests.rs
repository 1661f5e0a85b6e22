//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization
//! itself. This module covers indexing and the derived operations.

use super::model::Path;
use super::relationship::PathRelationship;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn anchor_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("C:/"), Just("d:\\")]
}

fn absolute_path_strategy() -> impl Strategy<Value = Path> {
    (
        anchor_strategy(),
        prop::collection::vec(segment_strategy(), 1..8),
    )
        .prop_map(|(anchor, parts)| Path::new(&format!("{anchor}{}", parts.join("/"))).unwrap())
}

fn relative_path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| Path::new(&parts.join("\\")).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rendering and re-parsing gives the same path
    #[test]
    fn display_round_trips(path in absolute_path_strategy()) {
        prop_assert_eq!(Path::new(&path.to_string()).unwrap(), path);
    }

    // getElement(1) == getElement(-depth) and getElement(depth) == getElement(-1)
    #[test]
    fn index_symmetry(path in absolute_path_strategy()) {
        let depth = isize::try_from(path.depth()).unwrap();
        prop_assert_eq!(path.get_element(1), path.get_element(-depth));
        prop_assert_eq!(path.get_element(depth), path.get_element(-1));
        prop_assert_eq!(path.get_element(depth + 1), None);
        prop_assert_eq!(path.get_element(-depth - 1), None);
    }

    // Every non-root path is a child of its parent
    #[test]
    fn parent_child_duality(path in absolute_path_strategy()) {
        let parent = path.parent().unwrap();
        prop_assert!(parent.is_parent_of(&path));
        prop_assert!(path.is_child_of(&parent));
    }

    // Relative parents work the same way, bottoming out at `.`
    #[test]
    fn relative_parent_child_duality(path in relative_path_strategy()) {
        let parent = path.parent().unwrap();
        prop_assert!(path.is_child_of(&parent));
    }

    // Every relative path lies within each step of its parent chain
    #[test]
    fn relative_parent_chain_contains_path(path in relative_path_strategy()) {
        let mut ancestor = path.parent();
        while let Some(current) = ancestor {
            prop_assert_eq!(PathRelationship::between(&current, &path), PathRelationship::Ancestor);
            ancestor = current.parent();
        }
    }

    // toAbsolute followed by toRelative gives back the relative path
    #[test]
    fn absolute_relative_inverse(base in absolute_path_strategy(), path in relative_path_strategy()) {
        let absolute = path.to_absolute(&base).unwrap();
        prop_assert_eq!(absolute.to_relative(&base).unwrap(), path);
    }

    // The whole-path subpath is the path itself
    #[test]
    fn full_subpath_is_identity(path in absolute_path_strategy()) {
        prop_assert_eq!(path.subpath(None, None), Some(path.clone()));
    }

    // A path always includes each of its own subpaths
    #[test]
    fn includes_own_subpaths(path in relative_path_strategy(), a in 1..8isize, b in 1..8isize) {
        let (start, end) = (a.min(b), a.max(b));
        if let Some(sub) = path.subpath(Some(start), Some(end)) {
            prop_assert!(path.includes(&sub));
            prop_assert!(path.first_index_of(&sub, None).unwrap() <= start.unsigned_abs());
            prop_assert!(path.last_index_of(&sub, None).unwrap() >= start.unsigned_abs());
        }
    }

    // The common base of two paths prefixes both
    #[test]
    fn common_base_prefixes_inputs(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        if let Some(base) = Path::find_common_base([&a, &b]) {
            prop_assert!(a.starts_with(&base));
            prop_assert!(b.starts_with(&base));
        } else {
            prop_assert_ne!(a.anchor(), b.anchor());
        }
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn relationship_symmetric(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let rel_ab = PathRelationship::between(&a, &b);
        let rel_ba = PathRelationship::between(&b, &a);

        let is_symmetric = matches!(
            (rel_ab, rel_ba),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_ab, rel_ba);
    }

    // is_within and contains are consistent
    #[test]
    fn is_within_contains_consistent(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        prop_assert_eq!(
            PathRelationship::is_within(&a, &b),
            PathRelationship::contains(&b, &a)
        );
    }
}

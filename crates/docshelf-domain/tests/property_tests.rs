//! Property-based tests for domain value objects and entities

use proptest::prelude::*;

use docshelf_domain::{Contributor, DomainError, Version};

fn arb_version() -> impl Strategy<Value = Version> {
    (0u64..10_000, 0u64..10_000, 0u64..10_000)
        .prop_map(|(major, minor, patch)| Version::new(major, minor, patch))
}

proptest! {
    /// Rendering a version and parsing it back is the identity.
    #[test]
    fn version_display_parse_roundtrip(version in arb_version()) {
        let rendered = version.to_string();
        let parsed = Version::parse(&rendered).unwrap();
        prop_assert_eq!(parsed, version);
    }

    /// Version ordering agrees with component-wise tuple ordering.
    #[test]
    fn version_ordering_matches_components(a in arb_version(), b in arb_version()) {
        let tuple_order = (a.major(), a.minor(), a.patch())
            .cmp(&(b.major(), b.minor(), b.patch()));
        prop_assert_eq!(a.cmp(&b), tuple_order);
    }

    /// Whitespace-only contributor names are always rejected; names with at
    /// least one non-whitespace character are always accepted.
    #[test]
    fn contributor_name_validation(name in "\\PC*") {
        let result = Contributor::new("c-1", name.clone());
        if name.trim().is_empty() {
            prop_assert_eq!(result.unwrap_err(), DomainError::EmptyContributorName);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

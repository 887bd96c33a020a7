//! Integration tests for member address expansion.
//!
//! Covers plain addresses, grouped notation, range arithmetic,
//! ordering guarantees, self-address exclusion and the full set of
//! rejection cases.

use kiln_core::{AddressFormatError, expand_members};

fn specs(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Plain addresses
// ---------------------------------------------------------------------------

#[test]
fn plain_address_expands_to_itself() {
    let members = expand_members(&specs(&["10.0.0.1:5701"]), None).unwrap();
    assert_eq!(members, ["10.0.0.1:5701"]);
}

#[test]
fn hostname_addresses_are_accepted() {
    let members = expand_members(&specs(&["cache-1.internal:5701"]), None).unwrap();
    assert_eq!(members, ["cache-1.internal:5701"]);
}

// ---------------------------------------------------------------------------
// Grouped notation
// ---------------------------------------------------------------------------

#[test]
fn grouped_range_expands_inclusive() {
    let members = expand_members(&specs(&["10.0.0.1:5701[5701-5702]"]), None).unwrap();
    assert_eq!(members, ["10.0.0.1:5701", "10.0.0.1:5702"]);
}

#[test]
fn grouped_single_and_range_mix() {
    let members = expand_members(&specs(&["10.0.0.1:0[5701;5703-5705]"]), None).unwrap();
    assert_eq!(
        members,
        [
            "10.0.0.1:5701",
            "10.0.0.1:5703",
            "10.0.0.1:5704",
            "10.0.0.1:5705"
        ]
    );
}

#[test]
fn range_length_and_sequence_are_exact() {
    // low-high with low <= high expands to high - low + 1 ascending ports
    let members = expand_members(&specs(&["10.0.0.1:0[5700-5710]"]), None).unwrap();
    assert_eq!(members.len(), 11);

    for (i, member) in members.iter().enumerate() {
        assert_eq!(*member, format!("10.0.0.1:{}", 5700 + i));
    }
}

#[test]
fn specs_expand_in_input_order() {
    let members = expand_members(
        &specs(&["10.0.0.2:0[5702]", "10.0.0.1:0[5701-5702]", "10.0.0.3:5703"]),
        None,
    )
    .unwrap();
    assert_eq!(
        members,
        [
            "10.0.0.2:5702",
            "10.0.0.1:5701",
            "10.0.0.1:5702",
            "10.0.0.3:5703"
        ]
    );
}

#[test]
fn expansion_is_idempotent() {
    let input = specs(&["10.0.0.1:0[5701-5703;5705]", "10.0.0.2:5701"]);

    let first = expand_members(&input, Some("10.0.0.2:5701")).unwrap();
    let second = expand_members(&input, Some("10.0.0.2:5701")).unwrap();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Self-address exclusion
// ---------------------------------------------------------------------------

#[test]
fn self_address_is_filtered_out() {
    let members = expand_members(
        &specs(&["10.0.0.1:5701", "10.0.0.2:5701"]),
        Some("10.0.0.1:5701"),
    )
    .unwrap();
    assert_eq!(members, ["10.0.0.2:5701"]);
}

#[test]
fn self_exclusion_is_case_sensitive() {
    // Exact string equality, no normalization
    let members = expand_members(&specs(&["CACHE-1:5701"]), Some("cache-1:5701")).unwrap();
    assert_eq!(members, ["CACHE-1:5701"]);
}

#[test]
fn excluding_every_member_yields_empty_list() {
    let members = expand_members(&specs(&["10.0.0.1:5701"]), Some("10.0.0.1:5701")).unwrap();
    assert!(members.is_empty());
}

// ---------------------------------------------------------------------------
// Rejection cases
// ---------------------------------------------------------------------------

#[test]
fn empty_spec_is_rejected() {
    let result = expand_members(&specs(&[""]), None);
    assert_eq!(result, Err(AddressFormatError::EmptySpec));
}

#[test]
fn missing_separator_is_rejected() {
    let result = expand_members(&specs(&["10.0.0.1"]), None);
    assert!(matches!(
        result,
        Err(AddressFormatError::MissingSeparator { .. })
    ));
}

#[test]
fn unbalanced_bracket_is_rejected() {
    let result = expand_members(&specs(&["10.0.0.1:5701[5701-5703"]), None);
    assert!(matches!(
        result,
        Err(AddressFormatError::UnbalancedBracket { .. })
    ));
}

#[test]
fn empty_bracket_interior_is_rejected() {
    let result = expand_members(&specs(&["10.0.0.1:5701[]"]), None);
    assert!(matches!(result, Err(AddressFormatError::EmptyGroup { .. })));
}

#[test]
fn non_numeric_port_is_rejected_with_context() {
    let result = expand_members(&specs(&["10.0.0.1:5701[57o1]"]), None);

    let error = result.unwrap_err();
    assert!(error.is_invalid_port());
    assert_eq!(error.spec(), Some("10.0.0.1:5701[57o1]"));
    assert!(error.to_string().contains("57o1"));
}

#[test]
fn inverted_range_is_rejected() {
    let result = expand_members(&specs(&["10.0.0.1:5701[5701-5700]"]), None);

    let error = result.unwrap_err();
    assert!(error.is_inverted_range());
    assert!(error.to_string().contains("5701 > 5700"));
}

#[test]
fn one_bad_spec_discards_all_output() {
    // All-or-nothing: valid specs before the bad one are not returned
    let result = expand_members(
        &specs(&["10.0.0.1:5701", "10.0.0.2:0[5701-5700]", "10.0.0.3:5701"]),
        None,
    );
    assert!(result.is_err());
}

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Avatar identity contract tests
//!
//! The seed and URL values here are load-bearing: they parameterize remote
//! renderings that other clients have already cached and shared. Changing the
//! derivation changes every avatar in the product at once.
//!
//! Run with: cargo test --test avatar_identity

use vetclinic_web::avatar::{
    avatar_url, identity_seed, initials, staff_name, AvatarIdentity, AvatarSize, AvatarState,
    STAFF_ROSTER,
};

#[test]
fn seed_is_nonnegative_and_deterministic_for_odd_inputs() {
    let inputs = [
        "",
        " ",
        "Ana",
        "maría gonzález",
        "Dr. Carlos Rodríguez",
        "🐾 Firulais 🐾",
        "\u{10FFFF}",
        "a b c d e f g h i j k l m n o p q r s t u v w x y z",
    ];
    for name in inputs {
        // u32 return type already guarantees non-negative; determinism is the
        // property under test.
        assert_eq!(identity_seed(name), identity_seed(name), "input {:?}", name);
    }
}

#[test]
fn empty_name_is_the_zero_identity() {
    assert_eq!(identity_seed(""), 0);
    assert_eq!(initials(""), "");
    let url = avatar_url("", AvatarSize::Medium);
    assert!(url.contains("seed=0"));
}

#[test]
fn initials_match_product_fixtures() {
    assert_eq!(initials("Ana"), "A");
    assert_eq!(initials("María González"), "MG");
    assert_eq!(initials("Dr. Carlos Rodríguez"), "DC");
}

#[test]
fn url_is_byte_identical_across_calls() {
    for size in [AvatarSize::Small, AvatarSize::Medium, AvatarSize::Large] {
        assert_eq!(
            avatar_url("Dra. María González", size),
            avatar_url("Dra. María González", size)
        );
    }
}

#[test]
fn url_carries_size_and_transparent_background() {
    let url = avatar_url("Ana López", AvatarSize::Large);
    assert!(url.contains("size=64"), "{}", url);
    assert!(url.ends_with("backgroundColor=transparent"), "{}", url);
}

#[test]
fn pixel_mapping_is_exact() {
    assert_eq!(AvatarSize::Small.pixels(), 32);
    assert_eq!(AvatarSize::Medium.pixels(), 48);
    assert_eq!(AvatarSize::Large.pixels(), 64);
}

#[test]
fn load_error_is_a_one_way_transition_to_initials() {
    let identity = AvatarIdentity::from_name("María González", AvatarSize::Medium);
    let mut state = AvatarState::default();
    assert_eq!(state, AvatarState::ImageAttempted);

    state = state.on_load_error();
    assert!(state.is_fallback());

    // What the fallback badge shows: uppercased, at most two characters.
    assert_eq!(identity.initials, "MG");
    assert!(identity.initials.chars().count() <= 2);
    assert_eq!(identity.initials, identity.initials.to_uppercase());

    // No path back to the image state.
    assert_eq!(state.on_load_error(), AvatarState::FallbackShown);
}

#[test]
fn roster_indexing_covers_every_entry_and_wraps() {
    let len = STAFF_ROSTER.len() as i64;

    let mut seen = std::collections::BTreeSet::new();
    for i in 0..len {
        seen.insert(staff_name(i));
    }
    assert_eq!(seen.len(), STAFF_ROSTER.len(), "entries must be distinct");

    assert_eq!(staff_name(len), staff_name(0));
    assert_eq!(staff_name(-1), staff_name(len - 1));
    assert_eq!(staff_name(i64::MIN), staff_name(i64::MIN.rem_euclid(len)));
}

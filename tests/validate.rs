use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use searchdata::{
    builtin, validate, validate_with, LintOptions, ScopeFlag, SearchDataError, SearchEntry,
    SearchIndex, SearchTarget,
};

fn external(url: &str) -> SearchTarget {
    SearchTarget::new(url, ScopeFlag::EXTERNAL, "X()")
}

fn local(url: &str) -> SearchTarget {
    SearchTarget::new(url, ScopeFlag::LOCAL, "X()")
}

fn entry(key: &str, targets: Vec<SearchTarget>) -> SearchEntry {
    SearchEntry::new(key, key, targets)
}

fn index_of(entries: Vec<SearchEntry>) -> SearchIndex {
    SearchIndex::new(entries)
}

#[test]
fn empty_key_is_rejected() {
    let index = index_of(vec![entry("", vec![local("../a.html")])]);
    assert_eq!(
        validate(&index).unwrap_err(),
        SearchDataError::EmptyKey { index: 0 }
    );
}

#[test]
fn uppercase_key_is_rejected() {
    let index = index_of(vec![entry("TwoWay", vec![local("../a.html")])]);
    assert_eq!(
        validate(&index).unwrap_err(),
        SearchDataError::KeyNotLowercase("TwoWay".into())
    );
}

#[test]
fn uppercase_key_passes_when_check_disabled() {
    let index = index_of(vec![entry("TwoWay", vec![local("../a.html")])]);
    let opts = LintOptions {
        require_lowercase_keys: false,
        ..LintOptions::default()
    };
    validate_with(&index, &opts).unwrap();
}

#[test]
fn duplicate_key_is_rejected() {
    let index = index_of(vec![
        entry("alpha", vec![local("../a.html")]),
        entry("alpha", vec![local("../b.html")]),
    ]);
    assert_eq!(
        validate(&index).unwrap_err(),
        SearchDataError::DuplicateKey("alpha".into())
    );
}

#[test]
fn nonadjacent_duplicate_is_caught_without_sorting() {
    let index = index_of(vec![
        entry("beta", vec![local("../b.html")]),
        entry("alpha", vec![local("../a.html")]),
        entry("beta", vec![local("../c.html")]),
    ]);
    let opts = LintOptions {
        require_sorted: false,
        ..LintOptions::default()
    };
    assert_eq!(
        validate_with(&index, &opts).unwrap_err(),
        SearchDataError::DuplicateKey("beta".into())
    );
}

#[test]
fn out_of_order_keys_are_rejected() {
    let index = index_of(vec![
        entry("beta", vec![local("../b.html")]),
        entry("alpha", vec![local("../a.html")]),
    ]);
    assert_eq!(
        validate(&index).unwrap_err(),
        SearchDataError::OutOfOrder {
            first: "beta".into(),
            second: "alpha".into(),
        }
    );
}

#[test]
fn out_of_order_keys_pass_when_check_disabled() {
    let index = index_of(vec![
        entry("beta", vec![local("../b.html")]),
        entry("alpha", vec![local("../a.html")]),
    ]);
    let opts = LintOptions {
        require_sorted: false,
        ..LintOptions::default()
    };
    validate_with(&index, &opts).unwrap();
}

#[test]
fn zero_targets_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![])]);
    assert_eq!(
        validate(&index).unwrap_err(),
        SearchDataError::NoTargets("alpha".into())
    );
}

#[test]
fn empty_url_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![local("")])]);
    match validate(&index).unwrap_err() {
        SearchDataError::InvalidUrl { reason, .. } => assert!(reason.contains("empty")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn disallowed_scheme_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![external("ftp://example.org/a")])]);
    match validate(&index).unwrap_err() {
        SearchDataError::InvalidUrl { reason, .. } => {
            assert!(reason.contains("scheme 'ftp'"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn extra_scheme_can_be_allowed() {
    let index = index_of(vec![entry("alpha", vec![external("ftp://example.org/a")])]);
    let mut opts = LintOptions::default();
    opts.allowed_schemes.push("ftp".into());
    validate_with(&index, &opts).unwrap();
}

#[test]
fn unparsable_absolute_url_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![external("https://")])]);
    assert!(matches!(
        validate(&index).unwrap_err(),
        SearchDataError::InvalidUrl { .. }
    ));
}

#[test]
fn local_flag_with_absolute_url_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![local("https://example.org/a.html")])]);
    match validate(&index).unwrap_err() {
        SearchDataError::InvalidUrl { reason, .. } => assert!(reason.contains("local")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn external_flag_with_relative_url_is_rejected() {
    let index = index_of(vec![entry("alpha", vec![external("../a.html#x")])]);
    match validate(&index).unwrap_err() {
        SearchDataError::InvalidUrl { reason, .. } => assert!(reason.contains("external")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_flags_skip_the_shape_check() {
    let index = index_of(vec![entry(
        "alpha",
        vec![
            SearchTarget::new("../a.html#x", ScopeFlag(2), "A()"),
            SearchTarget::new("https://example.org/a.html", ScopeFlag(7), "A()"),
        ],
    )]);
    validate(&index).unwrap();
}

#[test]
fn shape_check_can_be_disabled() {
    let index = index_of(vec![entry(
        "alpha",
        vec![local("https://example.org/a.html"), external("../a.html")],
    )]);
    let opts = LintOptions {
        check_scope_consistency: false,
        ..LintOptions::default()
    };
    validate_with(&index, &opts).unwrap();
}

#[test]
fn shuffled_table_fails_the_ordering_check() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut hit = false;
    for _ in 0..8 {
        let mut entries = builtin().entries().to_vec();
        entries.shuffle(&mut rng);
        if entries.windows(2).all(|w| w[0].key <= w[1].key) {
            continue;
        }
        hit = true;
        let err = validate(&SearchIndex::new(entries)).unwrap_err();
        assert!(matches!(err, SearchDataError::OutOfOrder { .. }));
    }
    assert!(hit);
}

use bunner_param_router::{Captures, MatchPolicy, RequestParams, match_group, match_single};

fn params(pairs: &[(&str, &str)]) -> RequestParams {
    pairs.iter().copied().collect()
}

#[test]
fn match_single_when_value_is_empty_then_only_lenient_matches() {
    let m = params(&[("k", "")]);

    let mut captures = Captures::new();
    assert!(match_single(&m, "k", MatchPolicy::Lenient, &mut captures));
    assert_eq!(captures.as_slice(), [""]);

    let mut captures = Captures::new();
    assert!(!match_single(&m, "k", MatchPolicy::Strict, &mut captures));
    assert!(captures.is_empty());
}

#[test]
fn match_single_when_key_absent_then_no_policy_matches() {
    let m = params(&[("K", "v")]);

    for policy in [MatchPolicy::Lenient, MatchPolicy::Strict] {
        let mut captures = Captures::new();
        assert!(!match_single(&m, "k", policy, &mut captures));
        assert!(captures.is_empty());
    }
}

#[test]
fn match_single_when_value_present_then_both_policies_append_it() {
    let m = params(&[("k", "v")]);

    for policy in [MatchPolicy::Lenient, MatchPolicy::Strict] {
        let mut captures = Captures::new();
        assert!(match_single(&m, "k", policy, &mut captures));
        assert_eq!(captures.as_slice(), ["v"]);
    }
}

#[test]
fn match_single_when_key_has_padding_then_lookup_is_not_trimmed() {
    let m = params(&[(" k", "v")]);
    let mut captures = Captures::new();

    assert!(!match_single(&m, "k", MatchPolicy::Lenient, &mut captures));
    assert!(match_single(&m, " k", MatchPolicy::Lenient, &mut captures));
    assert_eq!(captures.as_slice(), ["v"]);
}

#[test]
fn match_group_when_keys_empty_then_matches_without_captures() {
    let m = params(&[("k", "v")]);
    let keys: Vec<String> = Vec::new();

    for policy in [MatchPolicy::Lenient, MatchPolicy::Strict] {
        let mut captures = Captures::new();
        assert!(match_group(&m, keys.as_slice(), policy, &mut captures));
        assert!(captures.is_empty());
    }
}

#[test]
fn match_group_when_second_key_absent_then_first_capture_remains() {
    let m = params(&[("k1", "a")]);
    let mut captures = Captures::new();

    assert!(!match_group(&m, &["k1", "k2"], MatchPolicy::Lenient, &mut captures));
    assert_eq!(captures.as_slice(), ["a"]);
}

#[test]
fn match_group_when_strict_hits_empty_value_then_stops_there() {
    let m = params(&[("k1", "a"), ("k2", ""), ("k3", "c")]);
    let mut captures = Captures::new();

    assert!(!match_group(&m, &["k1", "k2", "k3"], MatchPolicy::Strict, &mut captures));
    assert_eq!(captures.as_slice(), ["a"]);
}

#[test]
fn match_group_when_all_keys_match_then_captures_follow_key_order() {
    let m = params(&[("k1", "a"), ("k2", "b")]);
    let mut captures = Captures::new();

    assert!(match_group(&m, &["k2", "k1"], MatchPolicy::Strict, &mut captures));
    assert_eq!(captures.as_slice(), ["b", "a"]);
}

use proptest::prelude::*;

use super::rules::{lateral, palatal, velar_stop, voiced_sonorant};
use super::*;
use crate::dict::{parse_records, DictRecord, Transcript};
use crate::unicode::normalize_word;

fn t(s: &str) -> Transcript {
    Transcript::parse(s)
}

fn d(first: &str, second: &str) -> DiffTuple {
    DiffTuple::new(first, second)
}

fn records(text: &str) -> Vec<DictRecord> {
    let (records, errors) = parse_records(text);
    assert!(errors.is_empty());
    records
}

// ---------------------------------------------------------------------------
// diff
// ---------------------------------------------------------------------------

#[test]
fn diff_equal_length_is_positional() {
    assert_eq!(diff(&t("r a k t"), &t("r a x t")), vec![d("k", "x")]);
    assert_eq!(
        diff(&t("t a: k a"), &t("t_h a k a")),
        vec![d("t", "t_h"), d("a:", "a")]
    );
}

#[test]
fn diff_identical_is_empty() {
    assert!(diff(&t("h E s t Y r"), &t("h E s t Y r")).is_empty());
}

#[test]
fn diff_recovers_insertions_and_substitutions() {
    let a = t("r eiː k j a v iː k ʏ r v eiː j ɪ");
    let b = t("r eiː c a v i k ʏ r v ei j ɪ");
    assert_eq!(
        diff(&a, &b),
        vec![d("k j", "c"), d("iː", "i"), d("eiː", "ei")]
    );
}

#[test]
fn diff_keeps_caller_orientation() {
    assert_eq!(diff(&t("k a l a"), &t("k a l l a")), vec![d("", "l")]);
    assert_eq!(diff(&t("k a l l a"), &t("k a l a")), vec![d("l", "")]);
}

#[test]
fn diff_trailing_insertion() {
    assert_eq!(diff(&t("h E s t Y r"), &t("h E s t Y")), vec![d("r", "")]);
    assert_eq!(diff(&t("a"), &t("a b c")), vec![d("", "b c")]);
}

#[test]
fn diff_without_anchors_is_one_tuple() {
    assert_eq!(diff(&t("a b"), &t("c d e")), vec![d("a b", "c d e")]);
}

#[test]
fn diff_tuple_orientation() {
    let kx = d("k", "x");
    assert_eq!(kx.reversed(), d("x", "k"));
    assert!(kx.is_same_pair(&d("x", "k")));
    assert!(kx.is_same_pair(&kx));
    assert!(!kx.is_same_pair(&d("k", "c")));
}

// ---------------------------------------------------------------------------
// rules
// ---------------------------------------------------------------------------

#[test]
fn rule_velar_stop() {
    assert_eq!(velar_stop(&[d("k", "x")], "rakt"), Some(Verdict::First));
    assert_eq!(velar_stop(&[d("x", "k")], "rakt"), Some(Verdict::Second));
    assert_eq!(velar_stop(&[d("k", "c")], "rakt"), None);
}

#[test]
fn rule_voiced_sonorant() {
    assert_eq!(
        voiced_sonorant(&[d("n\u{325}", "n")], "hnífur"),
        Some(Verdict::Second)
    );
    assert_eq!(
        voiced_sonorant(&[d("r", "r\u{325}")], "svart"),
        Some(Verdict::First)
    );
    assert_eq!(voiced_sonorant(&[d("l\u{325}", "l")], "hjálp"), None);
}

#[test]
fn rule_lateral() {
    assert_eq!(
        lateral(&[d("l\u{325}", "l")], &normalize_word("hjálp")),
        Some(Verdict::First)
    );
    assert_eq!(lateral(&[d("", "t")], "vatn"), Some(Verdict::Second));
    assert_eq!(lateral(&[d("", "l")], "kalla"), Some(Verdict::KeepBoth));
    assert_eq!(
        lateral(&[d("t", "")], &normalize_word("fjallið")),
        Some(Verdict::KeepBoth)
    );
    // Double l, but not before a vowel.
    assert_eq!(lateral(&[d("t", "")], "allt"), Some(Verdict::First));
    // Double l at the very start does not count.
    assert_eq!(lateral(&[d("t", "")], "lla"), Some(Verdict::First));
}

#[test]
fn rule_palatal() {
    assert_eq!(palatal(&[d("c", "k")], "kýr"), Some(Verdict::First));
    assert_eq!(palatal(&[d("x", "h k")], "sækja"), Some(Verdict::Second));
    assert_eq!(palatal(&[d("k", "")], "ekki"), Some(Verdict::Second));
}

#[test]
fn choose_identical_transcripts() {
    let tr = t("a: p I");
    assert_eq!(choose(&[], &tr, &tr, "api"), Choice::Chosen(tr.clone()));
}

#[test]
fn choose_prefers_velar_stop() {
    let (a, b) = (t("r a k t"), t("r a x t"));
    assert_eq!(choose(&diff(&a, &b), &a, &b, "rakt"), Choice::Chosen(a.clone()));
    assert_eq!(choose(&diff(&b, &a), &b, &a, "rakt"), Choice::Chosen(a.clone()));
}

#[test]
fn choose_keeps_both_for_double_l_before_vowel() {
    let (a, b) = (t("k a l a"), t("k a l l a"));
    assert_eq!(choose(&diff(&a, &b), &a, &b, "kalla"), Choice::KeepBoth);
}

#[test]
fn choose_without_matching_rule() {
    let (a, b) = (t("h u s"), t("h u: s"));
    assert_eq!(choose(&diff(&a, &b), &a, &b, "hús"), Choice::NoChoice);
}

#[test]
fn choose_first_rule_wins() {
    let (a, b) = (t("a"), t("b"));
    let diffs = [d("k", "c"), d("x", "k")];
    // palatal alone would pick a; velar comes first and picks b.
    assert_eq!(choose(&diffs, &a, &b, "w"), Choice::Chosen(b.clone()));
}

#[test]
fn choose_with_custom_rules() {
    fn always_second(_: &[DiffTuple], _: &str) -> Option<Verdict> {
        Some(Verdict::Second)
    }
    let rules = [Rule {
        name: "always_second",
        matcher: always_second,
    }];
    let (a, b) = (t("a"), t("b"));
    assert_eq!(choose_with(&rules, &[], &a, &b, "w"), Choice::Chosen(b.clone()));
    assert_eq!(choose_with(&[], &[], &a, &b, "w"), Choice::NoChoice);
}

// ---------------------------------------------------------------------------
// groups
// ---------------------------------------------------------------------------

#[test]
fn group_by_adjacency_only() {
    let recs = records("a\ta\nb\tb\na\ta\n");
    let groups = group_records(&recs);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.len() == 1));
}

#[test]
fn reconcile_rejects_mixed_and_empty_groups() {
    let recs = records("rakt\tr a k t\nrakk\tr a k\n");
    assert_eq!(
        reconcile_group(&recs),
        Err(ReconcileError::MixedWords {
            expected: "rakt".to_string(),
            found: "rakk".to_string(),
        })
    );
    assert_eq!(reconcile_group(&[]), Err(ReconcileError::EmptyGroup));
}

#[test]
fn reconcile_reduces_left_to_right() {
    let recs = records("rakt\tr a x t\nrakt\tr a k t\nrakt\tr a k t\n");
    let outcome = reconcile_group(&recs).unwrap();
    assert_eq!(outcome.choice, Choice::Chosen(t("r a k t")));
    assert_eq!(outcome.diffs, vec![d("x", "k"), d("x", "k")]);
}

#[test]
fn reconcile_no_choice_settles_group() {
    let recs = records("ab\ta b\nab\ta c\nab\ta b\n");
    let outcome = reconcile_group(&recs).unwrap();
    assert_eq!(outcome.choice, Choice::NoChoice);
    assert_eq!(outcome.diffs, vec![d("b", "c")]);
}

#[test]
fn reconcile_keep_both_survives_later_choice() {
    let recs = records("kalla\tk a l a\nkalla\tk a l l a\nkalla\tk a l a\n");
    let outcome = reconcile_group(&recs).unwrap();
    assert_eq!(outcome.choice, Choice::KeepBoth);
}

#[test]
fn process_routes_groups() {
    let recs = records(
        "api\ta: p I\n\
         kalla\tk a l a\n\
         kalla\tk a l l a\n\
         rakt\tr a k t\n\
         rakt\tr a x t\n\
         ab\ta b\n\
         ab\ta c\n\
         takt\tt a x t\n\
         takt\tt a k t\n",
    );
    let report = Reconciler::new().process(&recs).unwrap();

    let accepted: Vec<String> = report.accepted.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        accepted,
        vec![
            "api\ta: p I",
            "kalla\tk a l a",
            "kalla\tk a l l a",
            "rakt\tr a k t",
            "takt\tt a k t",
        ]
    );
    assert_eq!(report.no_choice.len(), 2);
    assert_eq!(report.variant_records.len(), 8);
    let words: Vec<&str> = report.words_with_variants.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["ab", "kalla", "rakt", "takt"]);

    // (x, k) from takt merges into (k, x) from rakt.
    let sorted = report.stats.sorted();
    assert_eq!(sorted[0].diff, d("k", "x"));
    assert_eq!(sorted[0].words, vec!["rakt", "takt"]);
    assert_eq!(report.stats.len(), 3);
    assert_eq!(report.stats.get(&d("l", "")).unwrap().count(), 1);
}

#[test]
fn diff_stats_keep_first_orientation() {
    let mut stats = DiffStats::new();
    stats.record(&d("c", "k"), "a");
    stats.record(&d("k", "c"), "b");
    stats.record(&d("n", "m"), "c");
    let sorted = stats.sorted();
    assert_eq!(sorted[0].diff, d("c", "k"));
    assert_eq!(sorted[0].count(), 2);
    assert_eq!(sorted[1].diff, d("n", "m"));
}

// ---------------------------------------------------------------------------
// proptest: diff properties
// ---------------------------------------------------------------------------

fn arb_transcript() -> impl Strategy<Value = Transcript> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "a:", "k", "x", "c", "l", "l\u{325}", "t", "r", "E"]),
        1..10,
    )
    .prop_map(Transcript::from_tokens)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn diff_with_itself_is_empty(a in arb_transcript()) {
        prop_assert!(diff(&a, &a).is_empty());
        prop_assert_eq!(choose(&[], &a, &a, "w"), Choice::Chosen(a.clone()));
    }

    #[test]
    fn diff_is_antisymmetric(a in arb_transcript(), b in arb_transcript()) {
        let ab = diff(&a, &b);
        let ba: Vec<DiffTuple> = diff(&b, &a).iter().map(DiffTuple::reversed).collect();
        prop_assert_eq!(&ab, &ba);
        for tuple in &ab {
            prop_assert!(!tuple.first.is_empty() || !tuple.second.is_empty());
        }
        if a != b {
            prop_assert!(!ab.is_empty());
        }
    }
}

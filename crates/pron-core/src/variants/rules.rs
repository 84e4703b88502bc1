//! Ordered preference rules for picking one of two transcripts.
//!
//! Each rule inspects the full diff set of a transcript pair. The first rule
//! that returns a verdict decides; if none does, no automatic choice is made.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::diff::DiffTuple;
use crate::dict::Transcript;

/// Which transcript of a compared pair a rule prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    First,
    Second,
    /// Both transcripts are valid pronunciations.
    KeepBoth,
}

/// Outcome of [`choose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Chosen(Transcript),
    KeepBoth,
    NoChoice,
}

pub type Matcher = fn(&[DiffTuple], &str) -> Option<Verdict>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub static RULES: [Rule; 4] = [
    Rule {
        name: "velar_stop_over_fricative",
        matcher: velar_stop,
    },
    Rule {
        name: "voiced_sonorant",
        matcher: voiced_sonorant,
    },
    Rule {
        name: "lateral_devoicing",
        matcher: lateral,
    },
    Rule {
        name: "palatal_stop",
        matcher: palatal,
    },
];

/// Pick between `a` and `b` using [`RULES`].
pub fn choose(diffs: &[DiffTuple], a: &Transcript, b: &Transcript, word: &str) -> Choice {
    choose_with(&RULES, diffs, a, b, word)
}

/// Pick between `a` and `b` using `rules` in order.
pub fn choose_with(
    rules: &[Rule],
    diffs: &[DiffTuple],
    a: &Transcript,
    b: &Transcript,
    word: &str,
) -> Choice {
    if a == b {
        return Choice::Chosen(a.clone());
    }
    let verdict = rules.iter().find_map(|rule| (rule.matcher)(diffs, word));
    match verdict {
        Some(Verdict::First) => Choice::Chosen(a.clone()),
        Some(Verdict::Second) => Choice::Chosen(b.clone()),
        Some(Verdict::KeepBoth) => Choice::KeepBoth,
        None => Choice::NoChoice,
    }
}

/// `First` if any diff is one of `preferred` as listed, `Second` if any diff
/// is one of them reversed.
fn prefer(diffs: &[DiffTuple], preferred: &[(&str, &str)]) -> Option<Verdict> {
    let has = |first: &str, second: &str| diffs.iter().any(|d| d.matches(first, second));
    if preferred.iter().any(|&(p, o)| has(p, o)) {
        return Some(Verdict::First);
    }
    if preferred.iter().any(|&(p, o)| has(o, p)) {
        return Some(Verdict::Second);
    }
    None
}

// Phoneme symbols are decomposed: the voiceless diacritics are combining
// characters after the base letter.

pub(crate) fn velar_stop(diffs: &[DiffTuple], _word: &str) -> Option<Verdict> {
    prefer(diffs, &[("k", "x")])
}

pub(crate) fn voiced_sonorant(diffs: &[DiffTuple], _word: &str) -> Option<Verdict> {
    prefer(
        diffs,
        &[
            ("n", "n\u{325}"),
            ("\u{14b}", "\u{14b}\u{30a}"),
            ("\u{272}", "\u{272}\u{30a}"),
            ("m", "m\u{325}"),
            ("r", "r\u{325}"),
        ],
    )
}

/// Words with a double l before a vowel (`kalla`, `fjalli`) are valid with
/// either a devoiced lateral or a plain one.
static LL_BEFORE_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+ll[aeiouyæ]").expect("valid regex"));

pub(crate) fn lateral(diffs: &[DiffTuple], word: &str) -> Option<Verdict> {
    let verdict = prefer(diffs, &[("l\u{325}", "l"), ("t", ""), ("l", "")])?;
    if LL_BEFORE_VOWEL.is_match(word) {
        return Some(Verdict::KeepBoth);
    }
    Some(verdict)
}

pub(crate) fn palatal(diffs: &[DiffTuple], _word: &str) -> Option<Verdict> {
    prefer(diffs, &[("c", "k"), ("h k", "x"), ("", "k")])
}

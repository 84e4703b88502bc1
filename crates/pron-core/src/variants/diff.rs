use std::fmt;

use serde::Serialize;

use crate::dict::Transcript;

/// A span where two transcripts disagree: the tokens of the first transcript
/// and the tokens of the second, each space-joined. One side may be empty
/// (an insertion), never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiffTuple {
    pub first: String,
    pub second: String,
}

impl DiffTuple {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }

    /// Equality regardless of orientation: (k, c) is the same pair as (c, k).
    pub fn is_same_pair(&self, other: &DiffTuple) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }

    pub(super) fn matches(&self, first: &str, second: &str) -> bool {
        self.first == first && self.second == second
    }
}

impl fmt::Display for DiffTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.first, self.second)
    }
}

/// Differences between two transcripts of one word, in order.
///
/// Transcripts of equal length are compared position by position. Otherwise
/// the longer one is matched against the shorter: equal tokens are anchored
/// from the front, then from the back, and a token of the shorter transcript
/// may be found further ahead in the longer one (a single insertion). The
/// unmatched stretches between anchors become the diff tuples. Tuples are
/// always oriented as (from `a`, from `b`).
pub fn diff(a: &Transcript, b: &Transcript) -> Vec<DiffTuple> {
    let (x, y) = (a.tokens(), b.tokens());
    if x.len() == y.len() {
        return x
            .iter()
            .zip(y)
            .filter(|(p, q)| p != q)
            .map(|(p, q)| DiffTuple::new(p, q))
            .collect();
    }
    if x.len() < y.len() {
        return diff_uneven(y, x).iter().map(DiffTuple::reversed).collect();
    }
    diff_uneven(x, y)
}

/// First matched column of each row of the long × short match matrix.
fn match_columns(long: &[String], short: &[String]) -> Vec<Option<usize>> {
    let mut columns: Vec<Option<usize>> = vec![None; long.len()];
    let mut mark = |row: usize, col: usize| {
        let slot = &mut columns[row];
        *slot = Some(slot.map_or(col, |c| c.min(col)));
    };

    let mut end_long = long.len();
    let mut end_short = short.len();
    for i in 0..short.len() {
        if i > end_long || i > end_short {
            break;
        }
        if long[i] == short[i] {
            mark(i, i);
            continue;
        }
        // Anchor from the back. The end cursors stay where the first
        // mismatch left them.
        while end_long > i && end_short > i {
            end_long -= 1;
            end_short -= 1;
            if long[end_long] == short[end_short] {
                mark(end_long, end_short);
            } else {
                break;
            }
        }
        // short[i] further ahead in long: tokens in between were inserted.
        if let Some(j) = (i..end_long).find(|&j| long[j] == short[i]) {
            mark(j, i);
        }
    }
    columns
}

fn diff_uneven(long: &[String], short: &[String]) -> Vec<DiffTuple> {
    let mut diffs = Vec::new();
    let mut next_long = 0;
    let mut next_short = 0;

    for (row, col) in match_columns(long, short)
        .into_iter()
        .enumerate()
        .filter_map(|(row, col)| col.map(|c| (row, c)))
    {
        if row != next_long || col != next_short {
            push_gap(
                &mut diffs,
                slice_from(long, next_long, row),
                slice_from(short, next_short, col),
            );
        }
        next_long = row + 1;
        next_short = col + 1;
    }

    push_gap(
        &mut diffs,
        slice_from(long, next_long, long.len()),
        slice_from(short, next_short, short.len()),
    );
    diffs
}

/// `tokens[start..end]`, empty when the range runs backwards.
fn slice_from(tokens: &[String], start: usize, end: usize) -> &[String] {
    if start < end {
        &tokens[start..end]
    } else {
        &[]
    }
}

fn push_gap(diffs: &mut Vec<DiffTuple>, long: &[String], short: &[String]) {
    if long.is_empty() && short.is_empty() {
        return;
    }
    diffs.push(DiffTuple {
        first: long.join(" "),
        second: short.join(" "),
    });
}

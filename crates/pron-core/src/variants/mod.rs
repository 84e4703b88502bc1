//! Reconciling competing transcripts of one word.
//!
//! Input records are grouped by adjacency: consecutive records with the same
//! word form a variant group. Within a group the transcripts are diffed and
//! an ordered rule table picks one of them, keeps them all, or leaves the
//! group for manual review.

mod diff;
mod rules;
mod stats;
#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use tracing::{debug, debug_span};

use crate::dict::{DictRecord, Transcript};

pub use diff::{diff, DiffTuple};
pub use rules::{choose, choose_with, Choice, Matcher, Rule, Verdict, RULES};
pub use stats::{DiffStat, DiffStats};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// A group must hold a single word; anything else means the input was not
    /// grouped the way this pass requires.
    #[error("variant group mixes words {expected:?} and {found:?}")]
    MixedWords { expected: String, found: String },

    #[error("empty variant group")]
    EmptyGroup,
}

/// Consecutive runs of records sharing a word.
pub fn group_records(records: &[DictRecord]) -> Vec<&[DictRecord]> {
    records.chunk_by(|a, b| a.word == b.word).collect()
}

/// What [`reconcile_group`] decided for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutcome {
    pub word: String,
    /// `KeepBoth` means every transcript of the group is kept.
    pub choice: Choice,
    /// Diffs of the first transcript against each of the others.
    pub diffs: Vec<DiffTuple>,
}

/// Reconcile one variant group with [`RULES`].
pub fn reconcile_group(group: &[DictRecord]) -> Result<GroupOutcome, ReconcileError> {
    Reconciler::new().reconcile_group(group)
}

/// Result of a whole-dictionary pass.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    /// Single-transcript words plus every automatically resolved group.
    pub accepted: Vec<DictRecord>,
    /// All records of groups left for manual review.
    pub no_choice: Vec<DictRecord>,
    /// All records of groups with more than one transcript.
    pub variant_records: Vec<DictRecord>,
    pub words_with_variants: BTreeSet<String>,
    pub stats: DiffStats,
}

/// Applies a rule table to variant groups.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'r> {
    rules: &'r [Rule],
}

impl Default for Reconciler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler<'static> {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }
}

impl<'r> Reconciler<'r> {
    pub fn with_rules(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    /// Groups of three or more are reduced left to right: the current winner
    /// is compared with the next transcript. A chosen transcript becomes the
    /// new winner, `KeepBoth` makes the group keep all its transcripts, and
    /// `NoChoice` settles the whole group as `NoChoice`.
    pub fn reconcile_group(&self, group: &[DictRecord]) -> Result<GroupOutcome, ReconcileError> {
        let (head, rest) = group.split_first().ok_or(ReconcileError::EmptyGroup)?;
        let word = &head.word;
        if let Some(other) = rest.iter().find(|r| r.word != *word) {
            return Err(ReconcileError::MixedWords {
                expected: word.clone(),
                found: other.word.clone(),
            });
        }

        let diffs: Vec<DiffTuple> = rest
            .iter()
            .flat_map(|r| diff(&head.transcript, &r.transcript))
            .collect();

        let mut winner: Transcript = head.transcript.clone();
        let mut keep_all = false;
        for record in rest {
            let pair_diffs = diff(&winner, &record.transcript);
            match choose_with(self.rules, &pair_diffs, &winner, &record.transcript, word) {
                Choice::Chosen(t) => winner = t,
                Choice::KeepBoth => keep_all = true,
                Choice::NoChoice => {
                    return Ok(GroupOutcome {
                        word: word.clone(),
                        choice: Choice::NoChoice,
                        diffs,
                    });
                }
            }
        }

        let choice = if keep_all {
            Choice::KeepBoth
        } else {
            Choice::Chosen(winner)
        };
        Ok(GroupOutcome {
            word: word.clone(),
            choice,
            diffs,
        })
    }

    /// Reconcile every adjacent group of `records`.
    ///
    /// Fails on the first group that mixes words; no partial report is
    /// returned in that case.
    pub fn process(&self, records: &[DictRecord]) -> Result<ReconcileReport, ReconcileError> {
        let _span = debug_span!("reconcile", records = records.len()).entered();
        let mut report = ReconcileReport::default();

        for group in group_records(records) {
            let outcome = self.reconcile_group(group)?;
            if group.len() > 1 {
                report.variant_records.extend_from_slice(group);
                report.words_with_variants.insert(outcome.word.clone());
                for d in &outcome.diffs {
                    report.stats.record(d, &outcome.word);
                }
            }
            match outcome.choice {
                Choice::Chosen(transcript) => report.accepted.push(DictRecord {
                    word: outcome.word,
                    transcript,
                }),
                Choice::KeepBoth => report.accepted.extend_from_slice(group),
                Choice::NoChoice => report.no_choice.extend_from_slice(group),
            }
        }

        debug!(
            accepted = report.accepted.len(),
            no_choice = report.no_choice.len(),
            words_with_variants = report.words_with_variants.len(),
            distinct_diffs = report.stats.len(),
            "reconcile done"
        );
        Ok(report)
    }
}

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use super::align::{align, AlignmentPair, AlignmentWarning};
use super::config::SpecialMappings;
use super::table::MappingTable;
use crate::dict::DictRecord;

/// How often one pair occurred over an aligned dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingCount {
    pub pair: AlignmentPair,
    pub count: usize,
}

/// A record using a pair too rare to be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectedError {
    pub record: DictRecord,
    pub pair: AlignmentPair,
}

/// Pair occurrences and warnings collected by [`align_dictionary`].
#[derive(Debug, Clone, Default)]
pub struct AlignmentReport {
    records: Vec<DictRecord>,
    /// pair -> indices into `records`, one per occurrence
    occurrences: BTreeMap<AlignmentPair, Vec<usize>>,
    warnings: Vec<(DictRecord, AlignmentWarning)>,
    failed: usize,
}

/// Align every record with `table` and index the resulting pairs.
pub fn align_dictionary(records: &[DictRecord], table: &MappingTable) -> AlignmentReport {
    let _span = debug_span!("align_dictionary", records = records.len()).entered();
    let mut report = AlignmentReport {
        records: records.to_vec(),
        ..Default::default()
    };

    for (idx, record) in records.iter().enumerate() {
        let alignment = match align(&record.word, &record.transcript, table) {
            Ok(a) => a,
            Err(e) => {
                warn!(word = %record.word, error = %e, "cannot align record");
                report.failed += 1;
                continue;
            }
        };
        for pair in alignment.pairs {
            report.occurrences.entry(pair).or_default().push(idx);
        }
        if let Some(warning) = alignment.warning {
            warn!(word = %record.word, transcript = %record.transcript, ?warning, "suspicious alignment");
            report.warnings.push((record.clone(), warning));
        }
    }

    debug!(
        distinct_pairs = report.occurrences.len(),
        warnings = report.warnings.len(),
        failed = report.failed,
        "dictionary aligned"
    );
    report
}

impl AlignmentReport {
    /// Every distinct pair with its occurrence count, most frequent first.
    pub fn mapping_counts(&self) -> Vec<MappingCount> {
        let mut counts: Vec<MappingCount> = self
            .occurrences
            .iter()
            .map(|(pair, idxs)| MappingCount {
                pair: pair.clone(),
                count: idxs.len(),
            })
            .collect();
        // Stable sort keeps pair order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Records using a pair seen fewer than `threshold` times that is not a
    /// known rare mapping. Each distinct record is reported once, with the
    /// first offending pair in [`mapping_counts`](Self::mapping_counts) order;
    /// repeated input lines count as one record.
    pub fn suspected_errors(
        &self,
        threshold: usize,
        specials: &SpecialMappings,
    ) -> Vec<SuspectedError> {
        let mut seen: HashSet<&DictRecord> = HashSet::new();
        let mut errors = Vec::new();
        for mc in self.mapping_counts() {
            if mc.count >= threshold
                || specials.is_known_rare(&mc.pair.grapheme, &mc.pair.phonemes)
            {
                continue;
            }
            for &idx in &self.occurrences[&mc.pair] {
                let record = &self.records[idx];
                if seen.insert(record) {
                    errors.push(SuspectedError {
                        record: record.clone(),
                        pair: mc.pair.clone(),
                    });
                }
            }
        }
        errors
    }

    /// The aligned records minus every line equal to a suspected error, in
    /// input order.
    pub fn records_without(&self, errors: &[SuspectedError]) -> Vec<DictRecord> {
        let removed: HashSet<&DictRecord> = errors.iter().map(|e| &e.record).collect();
        self.records
            .iter()
            .filter(|r| !removed.contains(r))
            .cloned()
            .collect()
    }

    /// Records whose alignment ended in a suspicious way.
    pub fn warnings(&self) -> &[(DictRecord, AlignmentWarning)] {
        &self.warnings
    }

    /// Number of records that could not be aligned at all.
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn distinct_pairs(&self) -> usize {
        self.occurrences.len()
    }
}

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, debug_span, warn};

use super::align::align;
use super::config::{AlignmentHints, SpecialMappings};
use crate::dict::DictRecord;
use crate::settings::MappingSettings;
use crate::unicode::{graphemes, nfd, normalize_transcript};

/// Frequencies of (grapheme cluster, phoneme cluster) pairs.
#[derive(Debug, Clone, Default)]
pub struct PairCounts {
    counts: HashMap<(String, String), u32>,
}

impl PairCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, grapheme: &str, phonemes: &str) {
        *self
            .counts
            .entry((grapheme.to_string(), phonemes.to_string()))
            .or_insert(0) += 1;
    }

    pub fn get(&self, grapheme: &str, phonemes: &str) -> u32 {
        self.counts
            .get(&(grapheme.to_string(), phonemes.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.counts
            .iter()
            .map(|((g, p), &n)| (g.as_str(), p.as_str(), n))
    }

    /// Position-wise (character, token) pairs of every record whose grapheme
    /// count equals its token count.
    pub fn from_equal_length<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DictRecord>,
    {
        let mut counts = Self::new();
        for record in records {
            let chars = graphemes(&record.word);
            let tokens = record.transcript.tokens();
            if chars.len() != tokens.len() {
                continue;
            }
            for (c, t) in chars.iter().zip(tokens) {
                counts.add(c, t);
            }
        }
        counts
    }

    /// Pairs produced by aligning every record with `table`.
    pub fn from_alignments<'a, I>(records: I, table: &MappingTable) -> Self
    where
        I: IntoIterator<Item = &'a DictRecord>,
    {
        let mut counts = Self::new();
        for record in records {
            match align(&record.word, &record.transcript, table) {
                Ok(alignment) => {
                    for pair in &alignment.pairs {
                        counts.add(&pair.grapheme, &pair.phonemes);
                    }
                }
                Err(e) => warn!(word = %record.word, error = %e, "cannot align record"),
            }
        }
        counts
    }
}

/// Learned grapheme cluster → licensed phoneme clusters.
///
/// Built in two steps ([`MappingTable::seed`], then [`MappingTable::extend`]),
/// each producing a new value. A table is never modified after construction.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    map: BTreeMap<String, BTreeSet<String>>,
    hints: AlignmentHints,
}

impl MappingTable {
    /// Seed pass: pairs from equal-length word/transcript records that occur
    /// more than `min_occurrence` times, plus the fixed mappings.
    pub fn seed<'a, I>(records: I, min_occurrence: u32, specials: &SpecialMappings) -> Self
    where
        I: IntoIterator<Item = &'a DictRecord>,
    {
        let _span = debug_span!("seed_table", min_occurrence).entered();
        let counts = PairCounts::from_equal_length(records);
        let table = Self::from_counts(&counts, min_occurrence, specials);
        debug!(observed = counts.len(), licensed = table.len(), "seed table built");
        table
    }

    /// Extension pass: align every record with `self`, then rebuild from the
    /// aligned pairs occurring more than `min_occurrence` times.
    pub fn extend<'a, I>(&self, records: I, min_occurrence: u32, specials: &SpecialMappings) -> Self
    where
        I: IntoIterator<Item = &'a DictRecord>,
    {
        let _span = debug_span!("extend_table", min_occurrence).entered();
        let counts = PairCounts::from_alignments(records, self);
        let table = Self::from_counts(&counts, min_occurrence, specials);
        debug!(observed = counts.len(), licensed = table.len(), "extended table built");
        table
    }

    /// Both learning passes with the configured thresholds.
    pub fn learn(
        records: &[DictRecord],
        settings: &MappingSettings,
        specials: &SpecialMappings,
    ) -> Self {
        Self::seed(records, settings.seed_min_occurrence, specials).extend(
            records,
            settings.extend_min_occurrence,
            specials,
        )
    }

    /// Keep pairs counted more than `min_occurrence` times, then merge the
    /// fixed mappings.
    pub fn from_counts(counts: &PairCounts, min_occurrence: u32, specials: &SpecialMappings) -> Self {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (g, p, n) in counts.iter() {
            if n > min_occurrence {
                map.entry(g.to_string()).or_default().insert(p.to_string());
            }
        }
        merge_specials(&mut map, specials);
        Self {
            map,
            hints: specials.hints.clone(),
        }
    }

    /// Table from explicit pairs plus the fixed mappings. Both sides are
    /// normalized.
    pub fn from_pairs<'a, I>(pairs: I, specials: &SpecialMappings) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut counts = PairCounts::new();
        for (g, p) in pairs {
            counts.add(&nfd(g), &normalize_transcript(p));
        }
        Self::from_counts(&counts, 0, specials)
    }

    pub fn candidates(&self, grapheme: &str) -> Option<&BTreeSet<String>> {
        self.map.get(grapheme)
    }

    pub fn contains(&self, grapheme: &str) -> bool {
        self.map.contains_key(grapheme)
    }

    /// Whether `phonemes` (one token or a space-joined cluster) is a licensed
    /// realization of `grapheme`.
    pub fn licenses(&self, grapheme: &str, phonemes: &str) -> bool {
        self.map
            .get(grapheme)
            .is_some_and(|cands| cands.contains(phonemes))
    }

    pub fn hints(&self) -> &AlignmentHints {
        &self.hints
    }

    /// Total number of licensed (grapheme, phonemes) pairs.
    pub fn len(&self) -> usize {
        self.map.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All licensed pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map
            .iter()
            .flat_map(|(g, ps)| ps.iter().map(move |p| (g.as_str(), p.as_str())))
    }
}

fn merge_specials(map: &mut BTreeMap<String, BTreeSet<String>>, specials: &SpecialMappings) {
    for (grapheme, source) in &specials.aliases {
        if let Some(inherited) = map.get(source).cloned() {
            map.entry(grapheme.clone()).or_default().extend(inherited);
        }
    }

    for cands in map.values_mut() {
        let partners: Vec<String> = cands
            .iter()
            .filter_map(|p| specials.length_partner(p))
            .collect();
        cands.extend(partners);
    }

    for (cluster, realizations) in &specials.clusters {
        map.insert(cluster.clone(), realizations.iter().cloned().collect());
    }
}

use std::collections::{BTreeSet, HashMap};

use super::{DictRecord, Transcript};

/// A word with its transcript and the state collected by the compound pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronEntry {
    pub word: String,
    pub transcript: Transcript,
    /// Always contains `transcript.to_string()`.
    pub transcript_variants: BTreeSet<String>,
    /// One for the entry itself plus one per compound it was found in.
    pub frequency: u32,
    /// Compound components in order; empty for non-compounds.
    pub compound_elements: Vec<String>,
}

impl PronEntry {
    pub fn new(record: DictRecord) -> Self {
        let mut transcript_variants = BTreeSet::new();
        transcript_variants.insert(record.transcript.to_string());
        Self {
            word: record.word,
            transcript: record.transcript,
            transcript_variants,
            frequency: 1,
            compound_elements: Vec::new(),
        }
    }

    pub fn is_compound(&self) -> bool {
        self.compound_elements.len() > 1
    }

    /// Add a transcript variant. Returns `true` if it was new.
    pub fn add_variant(&mut self, variant: &str) -> bool {
        self.transcript_variants
            .insert(Transcript::parse(variant).to_string())
    }

    /// Drop variants that only differ from the main transcript by length
    /// marks and/or aspiration marks.
    pub fn simplify_variants(&mut self, length_mark: &str, aspiration_mark: &str) {
        let main = self.transcript.to_string();
        let no_aspiration = main.replace(aspiration_mark, "");
        let differs_by_length = |a: &str, b: &str| a.replace(length_mark, "") == b;

        let variants = std::mem::take(&mut self.transcript_variants);
        self.transcript_variants.insert(main.clone());
        for v in variants {
            let redundant = differs_by_length(&v, &main)
                || differs_by_length(&main, &v)
                || v == no_aspiration
                || differs_by_length(&v, &no_aspiration)
                || differs_by_length(&no_aspiration, &v);
            if !redundant {
                self.transcript_variants.insert(v);
            }
        }
    }

    pub fn to_record(&self) -> DictRecord {
        DictRecord {
            word: self.word.clone(),
            transcript: self.transcript.clone(),
        }
    }
}

/// Word → entry map for the compound pass.
#[derive(Debug, Clone, Default)]
pub struct PronDictionary {
    entries: HashMap<String, PronEntry>,
}

impl PronDictionary {
    /// Build from records. A later record for the same word replaces an
    /// earlier one.
    pub fn from_records<I: IntoIterator<Item = DictRecord>>(records: I) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            entries.insert(record.word.clone(), PronEntry::new(record));
        }
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<&PronEntry> {
        self.entries.get(word)
    }

    pub fn get_mut(&mut self, word: &str) -> Option<&mut PronEntry> {
        self.entries.get_mut(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Entries in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = &PronEntry> {
        self.words()
            .into_iter()
            .filter_map(move |w| self.entries.get(w))
    }

    /// Entries sorted by descending frequency, then word.
    pub fn by_frequency(&self) -> Vec<&PronEntry> {
        let mut entries: Vec<&PronEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
        entries
    }

    /// Current records in sorted word order.
    pub fn records(&self) -> Vec<DictRecord> {
        self.iter().map(PronEntry::to_record).collect()
    }
}

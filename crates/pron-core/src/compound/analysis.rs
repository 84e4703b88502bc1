use tracing::{debug, debug_span};

use super::transcribe::{component_transcripts, ComponentTranscript};
use super::Segmenter;
use crate::dict::{DictRecord, PronDictionary, PronEntry};
use crate::g2p::MappingTable;
use crate::settings::VariantSettings;

/// Summary of one [`analyze_compounds`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompoundStats {
    /// Words split into more than one component.
    pub compounds: usize,
    /// Compounds whose transcript could be split over their components.
    pub transcribed: usize,
    /// New transcript variants added to component entries.
    pub variants_added: usize,
}

/// Segment every word of `dict` and record what the compounds say about
/// their components.
///
/// Words are processed in sorted order. Multi-component words get their
/// `compound_elements`. For every component that is itself a dictionary
/// entry, its frequency is incremented and the transcript it has inside the
/// compound is added to its variants. These updates are applied after all
/// words are segmented, so they never depend on processing order.
pub fn analyze_compounds(
    dict: &mut PronDictionary,
    segmenter: &Segmenter<'_>,
    table: &MappingTable,
) -> CompoundStats {
    let _span = debug_span!("analyze_compounds", words = dict.len()).entered();
    let mut stats = CompoundStats::default();
    let mut found: Vec<(String, Vec<String>)> = Vec::new();
    let mut updates: Vec<ComponentTranscript> = Vec::new();

    for entry in dict.iter() {
        let tree = segmenter.segment(&entry.word);
        let leaves = tree.leaves();
        if leaves.len() < 2 {
            continue;
        }
        stats.compounds += 1;
        match component_transcripts(&leaves, &entry.word, &entry.transcript, table) {
            Some(parts) => {
                stats.transcribed += 1;
                updates.extend(parts);
            }
            None => debug!(word = %entry.word, "alignment does not match components"),
        }
        found.push((
            entry.word.clone(),
            leaves.into_iter().map(String::from).collect(),
        ));
    }

    for (word, elements) in found {
        if let Some(entry) = dict.get_mut(&word) {
            entry.compound_elements = elements;
        }
    }
    for update in updates {
        if let Some(entry) = dict.get_mut(&update.component) {
            entry.frequency += 1;
            if entry.add_variant(&update.transcript.to_string()) {
                stats.variants_added += 1;
            }
        }
    }

    debug!(
        compounds = stats.compounds,
        transcribed = stats.transcribed,
        variants_added = stats.variants_added,
        "compound analysis done"
    );
    stats
}

/// Compound entries, most frequent first.
pub fn compound_report(dict: &PronDictionary) -> Vec<&PronEntry> {
    dict.by_frequency()
        .into_iter()
        .filter(|e| e.is_compound())
        .collect()
}

/// Entries that keep more than one transcript variant once variants that
/// only differ in length or aspiration marks are dropped. Most frequent
/// first; the returned entries carry the simplified variant sets.
pub fn multi_transcript_report(dict: &PronDictionary, settings: &VariantSettings) -> Vec<PronEntry> {
    dict.by_frequency()
        .into_iter()
        .filter_map(|e| {
            let mut entry = e.clone();
            entry.simplify_variants(&settings.length_mark, &settings.aspiration_mark);
            (entry.transcript_variants.len() > 1).then_some(entry)
        })
        .collect()
}

/// Every input record whose word `dict` did not mark as a compound, in input
/// order. Words with several transcripts keep all of them.
pub fn non_compound_records(records: &[DictRecord], dict: &PronDictionary) -> Vec<DictRecord> {
    records
        .iter()
        .filter(|r| !dict.get(&r.word).is_some_and(PronEntry::is_compound))
        .cloned()
        .collect()
}

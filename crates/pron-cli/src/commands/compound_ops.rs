use std::fmt;
use std::path::Path;

use pron_core::compound::{
    analyze_compounds, compound_report, multi_transcript_report, non_compound_records, Segmenter,
};
use pron_core::dict::{DictRecord, PronDictionary, PronEntry};
use pron_core::g2p::{MappingTable, SpecialMappings};
use pron_core::settings::Settings;

use crate::io::{create_output_dir, output_path, read_components, read_records, write_lines};
use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSummary {
    pub words: usize,
    pub compounds: usize,
    pub transcribed: usize,
    pub variants_added: usize,
    pub multi_transcripts: usize,
}

impl fmt::Display for CompoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} compounds ({} transcribed), {} component variants added, {} words with multiple transcripts",
            self.words, self.compounds, self.transcribed, self.variants_added, self.multi_transcripts
        )
    }
}

fn components(entry: &PronEntry) -> String {
    entry.compound_elements.join("+")
}

fn variants(entry: &PronEntry) -> String {
    entry
        .transcript_variants
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Split the words of `input` over the component lists and write the
/// compound reports to `output_dir`.
pub fn compounds(
    input: &Path,
    modifiers: &Path,
    heads: &Path,
    output_dir: &Path,
    settings: &Settings,
    specials: &SpecialMappings,
) -> Result<CompoundSummary, CliError> {
    let records = read_records(input)?;
    let modifiers = read_components(modifiers)?;
    let heads = read_components(heads)?;

    let table = MappingTable::learn(&records, &settings.mapping, specials);
    let mut dict = PronDictionary::from_records(records.iter().cloned());
    let segmenter = Segmenter::new(&modifiers, &heads, &settings.compound);
    let stats = analyze_compounds(&mut dict, &segmenter, &table);

    create_output_dir(output_dir)?;
    write_lines(
        &output_path(output_dir, "compounds.tsv"),
        compound_report(&dict)
            .into_iter()
            .map(|e| format!("{}\t{}\t{}", e.word, e.transcript, components(e))),
    )?;

    let multi = multi_transcript_report(&dict, &settings.variants);
    write_lines(
        &output_path(output_dir, "multi_transcripts.tsv"),
        multi.iter().map(|e| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                e.word,
                e.transcript,
                components(e),
                variants(e),
                e.frequency
            )
        }),
    )?;

    write_lines(
        &output_path(output_dir, "compound_filtered.tsv"),
        non_compound_records(&records, &dict).iter().map(DictRecord::to_string),
    )?;

    Ok(CompoundSummary {
        words: dict.len(),
        compounds: stats.compounds,
        transcribed: stats.transcribed,
        variants_added: stats.variants_added,
        multi_transcripts: multi.len(),
    })
}

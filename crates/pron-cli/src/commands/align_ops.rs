use std::fmt;
use std::path::Path;

use pron_core::dict::DictRecord;
use pron_core::g2p::{align_dictionary, AlignmentWarning, MappingTable, SpecialMappings};
use pron_core::settings::Settings;

use crate::io::{create_output_dir, output_path, read_records, write_lines};
use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignSummary {
    pub records: usize,
    pub seed_pairs: usize,
    pub extended_pairs: usize,
    pub distinct_pairs: usize,
    pub suspected_errors: usize,
    pub kept: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl fmt::Display for AlignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records aligned ({} failed), table {} -> {} pairs, {} distinct pairs used, {} suspected errors ({} records kept), {} warnings",
            self.records,
            self.failed,
            self.seed_pairs,
            self.extended_pairs,
            self.distinct_pairs,
            self.suspected_errors,
            self.kept,
            self.warnings
        )
    }
}

fn warning_line(record: &DictRecord, warning: &AlignmentWarning) -> String {
    match warning {
        AlignmentWarning::DroppedFinal { grapheme } => {
            format!("{record}\tdropped final {grapheme}")
        }
    }
}

/// Learn a mapping table from `input`, align every record with it and write
/// the pair statistics, suspected errors and the dictionary without them to
/// `output_dir`.
pub fn align(
    input: &Path,
    output_dir: &Path,
    settings: &Settings,
    specials: &SpecialMappings,
) -> Result<AlignSummary, CliError> {
    let records = read_records(input)?;
    let mapping = &settings.mapping;

    let seed = MappingTable::seed(&records, mapping.seed_min_occurrence, specials);
    let table = seed.extend(&records, mapping.extend_min_occurrence, specials);
    let report = align_dictionary(&records, &table);
    let errors = report.suspected_errors(mapping.rare_mapping_threshold, specials);
    let kept = report.records_without(&errors);

    create_output_dir(output_dir)?;
    write_lines(
        &output_path(output_dir, "g2p_mappings.tsv"),
        report
            .mapping_counts()
            .iter()
            .map(|mc| format!("{}\t{}\t{}", mc.pair.grapheme, mc.pair.phonemes, mc.count)),
    )?;
    write_lines(
        &output_path(output_dir, "assumed_errors.tsv"),
        errors
            .iter()
            .map(|e| format!("{}\t{}\t{}", e.record, e.pair.grapheme, e.pair.phonemes)),
    )?;
    write_lines(
        &output_path(output_dir, "align_errors_removed.tsv"),
        kept.iter().map(DictRecord::to_string),
    )?;
    write_lines(
        &output_path(output_dir, "alignment_warnings.tsv"),
        report.warnings().iter().map(|(r, w)| warning_line(r, w)),
    )?;

    Ok(AlignSummary {
        records: records.len(),
        seed_pairs: seed.len(),
        extended_pairs: table.len(),
        distinct_pairs: report.distinct_pairs(),
        suspected_errors: errors.len(),
        kept: kept.len(),
        warnings: report.warnings().len(),
        failed: report.failed(),
    })
}

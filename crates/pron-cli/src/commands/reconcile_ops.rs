use std::fmt;
use std::path::Path;

use serde::Serialize;

use pron_core::dict::DictRecord;
use pron_core::variants::{DiffStat, Reconciler};

use crate::io::{create_output_dir, output_path, read_records, write_lines};
use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    Tsv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub records: usize,
    pub accepted: usize,
    pub no_choice: usize,
    pub words_with_variants: usize,
    pub distinct_diffs: usize,
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} words with multiple transcripts, {} accepted, {} left for review, {} distinct differences",
            self.records, self.words_with_variants, self.accepted, self.no_choice, self.distinct_diffs
        )
    }
}

#[derive(Serialize)]
struct DiffStatJson<'a> {
    first: &'a str,
    second: &'a str,
    count: usize,
    words: &'a [String],
}

impl<'a> From<&'a DiffStat> for DiffStatJson<'a> {
    fn from(stat: &'a DiffStat) -> Self {
        Self {
            first: &stat.diff.first,
            second: &stat.diff.second,
            count: stat.count(),
            words: &stat.words,
        }
    }
}

/// Reconcile variant groups of `input` and write the results to `output_dir`.
pub fn reconcile(
    input: &Path,
    output_dir: &Path,
    format: StatsFormat,
) -> Result<ReconcileSummary, CliError> {
    let records = read_records(input)?;
    let report = Reconciler::new().process(&records)?;
    create_output_dir(output_dir)?;

    write_lines(
        &output_path(output_dir, "reconciled.tsv"),
        report.accepted.iter().map(DictRecord::to_string),
    )?;
    write_lines(
        &output_path(output_dir, "no_choice.tsv"),
        report.no_choice.iter().map(DictRecord::to_string),
    )?;
    write_lines(
        &output_path(output_dir, "multiple_transcripts.tsv"),
        report.variant_records.iter().map(DictRecord::to_string),
    )?;
    write_lines(
        &output_path(output_dir, "words_with_multiple_transcripts.txt"),
        &report.words_with_variants,
    )?;

    let sorted = report.stats.sorted();
    match format {
        StatsFormat::Tsv => write_lines(
            &output_path(output_dir, "diff_stats.tsv"),
            sorted.iter().map(|s| {
                format!(
                    "{}\t{}\t{}\t{}",
                    s.diff.first,
                    s.diff.second,
                    s.count(),
                    s.words.join(",")
                )
            }),
        )?,
        StatsFormat::Json => {
            let rows: Vec<DiffStatJson> = sorted.into_iter().map(DiffStatJson::from).collect();
            let json = serde_json::to_string_pretty(&rows)?;
            write_lines(&output_path(output_dir, "diff_stats.json"), [json])?;
        }
    }

    Ok(ReconcileSummary {
        records: records.len(),
        accepted: report.accepted.len(),
        no_choice: report.no_choice.len(),
        words_with_variants: report.words_with_variants.len(),
        distinct_diffs: report.stats.len(),
    })
}

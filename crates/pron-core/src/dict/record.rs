use std::fmt;

use tracing::warn;

use super::{RecordError, Transcript};
use crate::unicode::normalize_word;

/// One `word<TAB>transcript` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictRecord {
    pub word: String,
    pub transcript: Transcript,
}

impl DictRecord {
    pub fn new(word: &str, transcript: &str) -> Self {
        Self {
            word: normalize_word(word),
            transcript: Transcript::parse(transcript),
        }
    }
}

impl fmt::Display for DictRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.transcript)
    }
}

/// A rejected input line, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number.
    pub line_no: usize,
    pub line: String,
    pub error: RecordError,
}

/// Parse one dictionary line.
pub fn parse_line(line: &str) -> Result<DictRecord, RecordError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 2 {
        return Err(RecordError::FieldCount(fields.len()));
    }
    let record = DictRecord::new(fields[0], fields[1]);
    if record.word.is_empty() {
        return Err(RecordError::EmptyWord);
    }
    if record.transcript.is_empty() {
        return Err(RecordError::EmptyTranscript);
    }
    Ok(record)
}

/// Parse a whole dictionary file.
///
/// Blank lines and `#` comments are skipped. Malformed lines are logged,
/// collected and skipped; they never abort the parse.
pub fn parse_records(text: &str) -> (Vec<DictRecord>, Vec<LineError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(line_no = idx + 1, %error, "skipping malformed line");
                errors.push(LineError {
                    line_no: idx + 1,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    (records, errors)
}

/// Format a `word<TAB>transcript` line.
pub fn format_record(word: &str, transcript: &Transcript) -> String {
    format!("{word}\t{transcript}")
}

//! Dictionary data model.
//!
//! `DictRecord` is one `word<TAB>transcript` line. `PronEntry` carries the
//! per-word state the compound pass mutates (frequency, transcript variants,
//! compound elements). `ComponentSet` holds attested modifiers or heads.

mod components;
mod entry;
mod record;
mod transcript;

pub use components::ComponentSet;
pub use entry::{PronDictionary, PronEntry};
pub use record::{format_record, parse_line, parse_records, DictRecord, LineError};
pub use transcript::Transcript;

/// Why a single input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected word<TAB>transcript, found {0} tab-separated fields")]
    FieldCount(usize),

    #[error("empty word")]
    EmptyWord,

    #[error("empty transcript")]
    EmptyTranscript,
}

//! Grapheme/phoneme mapping: learning the table and aligning words with it.
//!
//! Build a [`MappingTable`] once per run (seed pass, then extension pass),
//! then call [`align`] per word. [`align_dictionary`] aligns a whole word list
//! and collects the pair statistics used to spot transcription errors.

mod align;
pub mod config;
mod report;
mod table;

pub use align::{align, AlignError, Alignment, AlignmentPair, AlignmentWarning};
pub use config::{default_mappings, AlignmentHints, MappingConfigError, SpecialMappings};
pub use report::{align_dictionary, AlignmentReport, MappingCount, SuspectedError};
pub use table::{MappingTable, PairCounts};

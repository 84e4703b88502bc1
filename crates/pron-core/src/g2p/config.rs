//! Fixed grapheme/phoneme tables merged into every learned mapping table.
//!
//! The defaults are embedded from `default_mappings.toml`. A custom TOML with
//! the same layout can be parsed with [`parse_mappings_toml`]. All strings are
//! NFD-normalized on load so they compare equal to normalized dictionary data.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::{grapheme_len, nfd, normalize_transcript};

pub const DEFAULT_MAPPINGS_TOML: &str = include_str!("default_mappings.toml");

/// Returns the embedded default mappings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_MAPPINGS_TOML
}

/// The embedded default tables, parsed once.
pub fn default_mappings() -> &'static SpecialMappings {
    static INSTANCE: OnceLock<SpecialMappings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_mappings_toml(DEFAULT_MAPPINGS_TOML).expect("default mappings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty grapheme in [{0}]")]
    EmptyGrapheme(&'static str),
    #[error("cluster {0:?} has no realizations")]
    EmptyRealizations(String),
    #[error("{cluster:?} in alignment.{list} must have {expected} characters")]
    ClusterLength {
        cluster: String,
        list: &'static str,
        expected: usize,
    },
}

#[derive(Deserialize)]
struct RawMappings {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    vowels: RawVowels,
    #[serde(default)]
    clusters: BTreeMap<String, Vec<String>>,
    alignment: RawAlignment,
    #[serde(default)]
    known_rare: RawKnownRare,
}

#[derive(Deserialize)]
struct RawVowels {
    length_mark: String,
    short: Vec<String>,
}

#[derive(Deserialize)]
struct RawAlignment {
    #[serde(default)]
    two_token_graphemes: Vec<String>,
    #[serde(default)]
    trigrams: Vec<String>,
    #[serde(default)]
    digraphs: Vec<String>,
    #[serde(default)]
    droppable_finals: Vec<String>,
}

#[derive(Deserialize, Default)]
struct RawKnownRare {
    #[serde(default)]
    pairs: Vec<(String, String)>,
}

/// Grapheme clusters the aligner treats specially. Stored in every
/// [`MappingTable`](super::MappingTable) so alignment only needs the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentHints {
    pub two_token_graphemes: BTreeSet<String>,
    pub trigrams: BTreeSet<String>,
    pub digraphs: BTreeSet<String>,
    pub droppable_finals: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialMappings {
    /// (grapheme, source grapheme whose candidates it inherits)
    pub aliases: Vec<(String, String)>,
    pub short_vowels: BTreeSet<String>,
    pub length_mark: String,
    pub clusters: BTreeMap<String, Vec<String>>,
    pub hints: AlignmentHints,
    /// (grapheme cluster, phoneme cluster) pairs never reported as errors.
    pub known_rare: BTreeSet<(String, String)>,
}

impl SpecialMappings {
    /// Long counterpart of a short vowel, or short counterpart of a long one.
    pub fn length_partner(&self, phoneme: &str) -> Option<String> {
        if self.short_vowels.contains(phoneme) {
            return Some(format!("{phoneme}{}", self.length_mark));
        }
        phoneme
            .strip_suffix(self.length_mark.as_str())
            .filter(|short| self.short_vowels.contains(*short))
            .map(str::to_string)
    }

    pub fn is_known_rare(&self, grapheme: &str, phonemes: &str) -> bool {
        self.known_rare
            .contains(&(grapheme.to_string(), phonemes.to_string()))
    }
}

/// Parse and validate a mappings TOML document.
pub fn parse_mappings_toml(toml_str: &str) -> Result<SpecialMappings, MappingConfigError> {
    let raw: RawMappings =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    let mut aliases = Vec::with_capacity(raw.aliases.len());
    for (grapheme, source) in raw.aliases {
        let (grapheme, source) = (nfd(grapheme.trim()), nfd(source.trim()));
        if grapheme.is_empty() || source.is_empty() {
            return Err(MappingConfigError::EmptyGrapheme("aliases"));
        }
        aliases.push((grapheme, source));
    }

    let mut clusters = BTreeMap::new();
    for (grapheme, realizations) in raw.clusters {
        let grapheme = nfd(grapheme.trim());
        if grapheme.is_empty() {
            return Err(MappingConfigError::EmptyGrapheme("clusters"));
        }
        let realizations: Vec<String> = realizations
            .iter()
            .map(|r| normalize_transcript(r))
            .filter(|r| !r.is_empty())
            .collect();
        if realizations.is_empty() {
            return Err(MappingConfigError::EmptyRealizations(grapheme));
        }
        clusters.insert(grapheme, realizations);
    }

    let hints = AlignmentHints {
        two_token_graphemes: grapheme_list(
            raw.alignment.two_token_graphemes,
            "two_token_graphemes",
            1,
        )?,
        trigrams: grapheme_list(raw.alignment.trigrams, "trigrams", 3)?,
        digraphs: grapheme_list(raw.alignment.digraphs, "digraphs", 2)?,
        droppable_finals: grapheme_list(raw.alignment.droppable_finals, "droppable_finals", 1)?,
    };

    let known_rare = raw
        .known_rare
        .pairs
        .iter()
        .map(|(g, p)| (nfd(g.trim()), normalize_transcript(p)))
        .collect();

    Ok(SpecialMappings {
        aliases,
        short_vowels: raw.vowels.short.iter().map(|v| nfd(v.trim())).collect(),
        length_mark: nfd(&raw.vowels.length_mark),
        clusters,
        hints,
        known_rare,
    })
}

fn grapheme_list(
    items: Vec<String>,
    list: &'static str,
    expected: usize,
) -> Result<BTreeSet<String>, MappingConfigError> {
    let mut set = BTreeSet::new();
    for item in items {
        let cluster = nfd(item.trim());
        if grapheme_len(&cluster) != expected {
            return Err(MappingConfigError::ClusterLength {
                cluster,
                list,
                expected,
            });
        }
        set.insert(cluster);
    }
    Ok(set)
}

//! Compound segmentation.
//!
//! A word is split into a modifier and a head when both halves are attested
//! in the component sets; each half is then split again. Leaves of the
//! resulting binary tree are the compound's components, and
//! [`component_transcripts`] recovers a transcript for each of them from the
//! word's alignment.

mod analysis;
mod transcribe;

use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::debug;

use crate::dict::ComponentSet;
use crate::settings::CompoundSettings;
use crate::unicode::{graphemes, normalize_word};

pub use analysis::{
    analyze_compounds, compound_report, multi_transcript_report, non_compound_records,
    CompoundStats,
};
pub use transcribe::{component_transcripts, ComponentTranscript};

/// Words that look like compounds of attested parts but are not (fé-lag).
const NO_SPLIT_WORDS: [&str; 5] = ["félag", "félaga", "félags", "félagsins", "félögum"];

static NO_SPLIT: LazyLock<HashSet<String>> =
    LazyLock::new(|| NO_SPLIT_WORDS.iter().map(|w| normalize_word(w)).collect());

/// Binary decomposition of a word. In-order leaves concatenate to the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundTree {
    Leaf(String),
    Node {
        word: String,
        modifier: Box<CompoundTree>,
        head: Box<CompoundTree>,
    },
}

impl CompoundTree {
    pub fn word(&self) -> &str {
        match self {
            Self::Leaf(word) | Self::Node { word, .. } => word,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Components in order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf(word) => out.push(word),
            Self::Node { modifier, head, .. } => {
                modifier.collect_leaves(out);
                head.collect_leaves(out);
            }
        }
    }
}

/// Splits words using attested modifier and head sets.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    modifiers: &'a ComponentSet,
    heads: &'a ComponentSet,
    min_compound_len: usize,
    min_split_index: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(
        modifiers: &'a ComponentSet,
        heads: &'a ComponentSet,
        settings: &CompoundSettings,
    ) -> Self {
        Self {
            modifiers,
            heads,
            min_compound_len: settings.min_compound_len,
            min_split_index: settings.min_split_index,
        }
    }

    /// Split `word` (already normalized) into (modifier, head).
    ///
    /// Split points are tried from the left, so the shortest attested
    /// modifier with an attested head wins. A head without an attested
    /// modifier never produces a split.
    pub fn find_split(&self, word: &str) -> Option<(String, String)> {
        let chars = graphemes(word);
        let len = chars.len();
        if len <= self.min_compound_len || NO_SPLIT.contains(word) {
            return None;
        }

        let mut orphan_head: Option<String> = None;
        for n in self.min_split_index..len.saturating_sub(2) {
            let head = chars[n..].concat();
            if !self.heads.contains(&head) {
                continue;
            }
            let modifier = chars[..n].concat();
            if self.modifiers.contains(&modifier) {
                return Some((modifier, head));
            }
            if orphan_head.is_none() {
                orphan_head = Some(head);
            }
        }

        if let Some(head) = orphan_head {
            debug!(word, head = %head, "head attested without modifier, not splitting");
        }
        None
    }

    /// Recursively split `word` until no part splits further.
    pub fn segment(&self, word: &str) -> CompoundTree {
        self.build(normalize_word(word))
    }

    fn build(&self, word: String) -> CompoundTree {
        match self.find_split(&word) {
            Some((modifier, head)) => CompoundTree::Node {
                modifier: Box::new(self.build(modifier)),
                head: Box::new(self.build(head)),
                word,
            },
            None => CompoundTree::Leaf(word),
        }
    }
}

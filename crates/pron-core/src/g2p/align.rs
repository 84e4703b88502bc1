//! Greedy left-to-right grapheme/phoneme alignment.
//!
//! The aligner walks the word once, keeping a phoneme cursor. Table matches
//! act as anchors: whenever a grapheme (or fixed cluster) is matched to the
//! phonemes at the cursor, everything between the previous anchor and this one
//! is flushed as a single gap pair. Anything left at the end becomes one
//! terminal pair. Every grapheme and every phoneme token ends up in exactly one
//! pair, in order.
//!
//! This is not a minimal-edit alignment. It is right on the common case and
//! degrades to coarse gap pairs otherwise.

use serde::Serialize;

use super::table::MappingTable;
use crate::dict::Transcript;
use crate::unicode::{graphemes, normalize_word};

/// One graphone: a grapheme cluster and the phoneme cluster it realizes.
/// Either side may be empty, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AlignmentPair {
    pub grapheme: String,
    /// Space-joined phoneme tokens.
    pub phonemes: String,
}

impl AlignmentPair {
    pub fn new(grapheme: &str, phonemes: &str) -> Self {
        Self {
            grapheme: grapheme.to_string(),
            phonemes: phonemes.to_string(),
        }
    }
}

/// A suspicious alignment, surfaced for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AlignmentWarning {
    /// The word ends in a consonant aligned to nothing, which usually means
    /// the transcript lost its final phoneme.
    DroppedFinal { grapheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub pairs: Vec<AlignmentPair>,
    pub warning: Option<AlignmentWarning>,
}

impl Alignment {
    /// Concatenated grapheme sides; equals the aligned word.
    pub fn graphemes(&self) -> String {
        self.pairs.iter().map(|p| p.grapheme.as_str()).collect()
    }

    /// Space-joined non-empty phoneme sides; equals the aligned transcript.
    pub fn phonemes(&self) -> String {
        self.pairs
            .iter()
            .filter(|p| !p.phonemes.is_empty())
            .map(|p| p.phonemes.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("cannot align an empty word")]
    EmptyWord,
    #[error("cannot align an empty transcript")]
    EmptyTranscript,
}

/// Align `word` to `transcript` using the licensed pairs in `table`.
pub fn align(
    word: &str,
    transcript: &Transcript,
    table: &MappingTable,
) -> Result<Alignment, AlignError> {
    let word = normalize_word(word);
    if word.is_empty() {
        return Err(AlignError::EmptyWord);
    }
    if transcript.is_empty() {
        return Err(AlignError::EmptyTranscript);
    }

    let chars = graphemes(&word);
    let pairs = Aligner::new(&chars, transcript.tokens(), table).run();
    let warning = dropped_final(&chars, &pairs, table);
    Ok(Alignment { pairs, warning })
}

fn dropped_final(
    chars: &[&str],
    pairs: &[AlignmentPair],
    table: &MappingTable,
) -> Option<AlignmentWarning> {
    let last = pairs.last()?;
    let n = chars.len();
    if last.phonemes.is_empty()
        && table.hints().droppable_finals.contains(&last.grapheme)
        && n > 3
        && chars[n - 2] != chars[n - 1]
    {
        return Some(AlignmentWarning::DroppedFinal {
            grapheme: last.grapheme.clone(),
        });
    }
    None
}

struct Aligner<'a> {
    chars: &'a [&'a str],
    tokens: &'a [String],
    table: &'a MappingTable,
    pairs: Vec<AlignmentPair>,
    /// First grapheme not yet in a pair.
    g_anchor: usize,
    /// First phoneme token not yet in a pair.
    p_anchor: usize,
}

impl<'a> Aligner<'a> {
    fn new(chars: &'a [&'a str], tokens: &'a [String], table: &'a MappingTable) -> Self {
        Self {
            chars,
            tokens,
            table,
            pairs: Vec::with_capacity(chars.len() + 1),
            g_anchor: 0,
            p_anchor: 0,
        }
    }

    fn run(mut self) -> Vec<AlignmentPair> {
        let n = self.chars.len();
        let m = self.tokens.len();
        let mut g = 0;
        let mut p = 0;

        while g < n {
            let c = self.chars[g];

            if p >= m {
                self.finish_exhausted_transcript();
                break;
            }

            if !self.table.contains(c) {
                // Nothing to anchor on yet; let the phoneme cursor move along.
                p += 1;
                g += 1;
                continue;
            }

            if self.table.hints().two_token_graphemes.contains(c) && self.matches_at(c, p, 2) {
                self.record(g, 1, p, 2);
                p += 2;
                g += 1;
                continue;
            }

            if let Some((glen, plen)) = self.match_cluster(g, p) {
                self.record(g, glen, p, plen);
                p += plen;
                g += glen;
                continue;
            }

            if self.table.licenses(c, &self.tokens[p]) {
                self.record(g, 1, p, 1);
                p += 1;
                g += 1;
                continue;
            }

            // The token after the cursor matches: the one at the cursor was
            // inserted, unless the next grapheme accounts for it.
            if p + 1 < m && self.table.licenses(c, &self.tokens[p + 1]) {
                let next_explains =
                    g + 1 < n && self.table.licenses(self.chars[g + 1], &self.tokens[p]);
                if !next_explains {
                    self.record(g, 1, p + 1, 1);
                    p += 2;
                }
                g += 1;
                continue;
            }

            // Graphemes ran ahead of phonemes: probe the phoneme at the
            // grapheme index, then one after it.
            if g > p {
                if n - g <= m - p {
                    let probe = [g, g + 1]
                        .into_iter()
                        .find(|&q| q < m && self.table.licenses(c, &self.tokens[q]));
                    if let Some(q) = probe {
                        self.record(g, 1, q, 1);
                        p = q + 1;
                    }
                }
                g += 1;
                continue;
            }

            if g == n - 1 {
                break;
            }
            g += 1;
        }

        self.flush_gap(n, m);
        self.pairs
    }

    /// Fixed trigram or digraph at `g` realized by the phonemes at `p`.
    /// Returns (graphemes consumed, tokens consumed).
    fn match_cluster(&self, g: usize, p: usize) -> Option<(usize, usize)> {
        let hints = self.table.hints();
        for glen in [3, 2] {
            if g + glen > self.chars.len() {
                continue;
            }
            let cluster: String = self.chars[g..g + glen].concat();
            let listed = match glen {
                3 => hints.trigrams.contains(&cluster),
                _ => hints.digraphs.contains(&cluster),
            };
            if !listed || !self.table.contains(&cluster) {
                continue;
            }
            for plen in [3, 1] {
                if self.matches_at(&cluster, p, plen) {
                    return Some((glen, plen));
                }
            }
        }
        None
    }

    /// Whether the `len` tokens at `p` form a licensed realization of `grapheme`.
    fn matches_at(&self, grapheme: &str, p: usize, len: usize) -> bool {
        p + len <= self.tokens.len()
            && self
                .table
                .licenses(grapheme, &self.tokens[p..p + len].join(" "))
    }

    /// The transcript ran out before the word. Anchor the last grapheme on the
    /// last phoneme if the table allows it; otherwise one terminal pair takes
    /// the rest.
    fn finish_exhausted_transcript(&mut self) {
        let n = self.chars.len();
        let m = self.tokens.len();
        if self.p_anchor < m && self.table.licenses(self.chars[n - 1], &self.tokens[m - 1]) {
            self.record(n - 1, 1, m - 1, 1);
        }
    }

    /// Pair the graphemes and tokens between the anchors and the given ends.
    fn flush_gap(&mut self, g_end: usize, p_end: usize) {
        let grapheme = self.chars[self.g_anchor..g_end].concat();
        let phonemes = self.tokens[self.p_anchor..p_end].join(" ");
        if !grapheme.is_empty() || !phonemes.is_empty() {
            self.pairs.push(AlignmentPair { grapheme, phonemes });
        }
        self.g_anchor = g_end;
        self.p_anchor = p_end;
    }

    /// Flush the gap up to (g, p), then pair `glen` graphemes at `g` with
    /// `plen` tokens at `p`.
    fn record(&mut self, g: usize, glen: usize, p: usize, plen: usize) {
        self.flush_gap(g, p);
        self.pairs.push(AlignmentPair {
            grapheme: self.chars[g..g + glen].concat(),
            phonemes: self.tokens[p..p + plen].join(" "),
        });
        self.g_anchor = g + glen;
        self.p_anchor = p + plen;
    }
}

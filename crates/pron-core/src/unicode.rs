//! Unicode normalization for words and transcripts.
//!
//! Every word and transcript is decomposed (NFD) before any character-level
//! comparison. Indexing into words is done over extended grapheme clusters, so
//! a decomposed `é` (`e` + U+0301) is still one orthographic unit.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercase and decompose a word.
pub fn normalize_word(s: &str) -> String {
    s.trim().to_lowercase().nfd().collect()
}

/// Decompose a transcript and collapse its whitespace to single spaces.
pub fn normalize_transcript(s: &str) -> String {
    let decomposed: String = s.nfd().collect();
    decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decompose an arbitrary configuration string (grapheme or phoneme cluster).
pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

/// Recompose for writing output files.
pub fn to_output(s: &str) -> String {
    s.nfc().collect()
}

/// Extended grapheme clusters of `s`.
pub fn graphemes(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Dag"), "dag");
        assert_eq!(normalize_word(" Ás "), "a\u{301}s");
        assert_eq!(normalize_word("ö"), "o\u{308}");
    }

    #[test]
    fn test_normalize_transcript() {
        assert_eq!(normalize_transcript("  t  a:\tG "), "t a: G");
        assert_eq!(normalize_transcript(""), "");
    }

    #[test]
    fn test_graphemes_keep_decomposed_accents_together() {
        let w = normalize_word("félag");
        assert_eq!(graphemes(&w), vec!["f", "e\u{301}", "l", "a", "g"]);
        assert_eq!(grapheme_len(&w), 5);
    }

    #[test]
    fn test_to_output_recomposes() {
        assert_eq!(to_output(&normalize_word("Þórður")), "þórður");
    }
}

use std::fmt;

use serde::Serialize;

use crate::unicode::normalize_transcript;

/// An ordered sequence of phoneme tokens.
///
/// The canonical string form joins the tokens with one space, so
/// `Transcript::parse(s).to_string()` is `s` with its whitespace collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Transcript {
    tokens: Vec<String>,
}

impl Transcript {
    /// Parse a whitespace-separated transcript (NFD-normalized).
    pub fn parse(s: &str) -> Self {
        let normalized = normalize_transcript(s);
        Self {
            tokens: normalized.split(' ').filter(|t| !t.is_empty()).map(String::from).collect(),
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(
            &tokens
                .into_iter()
                .map(|t| t.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for Transcript {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Transcript> for String {
    fn from(t: Transcript) -> Self {
        t.to_string()
    }
}

use std::collections::HashMap;

use serde::Serialize;

use super::diff::DiffTuple;

/// One distinct difference and the words it was seen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub diff: DiffTuple,
    pub words: Vec<String>,
}

impl DiffStat {
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Dictionary-wide diff statistics. A diff and its reverse count as the same
/// entry, kept in the orientation first seen.
#[derive(Debug, Clone, Default)]
pub struct DiffStats {
    entries: Vec<DiffStat>,
    index: HashMap<DiffTuple, usize>,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diff: &DiffTuple, word: &str) {
        let slot = self
            .index
            .get(diff)
            .or_else(|| self.index.get(&diff.reversed()))
            .copied();
        match slot {
            Some(i) => self.entries[i].words.push(word.to_string()),
            None => {
                self.index.insert(diff.clone(), self.entries.len());
                self.entries.push(DiffStat {
                    diff: diff.clone(),
                    words: vec![word.to_string()],
                });
            }
        }
    }

    pub fn get(&self, diff: &DiffTuple) -> Option<&DiffStat> {
        self.index
            .get(diff)
            .or_else(|| self.index.get(&diff.reversed()))
            .map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending word count; ties keep first-seen order.
    pub fn sorted(&self) -> Vec<&DiffStat> {
        let mut sorted: Vec<&DiffStat> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count().cmp(&a.count()));
        sorted
    }
}

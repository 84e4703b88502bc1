use std::collections::HashSet;

use crate::unicode::normalize_word;

/// Attested compound components (modifiers or heads), one per line.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    items: HashSet<String>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one component per line; blank lines and `#` comments are ignored.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect()
    }

    pub fn insert(&mut self, component: &str) -> bool {
        let normalized = normalize_word(component);
        if normalized.is_empty() {
            return false;
        }
        self.items.insert(normalized)
    }

    pub fn contains(&self, component: &str) -> bool {
        self.items.contains(component)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

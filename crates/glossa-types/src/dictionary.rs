//! Allow-list of strings that are accepted without translation.
//!
//! Typically identifiers, product names, and technical terms that read the
//! same in every locale.

use std::collections::HashSet;

/// An immutable set of exact string values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashSet<String>,
}

impl Dictionary {
    /// Parse one entry per line. Lines are whitespace-trimmed; blank lines
    /// are skipped and duplicates collapse.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn contains(&self, s: &str) -> bool {
        self.entries.contains(s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

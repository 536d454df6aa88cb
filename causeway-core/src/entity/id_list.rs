use std::fmt;

use serde::{Deserialize, Serialize};

/// Adjacency field: a set of entity ids, stored as comma-delimited text.
///
/// Parsing trims whitespace around each token and discards empty tokens,
/// so `"a, b,,c "` and `"a,b,c"` denote the same set. Token order is
/// preserved on render but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct IdList(Vec<String>);

impl IdList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a comma-delimited cell value into individual id tokens.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Append `id` only if it is not already present as an exact token.
    /// Returns `true` if the list changed.
    pub fn push_unique(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id.to_string());
        true
    }

    /// Exact, case-sensitive token membership.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|t| t == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders the comma-delimited storage form.
impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl From<String> for IdList {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<IdList> for String {
    fn from(list: IdList) -> Self {
        list.to_string()
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl FromIterator<String> for IdList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IdList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

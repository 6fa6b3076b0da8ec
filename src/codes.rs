use serde::Deserialize;
use std::collections::HashMap;

/// Maps full state names to their postal abbreviations.
///
/// Stored as a plain JSON object:
/// ```json
/// {
///   "Texas": "TX",
///   "Ohio": "OH"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StateCodes {
    entries: HashMap<String, String>,
}

impl StateCodes {
    /// Returns the raw abbreviation for `name`. Keys are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the join key for `name`: the abbreviation, lowercased.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_lowercase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StateCodes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

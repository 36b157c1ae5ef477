//! Extraction paths over raw JSON documents.

use serde_json::Value;

/// One step of a field extraction path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Descend into an object key.
    Key(&'static str),
    /// Take the first element of an array.
    First,
    /// Ranked preference: the first array element whose `tag` equals
    /// `value`, falling back to the first element when none matches.
    /// Used for e.g. choosing the official name entry among several.
    PreferTagged {
        tag: &'static str,
        value: &'static str,
    },
    /// The first array element whose `tag` equals `value`; no fallback.
    /// Used for e.g. selecting the phone entry of a telecom list.
    MatchTagged {
        tag: &'static str,
        value: &'static str,
    },
}

/// A sequence of steps from the document root to a single value.
///
/// Paths are total: any missing key, empty list, or shape mismatch along
/// the way resolves to `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    steps: Vec<PathStep>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &'static str) -> Self {
        self.steps.push(PathStep::Key(key));
        self
    }

    pub fn first(mut self) -> Self {
        self.steps.push(PathStep::First);
        self
    }

    pub fn prefer_tagged(mut self, tag: &'static str, value: &'static str) -> Self {
        self.steps.push(PathStep::PreferTagged { tag, value });
        self
    }

    pub fn match_tagged(mut self, tag: &'static str, value: &'static str) -> Self {
        self.steps.push(PathStep::MatchTagged { tag, value });
        self
    }

    /// Walk the path from `root`, resolving to the addressed value.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for step in &self.steps {
            current = match step {
                PathStep::Key(key) => current.get(key)?,
                PathStep::First => current.as_array()?.first()?,
                PathStep::PreferTagged { tag, value } => {
                    let items = current.as_array()?;
                    items
                        .iter()
                        .find(|item| tag_matches(item, tag, value))
                        .or_else(|| items.first())?
                }
                PathStep::MatchTagged { tag, value } => current
                    .as_array()?
                    .iter()
                    .find(|item| tag_matches(item, tag, value))?,
            };
        }
        Some(current)
    }

    /// Resolve to a non-empty string value.
    pub fn resolve_str<'a>(&self, root: &'a Value) -> Option<&'a str> {
        self.resolve(root)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn tag_matches(item: &Value, tag: &str, expected: &str) -> bool {
    item.get(tag).and_then(Value::as_str) == Some(expected)
}

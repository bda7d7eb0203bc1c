use serde::{Deserialize, Serialize};

use super::{PredicateError, PredicateResult};

/// Keys a predicate looks up: one key, or an ordered group.
///
/// Group order is significant and duplicates are kept; each occurrence is
/// looked up (and captured) on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchSpec {
    Single(String),
    Group(Vec<String>),
}

impl MatchSpec {
    pub fn single<S: Into<String>>(key: S) -> Self {
        MatchSpec::Single(key.into())
    }

    pub fn group<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MatchSpec::Group(keys.into_iter().map(Into::into).collect())
    }

    pub fn keys(&self) -> &[String] {
        match self {
            MatchSpec::Single(key) => std::slice::from_ref(key),
            MatchSpec::Group(keys) => keys,
        }
    }

    /// Number of captures a successful match appends.
    pub fn arity(&self) -> usize {
        self.keys().len()
    }

    pub fn validate(&self) -> PredicateResult<()> {
        match self.keys().iter().position(|key| key.is_empty()) {
            Some(index) => Err(PredicateError::EmptyKey { index }),
            None => Ok(()),
        }
    }
}

impl From<&str> for MatchSpec {
    fn from(key: &str) -> Self {
        MatchSpec::single(key)
    }
}

impl From<String> for MatchSpec {
    fn from(key: String) -> Self {
        MatchSpec::Single(key)
    }
}

impl From<Vec<String>> for MatchSpec {
    fn from(keys: Vec<String>) -> Self {
        MatchSpec::Group(keys)
    }
}

impl<const N: usize> From<[&str; N]> for MatchSpec {
    fn from(keys: [&str; N]) -> Self {
        MatchSpec::group(keys)
    }
}

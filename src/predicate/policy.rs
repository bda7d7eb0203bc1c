use serde::{Deserialize, Serialize};

/// How a present parameter is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Present is enough, the empty string included.
    #[default]
    Lenient,
    /// Present and non-empty.
    Strict,
}

impl MatchPolicy {
    #[inline]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            MatchPolicy::Lenient => true,
            MatchPolicy::Strict => !value.is_empty(),
        }
    }
}

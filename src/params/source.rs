use hashbrown::HashMap as FastHashMap;
use std::collections::{BTreeMap, HashMap};

/// Read-only view over the resolved parameters of one request.
///
/// Each key resolves to at most one value. Lookups are exact: no trimming,
/// case folding or coercion happens on either side.
pub trait ParamSource {
    fn param(&self, key: &str) -> Option<&str>;
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param(&self, key: &str) -> Option<&str> {
        (**self).param(key)
    }
}

impl<S: std::hash::BuildHasher> ParamSource for HashMap<String, String, S> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: std::hash::BuildHasher> ParamSource for FastHashMap<String, String, S> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Owned parameter mapping handed over by the request parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: FastHashMap<Box<str>, Box<str>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: FastHashMap::with_capacity(capacity),
        }
    }

    /// Last write wins when a key repeats.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Box<str>>
    where
        K: Into<Box<str>>,
        V: Into<Box<str>>,
    {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| &**v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamSource for RequestParams {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<Box<str>>,
    V: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut params = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

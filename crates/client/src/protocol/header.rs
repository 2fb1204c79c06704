//! Ordered, multi-valued header storage.
//!
//! [`Headers`] keeps every value a header name was given, in arrival order, and
//! remembers the name with the casing it was first seen with. Lookups compare
//! names ASCII case-insensitively, so `content-type` finds `Content-Type`.

use std::fmt;

/// A single header name together with all of its values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

/// An ordered header multimap.
///
/// Names iterate in first-insertion order, values of one name in the order
/// they were appended.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<HeaderEntry>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends `value` under `name`, after any values the name already has.
    ///
    /// If the name is already present the stored casing is kept.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String> + AsRef<str>,
        V: Into<String>,
    {
        match self.position(name.as_ref()) {
            Some(index) => self.entries[index].values.push(value.into()),
            None => self.entries.push(HeaderEntry { name: name.into(), values: vec![value.into()] }),
        }
    }

    /// Replaces all values of `name` with `value`.
    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String> + AsRef<str>,
        V: Into<String>,
    {
        match self.position(name.as_ref()) {
            Some(index) => self.entries[index].values = vec![value.into()],
            None => self.entries.push(HeaderEntry { name: name.into(), values: vec![value.into()] }),
        }
    }

    /// Removes `name` and returns its values, if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.position(name).map(|index| self.entries.remove(index).values)
    }

    /// Returns the first value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value of `name`, in arrival order. Empty if absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        match self.position(name) {
            Some(index) => &self.entries[index].values,
            None => &[],
        }
    }

    /// Returns all values of `name` joined with `", "`.
    pub fn get_line(&self, name: &str) -> Option<String> {
        self.position(name).map(|index| self.entries[index].values.join(", "))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, values)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String> + AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

/// Converts an `http::HeaderMap`, keeping every value of every name.
///
/// Values that are not visible ASCII are converted lossily.
impl From<&http::HeaderMap> for Headers {
    fn from(map: &http::HeaderMap) -> Self {
        let mut headers = Headers::with_capacity(map.keys_len());
        for (name, value) in map {
            headers.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
        }
        headers
    }
}

//! The ordered set of headers to emit.

/// Headers in emission order.
///
/// Insertion order is preserved and duplicates are rejected. Excluded
/// headers are never admitted, whoever asks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRegistry {
    headers: Vec<String>,
    excluded: Vec<String>,
}

impl HeaderRegistry {
    /// Start a registry from the seed headers, in order.
    pub fn new<S: AsRef<str>>(seed: &[S], excluded: &[S]) -> Self {
        let mut registry = HeaderRegistry {
            headers: Vec::with_capacity(seed.len()),
            excluded: excluded.iter().map(|h| h.as_ref().to_string()).collect(),
        };
        for header in seed {
            registry.insert(header.as_ref());
        }
        registry
    }

    /// Append a header unless it is already present or excluded.
    ///
    /// Returns `true` if the header was added.
    pub fn insert(&mut self, header: &str) -> bool {
        if self.contains(header) || self.is_excluded(header) {
            return false;
        }
        self.headers.push(header.to_string());
        true
    }

    pub fn contains(&self, header: &str) -> bool {
        self.headers.iter().any(|h| h == header)
    }

    pub fn is_excluded(&self, header: &str) -> bool {
        self.excluded.iter().any(|h| h == header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.headers
    }
}

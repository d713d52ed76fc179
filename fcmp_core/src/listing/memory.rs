use super::VecCursor;
use fcmp_common::{DirectoryCursor, DirectoryLister, FcError};
use std::collections::HashMap;

/// Lister backed by fixed listings keyed on the exact pattern text.
///
/// Entries are returned in the order they were given, dot entries included.
#[derive(Debug, Default, Clone)]
pub struct MemoryLister {
    listings: HashMap<String, Vec<String>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing<I, S>(mut self, pattern: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(pattern, names);
        self
    }

    pub fn insert<I, S>(&mut self, pattern: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listings
            .insert(pattern.to_string(), names.into_iter().map(Into::into).collect());
    }
}

impl DirectoryLister for MemoryLister {
    fn open(&self, pattern: &str) -> Result<Box<dyn DirectoryCursor>, FcError> {
        match self.listings.get(pattern) {
            Some(names) if !names.is_empty() => Ok(Box::new(VecCursor::new(names.clone()))),
            _ => Err(FcError::NotFound(pattern.to_string())),
        }
    }
}

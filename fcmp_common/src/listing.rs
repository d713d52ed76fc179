use crate::{FcError, MatchOutcome};

/// Position in a directory listing produced by [`DirectoryLister::open`].
///
/// A freshly opened cursor already points at its first entry. The listing is
/// closed when the cursor is dropped.
pub trait DirectoryCursor {
    /// Name of the entry the cursor points at, `None` once exhausted
    fn current_name(&self) -> Option<&str>;

    /// Moves to the next entry; returns `false` when there is none
    fn advance(&mut self) -> bool;
}

/// Source of directory listings for wildcard patterns
///
/// This lets the matcher run against the local filesystem, an in-memory
/// fixture, or any other enumeration without knowing which.
pub trait DirectoryLister {
    /// Opens a listing of the entries matching `pattern`.
    ///
    /// Returns [`FcError::NotFound`] when nothing matches.
    fn open(&self, pattern: &str) -> Result<Box<dyn DirectoryCursor>, FcError>;
}

/// Compares one resolved pair of paths
pub trait PairComparator {
    fn compare(&mut self, left: &str, right: &str) -> MatchOutcome;
}

impl<F> PairComparator for F
where
    F: FnMut(&str, &str) -> MatchOutcome,
{
    fn compare(&mut self, left: &str, right: &str) -> MatchOutcome {
        self(left, right)
    }
}

/// Receives the notices a wildcard run survives.
///
/// Only two kinds are reported: [`FcError::NotFound`] for a pattern that
/// could not be opened and [`FcError::Desynchronized`] for a file whose
/// counterpart is missing.
pub trait Diagnostics {
    fn report(&mut self, notice: &FcError);
}

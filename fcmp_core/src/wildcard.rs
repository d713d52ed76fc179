use crate::path::{append, extension_of, find_extension, remove_last_segment};
use fcmp_common::{
    Diagnostics, DirectoryCursor, DirectoryLister, FcError, MatchOutcome, PairComparator,
};
use tracing::{debug, info};

/// Whether `pattern` contains `*` or `?`
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// Whether `pattern` has the exact shape `*.<ext>` with a wildcard-free `<ext>`.
///
/// The whole argument is tested, so `dir\*.c` is not extension-only.
pub fn is_extension_only(pattern: &str) -> bool {
    pattern
        .strip_prefix("*.")
        .is_some_and(|ext| !has_wildcard(ext))
}

fn is_dots(name: Option<&str>) -> bool {
    matches!(name, Some(".") | Some(".."))
}

/// Replaces the final segment of `path` with `name`
fn rebuild(path: &str, name: &str) -> Result<String, FcError> {
    let (dir, _) = remove_last_segment(path);
    append(&dir, name)
}

/// Expands wildcard arguments into file pairs and folds their outcomes
pub struct WildcardMatcher<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> WildcardMatcher<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    /// Compares two command-line arguments, expanding whichever side has wildcards.
    ///
    /// Path operation failures abort the run and propagate. A pattern that
    /// matches nothing is reported to `diagnostics` and yields
    /// [`MatchOutcome::CannotFind`].
    pub fn compare_args(
        &self,
        left: &str,
        right: &str,
        comparator: &mut dyn PairComparator,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<MatchOutcome, FcError> {
        match (has_wildcard(left), has_wildcard(right)) {
            (true, true) => self.compare_both(left, right, comparator, diagnostics),
            (true, false) => self.compare_one_side(left, right, false, comparator, diagnostics),
            (false, true) => self.compare_one_side(right, left, true, comparator, diagnostics),
            (false, false) => Ok(comparator.compare(left, right)),
        }
    }

    fn open(
        &self,
        pattern: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Option<Box<dyn DirectoryCursor>> {
        match self.lister.open(pattern) {
            Ok(cursor) => Some(cursor),
            Err(e) => {
                debug!("Cannot open listing for {}: {}", pattern, e);
                diagnostics.report(&FcError::NotFound(pattern.to_string()));
                None
            }
        }
    }

    /// Compares every entry of `pattern` against the literal `fixed` path.
    ///
    /// `wild_right` keeps the pattern on the side it was given, so the
    /// comparator always sees the arguments in command-line order.
    pub fn compare_one_side(
        &self,
        pattern: &str,
        fixed: &str,
        wild_right: bool,
        comparator: &mut dyn PairComparator,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<MatchOutcome, FcError> {
        info!("Expanding {} against {}", pattern, fixed);
        let Some(mut cursor) = self.open(pattern, diagnostics) else {
            return Ok(MatchOutcome::CannotFind);
        };

        let mut outcome = MatchOutcome::Identical;
        let mut path = pattern.to_string();
        loop {
            if let Some(name) = cursor.current_name() {
                if !is_dots(Some(name)) {
                    path = rebuild(&path, name)?;
                    let pair = if wild_right {
                        comparator.compare(fixed, &path)
                    } else {
                        comparator.compare(&path, fixed)
                    };
                    debug!("{} -> {:?}", path, pair);
                    outcome = outcome.fold(pair);
                }
            }
            if !cursor.advance() {
                break;
            }
        }
        Ok(outcome)
    }

    /// Walks both listings in lockstep, pairing entries by position.
    ///
    /// When one listing runs out first and both patterns are extension-only,
    /// the first unpaired entry is reported as [`FcError::Desynchronized`]
    /// and the outcome becomes [`MatchOutcome::CannotFind`].
    pub fn compare_both(
        &self,
        left_pattern: &str,
        right_pattern: &str,
        comparator: &mut dyn PairComparator,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<MatchOutcome, FcError> {
        info!("Pairing {} with {}", left_pattern, right_pattern);
        let Some(mut left) = self.open(left_pattern, diagnostics) else {
            return Ok(MatchOutcome::CannotFind);
        };
        let Some(mut right) = self.open(right_pattern, diagnostics) else {
            return Ok(MatchOutcome::CannotFind);
        };

        let mut outcome = MatchOutcome::Identical;
        let mut left_path = left_pattern.to_string();
        let mut right_path = right_pattern.to_string();
        let mut left_more = true;
        let mut right_more = true;

        'walk: loop {
            while is_dots(left.current_name()) {
                left_more = left.advance();
                if !left_more {
                    break 'walk;
                }
            }
            while is_dots(right.current_name()) {
                right_more = right.advance();
                if !right_more {
                    break 'walk;
                }
            }

            let (Some(left_name), Some(right_name)) = (left.current_name(), right.current_name())
            else {
                break;
            };
            left_path = rebuild(&left_path, left_name)?;
            right_path = rebuild(&right_path, right_name)?;

            let pair = comparator.compare(&left_path, &right_path);
            debug!("{} <-> {} -> {:?}", left_path, right_path, pair);
            outcome = outcome.fold(pair);

            left_more = left.advance();
            right_more = right.advance();
            if !(left_more && right_more) {
                break;
            }
        }

        if left_more != right_more
            && is_extension_only(left_pattern)
            && is_extension_only(right_pattern)
        {
            let (leftover, counterpart) = if left_more {
                (&left, right_pattern)
            } else {
                (&right, left_pattern)
            };
            if let Some(entry) = leftover.current_name() {
                let extension = extension_of(counterpart);
                // The stem may keep inner dots (b.test.cpp), so only the last extension is swapped
                let missing = format!("{}{}", &entry[..find_extension(entry)], extension);
                info!("{} has no counterpart {}", entry, missing);
                diagnostics.report(&FcError::Desynchronized {
                    entry: entry.to_string(),
                    missing,
                    extension: extension.to_string(),
                });
            }
            outcome = MatchOutcome::CannotFind;
        }

        Ok(outcome)
    }
}

use super::VecCursor;
use crate::path::{from_native, is_root, remove_last_segment, to_native, SEPARATOR};
use fcmp_common::{DirectoryCursor, DirectoryLister, FcError};
use glob::{MatchOptions, Pattern};
use std::fs;
use tracing::{debug, warn};

const DOT_ENTRIES: [&str; 2] = [".", ".."];

/// Lists local directory entries matching a `*`/`?` pattern in the final segment.
///
/// Like the classic find-first/find-next API, the listing contains files and
/// directories alike, and `.`/`..` when the pattern matches them outside a
/// root directory. Names are sorted.
#[derive(Debug, Clone)]
pub struct LocalLister {
    case_sensitive: bool,
}

impl LocalLister {
    pub fn new() -> Self {
        Self {
            case_sensitive: !cfg!(windows),
        }
    }

    pub fn with_case_sensitivity(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        }
    }
}

impl Default for LocalLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLister for LocalLister {
    fn open(&self, pattern: &str) -> Result<Box<dyn DirectoryCursor>, FcError> {
        let pattern = from_native(pattern);
        let (dir, segment) = split_pattern(&pattern);
        let matcher = compile_segment(segment)?;
        let options = self.match_options();

        let native_dir = if dir.is_empty() {
            to_native(".")
        } else {
            to_native(&dir)
        };
        let read_dir = fs::read_dir(&native_dir).map_err(|e| {
            debug!("Cannot list {:?}: {}", native_dir, e);
            FcError::NotFound(pattern.clone())
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if matcher.matches_with(&name, options) {
                        names.push(name);
                    }
                }
                Err(e) => warn!("Skipping unreadable entry in {:?}: {}", native_dir, e),
            }
        }
        names.sort();

        if !is_root(&dir) {
            let mut listing: Vec<String> = DOT_ENTRIES
                .iter()
                .filter(|dot| matcher.matches_with(dot, options))
                .map(|dot| dot.to_string())
                .collect();
            listing.append(&mut names);
            names = listing;
        }

        if names.is_empty() {
            return Err(FcError::NotFound(pattern));
        }

        debug!("Pattern {} matched {} entries", pattern, names.len());
        Ok(Box::new(VecCursor::new(names)))
    }
}

/// Splits a pattern into its directory and its final segment
fn split_pattern(pattern: &str) -> (String, &str) {
    let (dir, _) = remove_last_segment(pattern);
    let segment = pattern[dir.len()..].trim_start_matches(char::from(SEPARATOR));
    (dir, segment)
}

/// Compiles a final segment where only `*` and `?` are special
fn compile_segment(segment: &str) -> Result<Pattern, FcError> {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '[' => escaped.push_str("[[]"),
            ']' => escaped.push_str("[]]"),
            _ => escaped.push(c),
        }
    }
    Pattern::new(&escaped).map_err(|e| FcError::MalformedInput(e.to_string()))
}

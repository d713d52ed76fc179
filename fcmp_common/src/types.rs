use serde::{Deserialize, Serialize};

/// Result of comparing one pair of files, or of a whole wildcard run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Files are identical
    Identical,
    /// Files differ in content
    Different,
    /// A file or pattern could not be found
    CannotFind,
    /// The comparison could not be carried out
    Invalid,
}

impl MatchOutcome {
    /// Fold one pair's outcome into a running aggregate.
    ///
    /// `Invalid` dominates, then `Different`, then `Identical`. A pair that
    /// could not be found counts as `Invalid` in the aggregate.
    pub fn fold(self, pair: MatchOutcome) -> MatchOutcome {
        match pair {
            MatchOutcome::Identical => self,
            MatchOutcome::Different => {
                if self == MatchOutcome::Invalid {
                    self
                } else {
                    MatchOutcome::Different
                }
            }
            MatchOutcome::CannotFind | MatchOutcome::Invalid => MatchOutcome::Invalid,
        }
    }

    /// Process exit code used by the command line tool
    pub fn exit_code(self) -> i32 {
        match self {
            MatchOutcome::Identical => 0,
            MatchOutcome::Different => 1,
            MatchOutcome::CannotFind => 2,
            MatchOutcome::Invalid => -1,
        }
    }
}

/// Comparison switches, one field per FC switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// /A: show only the first and last line of each block of differences
    pub abbreviated: bool,
    /// /B: compare as binary
    pub binary: bool,
    /// /C: ignore case
    pub ignore_case: bool,
    /// /L: compare as text, even for binary extensions
    pub force_text: bool,
    /// /LBn: maximum consecutive mismatching lines before giving up
    pub max_resync_lines: usize,
    /// /N: show line numbers
    pub line_numbers: bool,
    /// /OFF[LINE]: accepted for compatibility, has no effect
    pub offline: bool,
    /// /T: do not expand tabs
    pub keep_tabs: bool,
    /// /U: files are UTF-16
    pub unicode: bool,
    /// /W: compress runs of whitespace
    pub compress_whitespace: bool,
    /// /nnnn: matching lines needed to resynchronize after a difference
    pub resync_lines: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            abbreviated: false,
            binary: false,
            ignore_case: false,
            force_text: false,
            max_resync_lines: 100,
            line_numbers: false,
            offline: false,
            keep_tabs: false,
            unicode: false,
            compress_whitespace: false,
            resync_lines: 2,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Switch values applied before command line switches
    #[serde(default)]
    pub defaults: CompareOptions,

    /// Extensions treated as binary in addition to the built-in list (e.g. "dll")
    #[serde(default)]
    pub extra_binary_extensions: Vec<String>,

    /// Enable portable mode (config alongside binary)
    #[serde(default)]
    pub portable_mode: bool,
}

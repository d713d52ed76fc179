use fcmp_common::{CompareOptions, FcError, MatchOutcome};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, warn};

/// A line as it is displayed, with its 1-based number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub number: usize,
    pub text: String,
}

/// One file's half of a block of differences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HunkSide {
    /// Last matching line before the block
    pub before: Option<TextLine>,
    pub lines: Vec<TextLine>,
    /// First matching line after the block
    pub after: Option<TextLine>,
}

impl HunkSide {
    /// Context and changed lines in display order
    pub fn display_lines(&self) -> Vec<&TextLine> {
        self.before
            .iter()
            .chain(self.lines.iter())
            .chain(self.after.iter())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub left: HunkSide,
    pub right: HunkSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextReport {
    pub hunks: Vec<Hunk>,
    /// A block of differences grew past the resync limit and the comparison stopped
    pub resync_failed: bool,
}

impl TextReport {
    pub fn outcome(&self) -> MatchOutcome {
        if self.hunks.is_empty() && !self.resync_failed {
            MatchOutcome::Identical
        } else {
            MatchOutcome::Different
        }
    }
}

/// Configuration for text comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiffConfig {
    pub ignore_case: bool,
    /// Treat runs of spaces and tabs as a single space
    pub compress_whitespace: bool,
    /// Leave tabs alone instead of expanding them to `tab_width` stops
    pub keep_tabs: bool,
    /// Input is UTF-16LE
    pub unicode: bool,
    pub tab_width: usize,
    /// Matching lines needed to close a block of differences
    pub resync_lines: usize,
    /// Largest block of differences before giving up
    pub max_resync_lines: usize,
}

impl TextDiffConfig {
    pub fn new() -> Self {
        Self::from(&CompareOptions::default())
    }
}

impl Default for TextDiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&CompareOptions> for TextDiffConfig {
    fn from(options: &CompareOptions) -> Self {
        Self {
            ignore_case: options.ignore_case,
            compress_whitespace: options.compress_whitespace,
            keep_tabs: options.keep_tabs,
            unicode: options.unicode,
            tab_width: 8,
            resync_lines: options.resync_lines,
            max_resync_lines: options.max_resync_lines,
        }
    }
}

/// Line-oriented text comparison engine
pub struct TextDiffEngine {
    config: TextDiffConfig,
}

impl TextDiffEngine {
    pub fn new() -> Self {
        Self {
            config: TextDiffConfig::new(),
        }
    }

    pub fn with_config(config: TextDiffConfig) -> Self {
        Self { config }
    }

    /// Compare two text files
    pub fn compare_files(&self, left_path: &Path, right_path: &Path) -> Result<TextReport, FcError> {
        let left = fs::read(left_path)?;
        let right = fs::read(right_path)?;
        Ok(self.compare_bytes(&left, &right))
    }

    /// Decode both inputs and compare them
    pub fn compare_bytes(&self, left: &[u8], right: &[u8]) -> TextReport {
        let left = self.decode(left);
        let right = self.decode(right);
        self.compare_text(&left, &right)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        if self.config.unicode {
            let bytes = bytes.strip_prefix(&[0xFF, 0xFE]).unwrap_or(bytes);
            if bytes.len() % 2 != 0 {
                warn!("UTF-16 input has an odd trailing byte, ignoring it");
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        } else {
            let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }

    /// Split into display lines, normalizing line endings and expanding tabs
    fn split_lines(&self, text: &str) -> Vec<String> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if normalized.is_empty() {
            return Vec::new();
        }
        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        body.split('\n')
            .map(|line| {
                if self.config.keep_tabs {
                    line.to_string()
                } else {
                    expand_tabs(line, self.config.tab_width)
                }
            })
            .collect()
    }

    /// The form of a line used for matching
    fn comparison_key(&self, line: &str) -> String {
        let mut key = if self.config.compress_whitespace {
            line.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            line.to_string()
        };
        if self.config.ignore_case {
            key = key.to_lowercase();
        }
        key
    }

    /// Compare two decoded texts
    pub fn compare_text(&self, left: &str, right: &str) -> TextReport {
        let left_lines = self.split_lines(left);
        let right_lines = self.split_lines(right);
        let left_keys: Vec<String> = left_lines.iter().map(|l| self.comparison_key(l)).collect();
        let right_keys: Vec<String> = right_lines.iter().map(|l| self.comparison_key(l)).collect();

        let ops = capture_diff_slices(Algorithm::Myers, &left_keys, &right_keys);
        let changes: Vec<(Range<usize>, Range<usize>)> = ops
            .iter()
            .map(|op| op.as_tag_tuple())
            .filter(|(tag, _, _)| *tag != DiffTag::Equal)
            .map(|(_, old, new)| (old, new))
            .collect();

        let mut report = TextReport::default();
        for (old, new) in merge_changes(changes, self.config.resync_lines) {
            if old.len() > self.config.max_resync_lines || new.len() > self.config.max_resync_lines {
                debug!(
                    "Block of {} and {} lines exceeds resync limit {}",
                    old.len(),
                    new.len(),
                    self.config.max_resync_lines
                );
                report.resync_failed = true;
                break;
            }
            report.hunks.push(Hunk {
                left: hunk_side(&left_lines, old),
                right: hunk_side(&right_lines, new),
            });
        }

        debug!(
            "Compared {} and {} lines, {} blocks of differences",
            left_lines.len(),
            right_lines.len(),
            report.hunks.len()
        );
        report
    }
}

impl Default for TextDiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins changes separated by fewer than `resync_lines` matching lines
fn merge_changes(
    changes: Vec<(Range<usize>, Range<usize>)>,
    resync_lines: usize,
) -> Vec<(Range<usize>, Range<usize>)> {
    let threshold = resync_lines.max(1);
    let mut merged: Vec<(Range<usize>, Range<usize>)> = Vec::new();
    for (old, new) in changes {
        match merged.last_mut() {
            Some((last_old, last_new)) if old.start - last_old.end < threshold => {
                last_old.end = old.end;
                last_new.end = new.end;
            }
            _ => merged.push((old, new)),
        }
    }
    merged
}

fn hunk_side(lines: &[String], range: Range<usize>) -> HunkSide {
    let numbered = |index: usize| TextLine {
        number: index + 1,
        text: lines[index].clone(),
    };
    HunkSide {
        before: range.start.checked_sub(1).map(numbered),
        after: (range.end < lines.len()).then(|| numbered(range.end)),
        lines: range.map(numbered).collect(),
    }
}

/// Expand tabs to stops every `width` columns
fn expand_tabs(line: &str, width: usize) -> String {
    if !line.contains('\t') || width == 0 {
        return line.to_string();
    }
    let mut result = String::with_capacity(line.len() + width);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = width - column % width;
            result.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            result.push(c);
            column += 1;
        }
    }
    result
}

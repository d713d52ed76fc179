use crate::binary_diff::{is_binary_extension, BinaryDiffEngine, BinaryReport, Side};
use crate::path::to_native;
use crate::text_diff::{TextDiffConfig, TextDiffEngine, TextReport};
use fcmp_common::{CompareOptions, MatchOutcome};
use std::fs::File;
use std::io::Read;
use tracing::{debug, warn};

/// What comparing one pair of files produced
#[derive(Debug, Clone)]
pub enum FileReport {
    /// Both arguments name the same file
    SamePath,
    Binary(BinaryReport),
    Text(TextReport),
    CannotOpen { path: String, reason: String },
    CannotRead { path: String, reason: String },
}

impl FileReport {
    pub fn outcome(&self) -> MatchOutcome {
        match self {
            FileReport::SamePath => MatchOutcome::Identical,
            FileReport::Binary(report) => report.outcome(),
            FileReport::Text(report) => report.outcome(),
            FileReport::CannotOpen { .. } => MatchOutcome::CannotFind,
            FileReport::CannotRead { .. } => MatchOutcome::Invalid,
        }
    }
}

/// Compares one resolved pair of files in binary or text mode
pub struct FileComparator {
    options: CompareOptions,
    extra_binary_extensions: Vec<String>,
    binary: BinaryDiffEngine,
    text: TextDiffEngine,
}

impl FileComparator {
    pub fn new(options: CompareOptions) -> Self {
        let text = TextDiffEngine::with_config(TextDiffConfig::from(&options));
        Self {
            options,
            extra_binary_extensions: Vec::new(),
            binary: BinaryDiffEngine::default(),
            text,
        }
    }

    pub fn with_extra_binary_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extra_binary_extensions = extensions;
        self
    }

    /// Whether the pair is compared byte by byte
    pub fn uses_binary_mode(&self, left: &str, right: &str) -> bool {
        !self.options.force_text
            && (self.options.binary
                || is_binary_extension(left, &self.extra_binary_extensions)
                || is_binary_extension(right, &self.extra_binary_extensions))
    }

    /// Compare two paths in backslash form
    pub fn compare(&self, left: &str, right: &str) -> FileReport {
        let left_file = match open(left) {
            Ok(file) => file,
            Err(report) => return report,
        };
        let right_file = match open(right) {
            Ok(file) => file,
            Err(report) => return report,
        };

        if same_path(left, right) {
            debug!("{} and {} are the same file", left, right);
            return FileReport::SamePath;
        }

        let left_len = match left_file.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => return cannot_read(left, e),
        };
        let right_len = match right_file.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => return cannot_read(right, e),
        };

        if self.uses_binary_mode(left, right) {
            debug!("Binary comparison of {} and {}", left, right);
            match self
                .binary
                .compare_readers(left_file, left_len, right_file, right_len)
            {
                Ok(report) => FileReport::Binary(report),
                Err((Side::Left, e)) => cannot_read(left, e),
                Err((Side::Right, e)) => cannot_read(right, e),
            }
        } else {
            debug!("Text comparison of {} and {}", left, right);
            let left_bytes = match read_all(left_file) {
                Ok(bytes) => bytes,
                Err(e) => return cannot_read(left, e),
            };
            let right_bytes = match read_all(right_file) {
                Ok(bytes) => bytes,
                Err(e) => return cannot_read(right, e),
            };
            FileReport::Text(self.text.compare_bytes(&left_bytes, &right_bytes))
        }
    }
}

fn open(path: &str) -> Result<File, FileReport> {
    File::open(to_native(path)).map_err(|e| {
        debug!("Cannot open {}: {}", path, e);
        FileReport::CannotOpen {
            path: path.to_string(),
            reason: e.to_string(),
        }
    })
}

fn read_all(mut file: File) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn cannot_read(path: &str, error: impl ToString) -> FileReport {
    let reason = error.to_string();
    warn!("Cannot read {}: {}", path, reason);
    FileReport::CannotRead {
        path: path.to_string(),
        reason,
    }
}

/// Path text equality, ignoring case where the filesystem does
fn same_path(left: &str, right: &str) -> bool {
    if cfg!(windows) {
        left.to_lowercase() == right.to_lowercase()
    } else {
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::from_native;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        from_native(path.to_str().unwrap())
    }

    #[test]
    fn test_text_mode_by_default() {
        let dir = TempDir::new().unwrap();
        let left = fixture(&dir, "a.txt", b"one\ntwo\n");
        let right = fixture(&dir, "b.txt", b"one\nthree\n");

        let report = FileComparator::new(CompareOptions::default()).compare(&left, &right);
        assert!(matches!(report, FileReport::Text(_)));
        assert_eq!(report.outcome(), MatchOutcome::Different);
    }

    #[test]
    fn test_binary_extension_selects_binary_mode() {
        let dir = TempDir::new().unwrap();
        let left = fixture(&dir, "a.exe", b"MZ\x00\x01");
        let right = fixture(&dir, "b.exe", b"MZ\x00\x01");

        let report = FileComparator::new(CompareOptions::default()).compare(&left, &right);
        assert!(matches!(report, FileReport::Binary(_)));
        assert_eq!(report.outcome(), MatchOutcome::Identical);
    }

    #[test]
    fn test_mode_selection() {
        let comparator = FileComparator::new(CompareOptions::default());
        assert!(comparator.uses_binary_mode("a.bin", "b.txt"));
        assert!(!comparator.uses_binary_mode("a.txt", "b.txt"));

        let forced_text = FileComparator::new(CompareOptions {
            force_text: true,
            binary: true,
            ..Default::default()
        });
        assert!(!forced_text.uses_binary_mode("a.exe", "b.exe"));

        let binary = FileComparator::new(CompareOptions {
            binary: true,
            ..Default::default()
        });
        assert!(binary.uses_binary_mode("a.txt", "b.txt"));

        let extra = FileComparator::new(CompareOptions::default())
            .with_extra_binary_extensions(vec!["dll".to_string()]);
        assert!(extra.uses_binary_mode("x.dll", "y.txt"));
    }

    #[test]
    fn test_same_path_short_circuits() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "same.txt", b"content");

        let report = FileComparator::new(CompareOptions::default()).compare(&path, &path);
        assert!(matches!(report, FileReport::SamePath));
        assert_eq!(report.outcome(), MatchOutcome::Identical);
    }

    #[test]
    fn test_missing_file_cannot_open() {
        let dir = TempDir::new().unwrap();
        let present = fixture(&dir, "here.txt", b"x");
        let missing = format!(r"{}\gone.txt", from_native(dir.path().to_str().unwrap()));

        let comparator = FileComparator::new(CompareOptions::default());
        let report = comparator.compare(&present, &missing);
        assert!(matches!(&report, FileReport::CannotOpen { path, .. } if *path == missing));
        assert_eq!(report.outcome(), MatchOutcome::CannotFind);

        let report = comparator.compare(&missing, &missing);
        assert_eq!(report.outcome(), MatchOutcome::CannotFind);
    }
}

use fcmp_common::{FcError, MatchOutcome};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Extensions compared as binary unless text mode is forced
pub const BINARY_EXTENSIONS: [&str; 6] = ["EXE", "COM", "SYS", "OBJ", "LIB", "BIN"];

/// Default read window
pub const WINDOW_SIZE: usize = 64 * 1024;

/// Which of the two inputs an I/O failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One mismatching byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteDifference {
    pub offset: u64,
    pub left: u8,
    pub right: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRelation {
    Equal,
    LeftLonger,
    RightLonger,
}

/// Result of a byte-by-byte comparison over the common length of two files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryReport {
    pub differences: Vec<ByteDifference>,
    pub left_len: u64,
    pub right_len: u64,
    /// Offsets need more than 32 bits
    pub wide_offsets: bool,
}

impl BinaryReport {
    pub fn size_relation(&self) -> SizeRelation {
        match self.left_len.cmp(&self.right_len) {
            std::cmp::Ordering::Equal => SizeRelation::Equal,
            std::cmp::Ordering::Greater => SizeRelation::LeftLonger,
            std::cmp::Ordering::Less => SizeRelation::RightLonger,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.differences.is_empty() && self.left_len == self.right_len
    }

    pub fn outcome(&self) -> MatchOutcome {
        if self.is_identical() {
            MatchOutcome::Identical
        } else {
            MatchOutcome::Different
        }
    }

    /// Formats a difference as `OFFSET: LL RR`
    pub fn format_difference(&self, diff: &ByteDifference) -> String {
        if self.wide_offsets {
            format!("{:016X}: {:02X} {:02X}", diff.offset, diff.left, diff.right)
        } else {
            format!("{:08X}: {:02X} {:02X}", diff.offset, diff.left, diff.right)
        }
    }
}

/// Binary comparison engine
pub struct BinaryDiffEngine {
    window_size: usize,
}

impl BinaryDiffEngine {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
        }
    }

    /// Compare two files byte by byte
    pub fn compare_files(&self, left_path: &Path, right_path: &Path) -> Result<BinaryReport, FcError> {
        let left_file = File::open(left_path)?;
        let right_file = File::open(right_path)?;
        let left_len = left_file.metadata()?.len();
        let right_len = right_file.metadata()?.len();

        self.compare_readers(left_file, left_len, right_file, right_len)
            .map_err(|(_, e)| e)
    }

    /// Compare the first `min(left_len, right_len)` bytes of two readers.
    ///
    /// A read failure is returned with the side it happened on.
    pub fn compare_readers<L: Read, R: Read>(
        &self,
        mut left: L,
        left_len: u64,
        mut right: R,
        right_len: u64,
    ) -> Result<BinaryReport, (Side, FcError)> {
        let common = left_len.min(right_len);
        let mut left_buf = vec![0u8; self.window_size];
        let mut right_buf = vec![0u8; self.window_size];
        let mut differences = Vec::new();
        let mut offset = 0u64;

        while offset < common {
            let view = (common - offset).min(self.window_size as u64) as usize;
            read_window(&mut left, &mut left_buf[..view]).map_err(|e| (Side::Left, e))?;
            read_window(&mut right, &mut right_buf[..view]).map_err(|e| (Side::Right, e))?;

            differences.extend(
                left_buf[..view]
                    .iter()
                    .zip(&right_buf[..view])
                    .enumerate()
                    .filter(|(_, (l, r))| l != r)
                    .map(|(i, (&l, &r))| ByteDifference {
                        offset: offset + i as u64,
                        left: l,
                        right: r,
                    }),
            );
            offset += view as u64;
        }

        debug!(
            "Compared {} bytes, {} differences, sizes {} and {}",
            common,
            differences.len(),
            left_len,
            right_len
        );

        Ok(BinaryReport {
            differences,
            left_len,
            right_len,
            wide_offsets: common > u64::from(u32::MAX),
        })
    }
}

impl Default for BinaryDiffEngine {
    fn default() -> Self {
        Self::new(WINDOW_SIZE)
    }
}

/// Fills `buf` completely; a file that shrank underneath us is a read failure
fn read_window<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), FcError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            FcError::Io(std::io::Error::new(e.kind(), "file shorter than its reported size"))
        } else {
            FcError::Io(e)
        }
    })
}

/// Whether the final name component ends in a binary extension.
///
/// The extension is whatever follows the last `.` after the last `\` or `/`,
/// compared case-insensitively against [`BINARY_EXTENSIONS`] and `extra`.
pub fn is_binary_extension(path: &str, extra: &[String]) -> bool {
    let name = path.rsplit(['\\', '/']).next().unwrap_or(path);
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    BINARY_EXTENSIONS
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

//! Path algebra over backslash-separated path strings
//!
//! Paths are plain strings in the classic DOS/Windows form: `X:\dir\file`,
//! `\dir\file`, `\\server\share\file` or relative `dir\file`. Every
//! operation reads its input and returns a new string; nothing is edited in
//! place. Results are bounded by [`MAX_PATH`].

pub mod builder;
pub mod canonical;
pub mod extension;
pub mod native;
pub mod syntax;

pub use builder::{add_trailing_separator, append, combine, remove_last_segment, strip_to_root};
pub use canonical::canonicalize;
pub use extension::{add_extension, extension_of, find_extension};
pub use native::{from_native, to_native};
pub use syntax::{is_relative, is_root, is_unc_root, is_unc_server_share, PathRootKind};

use fcmp_common::FcError;

/// Historical path limit, counting the terminator; a path holds at most
/// `MAX_PATH - 1` characters
pub const MAX_PATH: usize = 260;

pub const SEPARATOR: u8 = b'\\';

/// Fails with [`FcError::Overflow`] unless `path` fits within [`MAX_PATH`]
pub(crate) fn check_len(path: &str) -> Result<(), FcError> {
    if path.chars().count() >= MAX_PATH {
        return Err(FcError::Overflow(path.to_string()));
    }
    Ok(())
}

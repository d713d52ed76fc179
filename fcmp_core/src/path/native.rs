//! Conversion between the backslash path algebra and host paths
//!
//! On Unix `/home/me/a.txt` becomes `\home\me\a.txt`, which the algebra treats
//! as a path rooted at a single separator. File names containing a literal
//! backslash cannot round-trip.

use super::SEPARATOR;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Host path text to algebra form
pub fn from_native(path: &str) -> String {
    path.replace('/', "\\")
}

/// Algebra form to a host path
pub fn to_native(path: &str) -> PathBuf {
    PathBuf::from(path.replace(char::from(SEPARATOR), &MAIN_SEPARATOR.to_string()))
}

use super::{MAX_PATH, SEPARATOR};
use fcmp_common::FcError;

/// Byte index of the extension's `.` in the final segment, or `path.len()` if there is none.
///
/// A space ends the search the same way a separator does, so `a.b c` has no
/// extension. Consumers that classify files by extension rely on that.
pub fn find_extension(path: &str) -> usize {
    let mut last_dot = None;
    for (i, b) in path.bytes().enumerate() {
        match b {
            SEPARATOR | b' ' => last_dot = None,
            b'.' => last_dot = Some(i),
            _ => {}
        }
    }
    last_dot.unwrap_or(path.len())
}

/// The extension of `path` including its dot, empty if there is none
pub fn extension_of(path: &str) -> &str {
    &path[find_extension(path)..]
}

/// Appends `ext` to a path that has no extension yet
pub fn add_extension(path: &str, ext: &str) -> Result<String, FcError> {
    if find_extension(path) != path.len() {
        return Err(FcError::MalformedInput(format!("{path:?} already has an extension")));
    }
    if path.chars().count() + ext.chars().count() >= MAX_PATH {
        return Err(FcError::Overflow(format!("{path}{ext}")));
    }
    Ok(format!("{path}{ext}"))
}

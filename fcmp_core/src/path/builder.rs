use super::{canonicalize, check_len, is_relative, is_root, is_unc_root, PathRootKind, MAX_PATH, SEPARATOR};
use fcmp_common::FcError;

/// Appends a separator unless `path` is empty or already ends with one
pub fn add_trailing_separator(path: &str) -> Result<String, FcError> {
    check_len(path)?;

    let mut result = path.to_string();
    if !result.is_empty() && !result.ends_with(char::from(SEPARATOR)) {
        result.push(char::from(SEPARATOR));
        check_len(&result)?;
    }
    Ok(result)
}

/// Removes the final segment, keeping any drive, leading separator or UNC prefix.
///
/// Returns the shortened path and whether anything was removed; a path that
/// is already a bare root or drive comes back unchanged.
pub fn remove_last_segment(path: &str) -> (String, bool) {
    let bytes = path.as_bytes();
    let mut i = 0;
    let mut segment_start = 0;

    // Skip a leading `\` or `\\`
    for _ in 0..2 {
        if bytes.get(i) == Some(&SEPARATOR) {
            i += 1;
            segment_start = i;
        }
    }

    while i < bytes.len() {
        match bytes[i] {
            SEPARATOR => segment_start = i,
            b':' => {
                i += 1;
                segment_start = i;
                if bytes.get(i) == Some(&SEPARATOR) {
                    segment_start += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if segment_start < bytes.len() {
        (path[..segment_start].to_string(), true)
    } else {
        (path.to_string(), false)
    }
}

/// Removes segments until only the root is left
pub fn strip_to_root(path: &str) -> Result<String, FcError> {
    let mut current = path.to_string();
    while !is_root(&current) {
        let (shorter, changed) = remove_last_segment(&current);
        if !changed {
            return Err(FcError::MalformedInput(format!("no root in {path:?}")));
        }
        current = shorter;
    }
    Ok(current)
}

/// Joins `file` onto `dir` and canonicalizes the result.
///
/// In order of precedence:
/// 1. an empty `file` yields `dir`;
/// 2. an empty `dir`, or a `file` with its own drive or UNC prefix, yields `file`;
/// 3. a `file` rooted at a single `\` replaces everything below the root of `dir`
///    (a UNC `dir` keeps its `\\server\share`);
/// 4. otherwise `file` is appended to `dir`.
pub fn combine(dir: &str, file: &str) -> Result<String, FcError> {
    if file.is_empty() {
        return canonicalize(dir);
    }

    if dir.is_empty() || !is_relative(file) {
        let rooted_at_separator = file.as_bytes()[0] == SEPARATOR && !is_unc_root(file);
        if dir.is_empty() || !rooted_at_separator {
            return canonicalize(file);
        }
        return match PathRootKind::of(dir) {
            // A relative dir lives under the current root, which `file` already names
            PathRootKind::Relative => canonicalize(file),
            _ => {
                let root = strip_to_root(dir)?;
                join(&root, &file[1..])
            }
        };
    }

    join(dir, file)
}

fn join(dir: &str, file: &str) -> Result<String, FcError> {
    let mut joined = add_trailing_separator(dir)?;
    if joined.chars().count() + file.chars().count() >= MAX_PATH {
        return Err(FcError::Overflow(format!("{joined}{file}")));
    }
    joined.push_str(file);
    canonicalize(&joined)
}

/// Appends `suffix` as a new final segment of `path`.
///
/// Leading separators of `suffix` are ignored unless it is a UNC path, which
/// replaces `path` entirely.
pub fn append(path: &str, suffix: &str) -> Result<String, FcError> {
    let suffix = if is_unc_root(suffix) {
        suffix
    } else {
        suffix.trim_start_matches(char::from(SEPARATOR))
    };
    combine(path, suffix)
}

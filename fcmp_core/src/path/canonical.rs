use super::syntax::{root, unc_server_share};
use super::{check_len, PathRootKind, SEPARATOR};
use fcmp_common::FcError;

/// Rewrites `path` into its shortest equivalent form, assuming no symbolic links.
///
/// `.` segments are dropped and `..` segments back up over the previous
/// segment without escaping the root: a drive, a single leading separator or
/// a `\\server\share` prefix. A relative path that backs up past its start
/// is re-rooted at `\`. A bare drive gains its separator, other results
/// lose trailing separators, and empty input names the root `\`.
///
/// `canonicalize(canonicalize(p)) == canonicalize(p)` for every `p`.
pub fn canonicalize(path: &str) -> Result<String, FcError> {
    let src = path.as_bytes();
    if src.is_empty() {
        return Ok(char::from(SEPARATOR).to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(src.len() + 1);
    let mut s = 0;

    // Root prefix is copied verbatim
    if src[0] == SEPARATOR {
        out.push(SEPARATOR);
        s = 1;
    } else if src.get(1) == Some(&b':') {
        out.extend_from_slice(&src[..2]);
        s = 2;
        if src.get(2) == Some(&SEPARATOR) {
            out.push(SEPARATOR);
            s = 3;
        }
    }

    while s < src.len() {
        let c = src[s];
        if c != b'.' {
            out.push(c);
            s += 1;
            continue;
        }

        let next = src.get(s + 1).copied();
        let after_boundary = s == 0 || src[s - 1] == SEPARATOR || src[s - 1] == b':';

        if after_boundary && matches!(next, None | Some(SEPARATOR)) {
            // `.` segment
            s += if next.is_some() { 2 } else { 1 };
        } else if next == Some(b'.')
            && ends_segment(src.get(s + 2).copied())
            && out.last() == Some(&SEPARATOR)
        {
            back_up(&mut out);
            if out.is_empty() {
                out.push(SEPARATOR);
                if src.get(s + 2) == Some(&SEPARATOR) {
                    s += 1;
                }
            }
            s += 2;
        } else {
            out.push(c);
            s += 1;
        }
    }

    if out.len() == 2 && out[1] == b':' {
        out.push(SEPARATOR);
    }
    while out.len() > 1 && out.last() == Some(&SEPARATOR) && !root(&out) {
        out.pop();
    }
    if out.is_empty() {
        out.push(SEPARATOR);
    }

    let canonical = String::from_utf8(out).map_err(|e| FcError::MalformedInput(e.to_string()))?;
    check_len(&canonical)?;
    Ok(canonical)
}

fn ends_segment(byte: Option<u8>) -> bool {
    matches!(byte, None | Some(SEPARATOR))
}

/// Truncates `out`, which ends with a separator, for a `..` segment.
///
/// Three cases decide how far back the cut goes: a `X:` found below the top
/// segment re-roots at the separator before it (or the start), a top segment
/// that is the share of a `\\server\share` prefix stays, and any other
/// segment is removed. The trailing cut always lands on a separator, which
/// the next copied separator restores.
fn back_up(out: &mut Vec<u8>) {
    let len = out.len();
    let at = |i: usize| out.get(i).copied();
    let mut d = len;

    if d > 1 && (out[d - 2] != SEPARATOR || d > 2) {
        let colon_below = out[d - 2] == b':' && (d > 3 || (d == 3 && out[0] == b':'));
        if colon_below {
            d -= 2;
            while d > 0 && at(d) != Some(SEPARATOR) {
                d -= 1;
            }
            d = if at(d) == Some(SEPARATOR) { d + 1 } else { 0 };
        } else if out[d - 2] != b':' && !protects_share(&out[..d - 1]) {
            d -= 2;
        }
    }

    while d > 0 && (d >= len || out[d] != SEPARATOR) {
        d -= 1;
    }
    out.truncate(d);
}

fn protects_share(prefix: &[u8]) -> bool {
    PathRootKind::of_bytes(prefix) == PathRootKind::Unc && unc_server_share(prefix)
}

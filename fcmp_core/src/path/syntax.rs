use super::SEPARATOR;

/// How a path is anchored, derived from its leading characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRootKind {
    /// No root: `dir\file`
    Relative,
    /// Drive letter: `X:\dir` (also the drive-relative `X:dir`)
    DriveAbsolute,
    /// Single leading separator: `\dir`
    UnixStyleAbsolute,
    /// Network path: `\\server\share\dir`
    Unc,
}

impl PathRootKind {
    pub fn of(path: &str) -> Self {
        Self::of_bytes(path.as_bytes())
    }

    pub(crate) fn of_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [SEPARATOR, SEPARATOR, ..] => PathRootKind::Unc,
            [SEPARATOR, ..] => PathRootKind::UnixStyleAbsolute,
            [_, b':', ..] => PathRootKind::DriveAbsolute,
            _ => PathRootKind::Relative,
        }
    }
}

/// True if `path` begins with `\\`
pub fn is_unc_root(path: &str) -> bool {
    path.as_bytes().starts_with(&[SEPARATOR, SEPARATOR])
}

/// True for empty paths and paths with neither a leading separator nor a drive letter
pub fn is_relative(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes.first() {
        None => true,
        Some(&SEPARATOR) => false,
        Some(_) => bytes.get(1) != Some(&b':'),
    }
}

/// True for `\\server\share` with nothing after the share
pub fn is_unc_server_share(path: &str) -> bool {
    unc_server_share(path.as_bytes())
}

pub(crate) fn unc_server_share(bytes: &[u8]) -> bool {
    bytes.starts_with(&[SEPARATOR, SEPARATOR]) && separators_after_unc_prefix(bytes) == 1
}

/// True for `\`, `X:\` and `\\server\share`
pub fn is_root(path: &str) -> bool {
    root(path.as_bytes())
}

pub(crate) fn root(bytes: &[u8]) -> bool {
    match bytes {
        [] => false,
        [SEPARATOR] => true,
        [SEPARATOR, SEPARATOR, ..] => separators_after_unc_prefix(bytes) <= 1,
        [SEPARATOR, ..] => false,
        [_, b':', SEPARATOR] => true,
        _ => false,
    }
}

fn separators_after_unc_prefix(bytes: &[u8]) -> usize {
    bytes[2..].iter().filter(|&&b| b == SEPARATOR).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unc_root() {
        assert!(is_unc_root(r"\\server\share"));
        assert!(is_unc_root(r"\\"));
        assert!(!is_unc_root(r"\dir"));
        assert!(!is_unc_root(""));
        assert!(!is_unc_root("a"));
    }

    #[test]
    fn test_relative() {
        assert!(is_relative(""));
        assert!(is_relative("file.txt"));
        assert!(is_relative(r"dir\file.txt"));
        assert!(is_relative(r"..\file.txt"));
        assert!(!is_relative(r"\dir"));
        assert!(!is_relative(r"C:\dir"));
        assert!(!is_relative("C:file"));
        assert!(!is_relative(r"\\server\share"));
    }

    #[test]
    fn test_unc_server_share() {
        assert!(is_unc_server_share(r"\\server\share"));
        assert!(is_unc_server_share(r"\\server\"));
        assert!(!is_unc_server_share(r"\\server"));
        assert!(!is_unc_server_share(r"\\server\share\dir"));
        assert!(!is_unc_server_share(r"\\server\share\"));
        assert!(!is_unc_server_share(r"\server\share"));
        assert!(!is_unc_server_share(""));
    }

    #[test]
    fn test_root() {
        assert!(is_root(r"\"));
        assert!(is_root(r"C:\"));
        assert!(is_root(r"\\server\share"));
        assert!(is_root(r"\\server"));
        assert!(!is_root(r"\\server\share\dir"));
        assert!(!is_root(""));
        assert!(!is_root("C:"));
        assert!(!is_root(r"C:\dir"));
        assert!(!is_root(r"\dir"));
    }

    #[test]
    fn test_root_kind() {
        assert_eq!(PathRootKind::of("dir"), PathRootKind::Relative);
        assert_eq!(PathRootKind::of(""), PathRootKind::Relative);
        assert_eq!(PathRootKind::of(r"C:\dir"), PathRootKind::DriveAbsolute);
        assert_eq!(PathRootKind::of(r"\dir"), PathRootKind::UnixStyleAbsolute);
        assert_eq!(PathRootKind::of(r"\\srv\share"), PathRootKind::Unc);
    }
}

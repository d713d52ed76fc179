#[cfg(test)]
mod tests {
    use crate::listing::LocalLister;
    use crate::path::from_native;
    use fcmp_common::{DirectoryCursor, DirectoryLister, FcError};
    use std::fs;
    use tempfile::TempDir;

    fn collect(mut cursor: Box<dyn DirectoryCursor>) -> Vec<String> {
        let mut names = Vec::new();
        while let Some(name) = cursor.current_name() {
            names.push(name.to_string());
            if !cursor.advance() {
                break;
            }
        }
        names
    }

    fn pattern_in(dir: &TempDir, segment: &str) -> String {
        format!(r"{}\{}", from_native(dir.path().to_str().unwrap()), segment)
    }

    fn populate(dir: &TempDir, names: &[&str]) {
        for name in names {
            fs::write(dir.path().join(name), name.as_bytes()).expect("Failed to write fixture");
        }
    }

    // ============================================================================
    // Matching
    // ============================================================================

    #[test]
    fn test_star_extension_pattern() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["b.txt", "a.txt", "c.log"]);

        let lister = LocalLister::new();
        let names = collect(lister.open(&pattern_in(&temp_dir, "*.txt")).unwrap());
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_question_mark_matches_one_char() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["a1.c", "a22.c", "b1.c"]);

        let lister = LocalLister::new();
        let names = collect(lister.open(&pattern_in(&temp_dir, "a?.c")).unwrap());
        assert_eq!(names, vec!["a1.c"]);
    }

    #[test]
    fn test_star_includes_dot_entries_and_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["file.txt"]);
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let lister = LocalLister::new();
        let names = collect(lister.open(&pattern_in(&temp_dir, "*")).unwrap());
        assert_eq!(names, vec![".", "..", "file.txt", "sub"]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["UPPER.TXT"]);

        let lister = LocalLister::new().with_case_sensitivity(false);
        let names = collect(lister.open(&pattern_in(&temp_dir, "*.txt")).unwrap());
        assert_eq!(names, vec!["UPPER.TXT"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_native_pattern_is_accepted() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["x.rs"]);

        let lister = LocalLister::new();
        let native = format!("{}/*.rs", temp_dir.path().display());
        assert_eq!(collect(lister.open(&native).unwrap()), vec!["x.rs"]);
    }

    // ============================================================================
    // Failures
    // ============================================================================

    #[test]
    fn test_no_match_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        populate(&temp_dir, &["a.txt"]);

        let lister = LocalLister::new();
        let pattern = pattern_in(&temp_dir, "*.zip");
        assert!(matches!(lister.open(&pattern), Err(FcError::NotFound(p)) if p == pattern));
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let lister = LocalLister::new();
        let result = lister.open(&pattern_in(&temp_dir, r"missing\*.txt"));
        assert!(matches!(result, Err(FcError::NotFound(_))));
    }
}

pub mod local;
pub mod memory;

#[cfg(test)]
mod tests_local;

pub use local::LocalLister;
pub use memory::MemoryLister;

use fcmp_common::DirectoryCursor;

/// Cursor over a listing that was read up front
#[derive(Debug, Clone)]
pub struct VecCursor {
    names: Vec<String>,
    position: usize,
}

impl VecCursor {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, position: 0 }
    }
}

impl DirectoryCursor for VecCursor {
    fn current_name(&self) -> Option<&str> {
        self.names.get(self.position).map(String::as_str)
    }

    fn advance(&mut self) -> bool {
        if self.position < self.names.len() {
            self.position += 1;
        }
        self.position < self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_cursor_walks_entries() {
        let mut cursor = VecCursor::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cursor.current_name(), Some("a"));
        assert!(cursor.advance());
        assert_eq!(cursor.current_name(), Some("b"));
        assert!(!cursor.advance());
        assert_eq!(cursor.current_name(), None);
        assert!(!cursor.advance());
    }
}

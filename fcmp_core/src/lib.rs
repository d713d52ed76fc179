pub mod binary_diff;
pub mod comparison;
pub mod listing;
pub mod path;
pub mod text_diff;
pub mod wildcard;

pub use binary_diff::{is_binary_extension, BinaryDiffEngine, BinaryReport};
pub use comparison::{FileComparator, FileReport};
pub use listing::{LocalLister, MemoryLister};
pub use text_diff::{TextDiffEngine, TextReport};
pub use wildcard::WildcardMatcher;

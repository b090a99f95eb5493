//! Domain logic - log records, decorations, filters and output formats, independent of git

pub mod commit;
pub mod decoration;
pub mod filter;
pub mod format;

pub use commit::{parse_log, CommitRecord};
pub use decoration::{BoundaryRules, Decoration, DecorationRef, ReleaseBoundary};
pub use filter::KeywordFilter;
pub use format::OutputFormat;

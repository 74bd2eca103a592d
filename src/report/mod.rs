/// Report domain layer: table parsing, merging, rendering, persistence.
pub mod arch;
pub mod errors;
pub mod merge;
pub mod persist;
pub mod render;
pub mod table;

pub use arch::Arch;
pub use errors::ReportError;
pub use merge::{MergeConfig, MergedReport};
pub use persist::save_report;
pub use render::{NOT_FOUND, render_markdown, timestamp_now};
pub use table::{ToolVersions, parse_table_file};

pub mod collector;
pub mod config;
pub mod errors;
pub mod filters;
pub mod format;
pub mod logger;
pub mod reporting;
pub mod trie;
pub mod utils;

pub use collector::{capture_source_code, CaptureSummary};
pub use config::{CaptureConfig, FilterConfig};
pub use errors::CaptureError;
pub use filters::{DirectoryFilter, FileFilter, Filters};

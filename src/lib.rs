pub mod models;
pub mod golang;
pub mod boundary;  // Detection: pattern table, defaults, scanner
pub mod generators;  // Validation rules and fuzz harnesses
pub mod bridge;
pub mod discovery;
pub mod reporting;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use models::*;
pub use boundary::*;
pub use generators::*;
pub use bridge::*;
pub use discovery::*;
pub use reporting::*;
pub use config::{load_specs, OutputFormat, ScanConfig};
pub use error::{Error, Result};

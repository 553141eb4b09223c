// Boundary Detection Module
//
// Lexical, line-scoped discovery of points where external input enters a
// codebase:
//
// - patterns: the process-wide detection table (per-language regexes)
// - defaults: per-kind validation advice and fuzz seeds
// - scanner: applies the table to file content and builds findings
//
// Architecture:
//   patterns.rs   defaults.rs   (leaves, static tables)
//        ↑            ↑
//        └── scanner.rs ──┘
//                ↑
//   main.rs / bridge.rs

pub mod defaults;
pub mod patterns;
pub mod scanner;

pub use defaults::*;
pub use patterns::*;
pub use scanner::*;

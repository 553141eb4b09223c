// Defensive Code Generators
//
// Both generators consume ParameterSpecs and emit Go source text:
//
// - rules: validation snippets (length, range, enum, regex checks)
// - fuzz: a native Go fuzz test file seeded with boundary values
//
// They are independent of the scanner; bridge.rs maps findings to specs.

pub mod fuzz;
pub mod rules;

pub use fuzz::*;
pub use rules::*;

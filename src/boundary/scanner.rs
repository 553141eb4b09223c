// Boundary Scanner
//
// Applies the pattern table to file content one line at a time.
//
// Per line, every rule applicable to the file extension gets a single match
// attempt; a hit yields one Boundary. Findings are ordered by line, then by
// table order. Matching is purely lexical, so commented-out code and string
// literals can produce findings and multi-line calls are missed.
//
// Example:
//   Input:  `name := r.URL.Query().Get("username")` in handler.go
//   Output: Boundary { kind: HttpQuery, source: "URL Query", variable: "username", .. }

use std::path::Path;

use super::defaults::{fuzz_inputs, validation_rules};
use super::patterns::rules_for_extension;
use crate::models::Boundary;

/// Scan in-memory content. `ext` includes the leading dot (".go").
pub fn scan_content(content: &str, path: &str, ext: &str) -> Vec<Boundary> {
    let mut out = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        for rule in rules_for_extension(ext) {
            // A missing capture group is a table defect, not an input error
            let Some(variable) = rule.match_line(line) else {
                continue;
            };

            out.push(Boundary {
                file: path.to_string(),
                line: idx + 1,
                kind: rule.kind,
                source: rule.source.to_string(),
                variable: variable.to_string(),
                validation: validation_rules(rule.kind),
                fuzz_inputs: fuzz_inputs(rule.kind),
            });
        }
    }

    out
}

/// Read and scan a file. Unreadable files yield no findings.
pub fn scan_file(path: &Path, ext: &str) -> Vec<Boundary> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            return Vec::new();
        }
    };

    let found = scan_content(&content, &path.display().to_string(), ext);
    tracing::debug!(path = %path.display(), boundaries = found.len(), "scanned file");
    found
}

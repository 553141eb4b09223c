// Finding-to-spec bridge
//
// Maps scanner findings onto ParameterSpecs so a harness can be generated
// straight from a scan. Every boundary is text on the wire, so specs are
// strings bounded by the default maximum length and seeded with the
// attack payloads for the boundary's kind.

use std::collections::HashSet;

use crate::boundary::defaults::{fuzz_seeds, DEFAULT_MAX_LENGTH};
use crate::models::{Boundary, BoundaryKind, ParamType, ParameterSpec};

/// Default spec for a single finding
pub fn spec_for_boundary(boundary: &Boundary) -> ParameterSpec {
    spec_for_kind(&boundary.variable, boundary.kind)
}

/// Default spec for a named input of the given kind
pub fn spec_for_kind(name: &str, kind: BoundaryKind) -> ParameterSpec {
    let seeds: Vec<String> = fuzz_seeds(kind)
        .map(|seed| seed.value())
        .filter(|v| !v.is_empty() && v.len() <= DEFAULT_MAX_LENGTH)
        .collect();

    ParameterSpec::new(name, ParamType::String)
        .with_source(kind)
        .with_length(1, DEFAULT_MAX_LENGTH)
        .with_extra_seeds(seeds)
}

/// Specs for a list of findings; the first finding per variable wins
pub fn specs_for_boundaries(boundaries: &[Boundary]) -> Vec<ParameterSpec> {
    let mut seen = HashSet::new();
    boundaries
        .iter()
        .filter(|b| seen.insert(b.variable.as_str()))
        .map(spec_for_boundary)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::scanner::scan_content;

    #[test]
    fn spec_from_query_boundary() {
        let found = scan_content(r#"q := r.URL.Query().Get("search")"#, "h.go", ".go");
        let spec = spec_for_boundary(&found[0]);
        assert_eq!(spec.name, "search");
        assert_eq!(spec.param_type, ParamType::String);
        assert_eq!(spec.source, Some(BoundaryKind::HttpQuery));
        assert_eq!(spec.max_len(), DEFAULT_MAX_LENGTH);
        assert_eq!(spec.min_len(), 1);
        assert!(spec.extra_seeds.contains(&"../../../etc/passwd".to_string()));
    }

    #[test]
    fn oversized_and_empty_seeds_dropped() {
        let spec = spec_for_kind("h", BoundaryKind::HttpHeader);
        assert!(!spec.extra_seeds.iter().any(|s| s.is_empty()));
        assert!(spec.extra_seeds.iter().all(|s| s.len() <= DEFAULT_MAX_LENGTH));
        assert!(spec.extra_seeds.contains(&"\r\nX-Injected: true".to_string()));
    }

    #[test]
    fn duplicate_variables_collapsed() {
        let code = "a = os.getenv('KEY')\nb = os.getenv('KEY')\nc = request.args.get('q')\n";
        let found = scan_content(code, "app.py", ".py");
        assert_eq!(found.len(), 3);
        let specs = specs_for_boundaries(&found);
        let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["KEY", "q"]);
    }
}

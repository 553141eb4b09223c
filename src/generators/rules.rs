// Validation Rule Generator
//
// Turns ParameterSpecs into Go validation snippets. Each snippet returns a
// fmt.Errorf naming the parameter and the violated bound, allowed set or
// pattern. Checks are independent, so one spec can produce several rules.
//
// Emission order per spec:
//   1. max length (string-like, max > 0)
//   2. min length (string-like, min > 0)
//   3. combined range (int)
//   4. enum membership (any type, non-empty allowed set)
//   5. regex match (non-empty pattern)

use regex::Regex;
use std::collections::HashSet;

use crate::golang;
use crate::models::{ParamType, ParameterSpec, RuleKind, ValidationRule};

/// Generate rules for every spec, concatenated in input order
pub fn generate_rules(specs: &[ParameterSpec]) -> Vec<ValidationRule> {
    specs.iter().flat_map(rules_for_spec).collect()
}

/// Generate the rules for a single spec. No constraints means no rules.
pub fn rules_for_spec(spec: &ParameterSpec) -> Vec<ValidationRule> {
    let mut out = Vec::new();
    let name = spec.name.as_str();
    let var = golang::identifier(name);

    if spec.param_type.is_string_like() {
        let max = spec.max_len();
        if max > 0 {
            out.push(rule(
                spec,
                RuleKind::Length,
                format!(
                    "if len({var}) > {max} {{\n\treturn fmt.Errorf(\"{msg} exceeds max length {max}\")\n}}",
                    var = var,
                    max = max,
                    msg = message_text(name),
                ),
            ));
        }

        let min = spec.min_len();
        if min > 0 {
            out.push(rule(
                spec,
                RuleKind::Length,
                format!(
                    "if len({var}) < {min} {{\n\treturn fmt.Errorf(\"{msg} must be at least {min} characters\")\n}}",
                    var = var,
                    min = min,
                    msg = message_text(name),
                ),
            ));
        }
    }

    if spec.param_type == ParamType::Int {
        let range = spec.bounds();
        out.push(rule(
            spec,
            RuleKind::Range,
            format!(
                "if {var} < {min} || {var} > {max} {{\n\treturn fmt.Errorf(\"{msg} must be between {min} and {max}\")\n}}",
                var = var,
                min = range.min,
                max = range.max,
                msg = message_text(name),
            ),
        ));
    }

    if !spec.allowed_values.is_empty() {
        let mut seen = HashSet::new();
        let cases = spec
            .allowed_values
            .iter()
            .filter(|v| seen.insert(v.as_str()))
            .map(|v| golang::quote(v))
            .collect::<Vec<_>>()
            .join(", ");
        let display = spec
            .allowed_values
            .iter()
            .map(|v| message_text(&golang::quote(v)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(rule(
            spec,
            RuleKind::Enum,
            format!(
                "switch {var} {{\ncase {cases}:\n\t// valid\ndefault:\n\treturn fmt.Errorf(\"{msg} must be one of [{display}]\")\n}}",
                var = var,
                cases = cases,
                msg = message_text(name),
                display = display,
            ),
        ));
    }

    if let Some(pattern) = spec.pattern.as_deref().filter(|p| !p.is_empty()) {
        if let Err(e) = Regex::new(pattern) {
            tracing::warn!(param = name, error = %e, "pattern constraint does not compile; emitting rule anyway");
        }
        out.push(rule(
            spec,
            RuleKind::Regex,
            format!(
                "if matched, _ := regexp.MatchString({pat}, {var}); !matched {{\n\treturn fmt.Errorf(\"{msg} does not match required pattern {pat_msg}\")\n}}",
                pat = golang::quote(pattern),
                var = var,
                msg = message_text(name),
                pat_msg = message_text(&golang::quote(pattern)),
            ),
        ));
    }

    out
}

fn rule(spec: &ParameterSpec, kind: RuleKind, code: String) -> ValidationRule {
    ValidationRule {
        param_name: spec.name.clone(),
        kind,
        code,
    }
}

/// Escape text for embedding inside a double-quoted Go format string.
///
/// The result sits between the quotes of `fmt.Errorf("...")`, so quotes and
/// backslashes are escaped and `%` is doubled.
fn message_text(s: &str) -> String {
    let quoted = golang::quote(s);
    quoted[1..quoted.len() - 1].replace('%', "%%")
}

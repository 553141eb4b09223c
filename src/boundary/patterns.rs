// Detection Pattern Table
//
// Ordered, read-only table of per-language rules. Each rule names the file
// extensions it applies to, the kind of boundary it finds, a human-readable
// source label and the capture group that holds the variable name.
//
// Table order matters: when several rules hit the same line, findings come
// out in the order listed here.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::BoundaryKind;

/// One detection rule
#[derive(Debug)]
pub struct PatternRule {
    pub extensions: &'static [&'static str],
    pub kind: BoundaryKind,
    pub source: &'static str,
    pub pattern: Regex,
    pub capture: usize,
}

impl PatternRule {
    fn new(
        extensions: &'static [&'static str],
        kind: BoundaryKind,
        source: &'static str,
        pattern: &str,
        capture: usize,
    ) -> Self {
        Self {
            extensions,
            kind,
            source,
            pattern: Regex::new(pattern).unwrap(),
            capture,
        }
    }

    pub fn applies_to(&self, ext: &str) -> bool {
        self.extensions.contains(&ext)
    }

    /// First match on `line`, returning the captured variable name
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(self.capture))
            .map(|m| m.as_str())
    }
}

/// Extensions the scanner understands
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".go", ".py", ".js", ".ts"];

lazy_static! {
    pub static ref PATTERN_RULES: Vec<PatternRule> = vec![
        // Go: net/http
        PatternRule::new(
            &[".go"],
            BoundaryKind::HttpQuery,
            "URL Query",
            r#"(?:URL\.Query\(\)\.Get|FormValue)\("([^"]+)"\)"#,
            1,
        ),
        PatternRule::new(
            &[".go"],
            BoundaryKind::EnvVar,
            "Env Var",
            r#"os\.Getenv\("([^"]+)"\)"#,
            1,
        ),
        PatternRule::new(
            &[".go"],
            BoundaryKind::HttpHeader,
            "HTTP Header",
            r#"Header\.Get\("([^"]+)"\)"#,
            1,
        ),
        // Python: Flask / Django request objects
        PatternRule::new(
            &[".py"],
            BoundaryKind::HttpQuery,
            "Flask/Django",
            r#"request\.(?:args|form|json)(?:\.get\(|\.?\[)['"](\w+)"#,
            1,
        ),
        PatternRule::new(
            &[".py"],
            BoundaryKind::EnvVar,
            "Env Var",
            r#"os\.(?:environ\.get|getenv)\(['"]([^'"]+)['"]\)"#,
            1,
        ),
        // JavaScript / TypeScript: Express
        PatternRule::new(
            &[".js", ".ts"],
            BoundaryKind::HttpQuery,
            "Express",
            r"req\.(query|params|body)\.(\w+)",
            2,
        ),
        PatternRule::new(
            &[".js", ".ts"],
            BoundaryKind::EnvVar,
            "Env Var",
            r"process\.env\.(\w+)",
            1,
        ),
    ];
}

/// Rules applicable to a file extension, in table order
pub fn rules_for_extension(ext: &str) -> impl Iterator<Item = &'static PatternRule> + '_ {
    PATTERN_RULES.iter().filter(move |r| r.applies_to(ext))
}

pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_indices_fit_patterns() {
        for rule in PATTERN_RULES.iter() {
            assert!(
                rule.capture < rule.pattern.captures_len(),
                "rule {} has capture {} but only {} groups",
                rule.source,
                rule.capture,
                rule.pattern.captures_len()
            );
        }
    }

    #[test]
    fn every_supported_extension_has_rules() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(rules_for_extension(ext).count() >= 2, "{} has too few rules", ext);
        }
        assert_eq!(rules_for_extension(".rb").count(), 0);
    }

    #[test]
    fn go_form_value_matches() {
        let rule = &PATTERN_RULES[0];
        assert_eq!(rule.match_line(r#"v := r.FormValue("page")"#), Some("page"));
    }

    #[test]
    fn python_subscript_forms_match() {
        let rule = &PATTERN_RULES[3];
        assert_eq!(rule.match_line("x = request.form['email']"), Some("email"));
        assert_eq!(rule.match_line("x = request.json[\"token\"]"), Some("token"));
        assert_eq!(rule.match_line("x = request.args.get('q')"), Some("q"));
    }

    #[test]
    fn express_uses_second_group() {
        let rule = &PATTERN_RULES[5];
        assert_eq!(rule.match_line("const n = req.body.nickname;"), Some("nickname"));
    }

    #[test]
    fn only_first_match_used() {
        let rule = &PATTERN_RULES[6];
        assert_eq!(
            rule.match_line("const a = process.env.FIRST || process.env.SECOND"),
            Some("FIRST")
        );
    }
}

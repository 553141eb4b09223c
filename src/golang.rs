// Go source-text helpers
//
// Both generators emit Go. Quoting follows strconv.Quote so that any
// caller-supplied seed, enum value or pattern lands in a valid string literal.

/// Quote `s` as a double-quoted Go string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if is_printable(c) => out.push(c),
            c if (c as u32) < 0x80 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out.push('"');
    out
}

fn is_printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace())
}

/// Go's reserved words
pub const KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// Letter as Go's identifier grammar sees it (`_` excluded).
///
/// Numeric letters (Ⅻ), combining marks and enclosed letter symbols (Ⓐ)
/// carry the Alphabetic property but are not in Go's letter class.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric() && !is_other_alphabetic(c)
}

/// Decimal digit. Non-ASCII digits are treated as separators.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_other_alphabetic(c: char) -> bool {
    matches!(
        c as u32,
        0x0300..=0x036F | 0x0483..=0x0489 | 0x0591..=0x05C7 | 0x0610..=0x061A
            | 0x064B..=0x065F | 0x0670 | 0x06D6..=0x06ED | 0x0900..=0x0903
            | 0x093A..=0x094F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF
            | 0x20D0..=0x20FF | 0x24B6..=0x24E9 | 0xFE20..=0xFE2F
            | 0x1F130..=0x1F189
    )
}

/// Turn an arbitrary parameter name into a usable Go identifier.
///
/// Characters outside letters, digits and `_` become `_`; a leading digit
/// gets a `_` prefix; keywords get a `_` suffix; an empty or blank (`_`)
/// name becomes `v`.
pub fn identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if is_letter(c) || is_digit(c) || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident == "_" {
        return "v".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

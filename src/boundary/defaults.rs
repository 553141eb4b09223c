// Per-Kind Defaults
//
// Single mapping from boundary kind to the validation advice and fuzz seeds
// attached to every finding of that kind. The scanner uses the descriptions;
// the bridge uses the concrete seed values.

use crate::golang;
use crate::models::BoundaryKind;

/// A fuzz seed with both a display form and a concrete value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzSeed {
    Literal(&'static str),
    /// `unit` repeated `count` times
    Repeat(&'static str, usize),
    /// Code points U+0000..=U+00FF, one char each. Seeds are Go string
    /// literals built from UTF-8 text, so 0x80..=0xff appear as Latin-1
    /// characters (two UTF-8 bytes), not raw bytes.
    ByteRange,
}

impl FuzzSeed {
    pub fn describe(&self) -> String {
        match self {
            FuzzSeed::Literal(s) => golang::quote(s),
            FuzzSeed::Repeat(unit, count) => format!("{}x{}", golang::quote(unit), count),
            FuzzSeed::ByteRange => "\"bytes(0x00-0xff)\"".to_string(),
        }
    }

    pub fn value(&self) -> String {
        match self {
            FuzzSeed::Literal(s) => s.to_string(),
            FuzzSeed::Repeat(unit, count) => unit.repeat(*count),
            FuzzSeed::ByteRange => (0u8..=0xff).map(char::from).collect(),
        }
    }
}

/// Maximum input length recommended for every boundary
pub const DEFAULT_MAX_LENGTH: usize = 1024;

const BASE_VALIDATION: &[&str] = &["check non-empty", "max length 1024"];

const BASE_FUZZ: &[FuzzSeed] = &[
    FuzzSeed::Literal(""),
    FuzzSeed::Literal("<script>alert(1)</script>"),
    FuzzSeed::Literal("' OR 1=1--"),
    FuzzSeed::Repeat("A", 10000),
];

/// Kind-specific additions on top of the baseline
pub struct KindProfile {
    pub validation: &'static [&'static str],
    pub fuzz: &'static [FuzzSeed],
}

pub fn profile(kind: BoundaryKind) -> KindProfile {
    match kind {
        BoundaryKind::HttpQuery => KindProfile {
            validation: &["sanitize HTML entities", "validate against allowlist"],
            fuzz: &[
                FuzzSeed::Literal("%0d%0aInjected"),
                FuzzSeed::Literal("{{7*7}}"),
                FuzzSeed::Literal("../../../etc/passwd"),
            ],
        },
        BoundaryKind::HttpHeader => KindProfile {
            validation: &["reject CRLF characters", "validate header format"],
            fuzz: &[
                FuzzSeed::Literal("\r\nX-Injected: true"),
                FuzzSeed::ByteRange,
            ],
        },
        BoundaryKind::EnvVar => KindProfile {
            validation: &["provide default value", "validate format on startup"],
            fuzz: &[
                FuzzSeed::Literal("$(whoami)"),
                FuzzSeed::Literal("; rm -rf /"),
                FuzzSeed::Literal("\0NULL"),
            ],
        },
    }
}

/// Baseline plus kind-specific seeds, in order
pub fn fuzz_seeds(kind: BoundaryKind) -> impl Iterator<Item = FuzzSeed> {
    let extra = profile(kind).fuzz;
    BASE_FUZZ.iter().chain(extra.iter()).copied()
}

/// Validation advice for a boundary kind
pub fn validation_rules(kind: BoundaryKind) -> Vec<String> {
    let extra = profile(kind).validation;
    BASE_VALIDATION
        .iter()
        .chain(extra.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Fuzz seed descriptions for a boundary kind
pub fn fuzz_inputs(kind: BoundaryKind) -> Vec<String> {
    fuzz_seeds(kind).map(|seed| seed.describe()).collect()
}

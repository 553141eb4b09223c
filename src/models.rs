// Core data models for BoundaryGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where externally-controlled data enters the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    HttpQuery,
    HttpHeader,
    EnvVar,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 3] = [
        BoundaryKind::HttpQuery,
        BoundaryKind::HttpHeader,
        BoundaryKind::EnvVar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::HttpQuery => "http_query",
            BoundaryKind::HttpHeader => "http_header",
            BoundaryKind::EnvVar => "env_var",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discovered usage site of external input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub file: String,
    /// 1-based line number
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: BoundaryKind,
    pub source: String,
    pub variable: String,
    #[serde(rename = "validation_rules")]
    pub validation: Vec<String>,
    pub fuzz_inputs: Vec<String>,
}

/// Declared type of a parameter fed to the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    #[default]
    String,
    Int,
    Uint,
    #[serde(alias = "float64")]
    Float,
    Enum,
}

impl ParamType {
    /// String and enum parameters are both carried as text
    pub fn is_string_like(&self) -> bool {
        matches!(self, ParamType::String | ParamType::Enum)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamType::String => "string",
            ParamType::Int => "int",
            ParamType::Uint => "uint",
            ParamType::Float => "float",
            ParamType::Enum => "enum",
        };
        write!(f, "{}", s)
    }
}

/// String length constraint; 0 means "not set" on either side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LengthBounds {
    #[serde(default)]
    pub min: usize,
    #[serde(default)]
    pub max: usize,
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

/// Structured description of one parameter, input to the rule and fuzz generators
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<BoundaryKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_seeds: Vec<String>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            ..Default::default()
        }
    }

    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.length = Some(LengthBounds { min, max });
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.range = Some(NumericRange { min, max });
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_extra_seeds<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_seeds = seeds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, kind: BoundaryKind) -> Self {
        self.source = Some(kind);
        self
    }

    pub fn max_len(&self) -> usize {
        self.length.map(|l| l.max).unwrap_or(0)
    }

    pub fn min_len(&self) -> usize {
        self.length.map(|l| l.min).unwrap_or(0)
    }

    /// Numeric bounds, `0..=0` when none were supplied
    pub fn bounds(&self) -> NumericRange {
        self.range.unwrap_or_default()
    }
}

/// Category of a generated validation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Length,
    Range,
    Enum,
    Regex,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleKind::Length => "length",
            RuleKind::Range => "range",
            RuleKind::Enum => "enum",
            RuleKind::Regex => "regex",
        };
        write!(f, "{}", s)
    }
}

/// A generated Go validation snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub param_name: String,
    pub kind: RuleKind,
    pub code: String,
}

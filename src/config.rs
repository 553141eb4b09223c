// Run configuration for the BoundaryGuard CLI

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::ParameterSpec;

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

/// Settings for a directory scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub format: OutputFormat,
    /// 0 = unlimited
    pub max_files: usize,
    pub fail_on_findings: bool,
    /// Write a timestamped report file here in addition to stdout
    pub export_dir: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            format: OutputFormat::Text,
            max_files: 0,
            fail_on_findings: false,
            export_dir: None,
        }
    }
}

/// Load a JSON array of parameter specs
pub fn load_specs(path: &Path) -> Result<Vec<ParameterSpec>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let specs: Vec<ParameterSpec> =
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = specs.len(), "loaded parameter specs");
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParamType;
    use std::io::Write;

    #[test]
    fn parse_formats() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(Error::InvalidFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn default_scan_config_is_unlimited_text_in_cwd() {
        let config = ScanConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.max_files, 0);
        assert!(!config.fail_on_findings);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn load_specs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "age", "type": "int", "range": {{"min": 0, "max": 150}}}},
                {{"name": "status", "allowed_values": ["a", "b"]}}]"#
        )
        .unwrap();
        let specs = load_specs(file.path()).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].param_type, ParamType::Int);
        assert_eq!(specs[1].param_type, ParamType::String);
        assert_eq!(specs[1].allowed_values, vec!["a", "b"]);
    }

    #[test]
    fn load_specs_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(load_specs(file.path()), Err(Error::Json { .. })));
        assert!(matches!(
            load_specs(Path::new("/no/such/specs.json")),
            Err(Error::Io { .. })
        ));
    }
}

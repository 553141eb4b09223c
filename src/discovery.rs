// Source file discovery
// Uses walkdir to find scannable files under a root directory

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::boundary::patterns::is_supported_extension;
use crate::boundary::scanner::scan_file;
use crate::models::Boundary;

/// A file eligible for scanning, with its lower-cased extension (".go")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub ext: String,
}

/// Lower-cased extension with leading dot, if any
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
}

/// Walk `root` in file-name order and collect supported source files.
/// `max_files` of 0 means no limit. Unreadable entries are skipped.
pub fn discover_files(root: &Path, max_files: usize) -> Vec<SourceFile> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(ext) = dotted_extension(entry.path()) else {
            continue;
        };
        if !is_supported_extension(&ext) {
            continue;
        }
        if max_files > 0 && files.len() >= max_files {
            tracing::info!(limit = max_files, "file limit reached, remaining files skipped");
            break;
        }
        files.push(SourceFile {
            path: entry.into_path(),
            ext,
        });
    }

    files
}

/// Scan every discovered file, returning the file count and all findings
pub fn scan_directory(root: &Path, max_files: usize) -> (usize, Vec<Boundary>) {
    let files = discover_files(root, max_files);
    let mut all = Vec::new();
    for file in &files {
        all.extend(scan_file(&file.path, &file.ext));
    }
    tracing::info!(files = files.len(), boundaries = all.len(), "scan complete");
    (files.len(), all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extension_lowercased() {
        assert_eq!(dotted_extension(Path::new("a/B.GO")), Some(".go".to_string()));
        assert_eq!(dotted_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn discovers_only_supported_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.go"), "package a").unwrap();
        fs::write(dir.path().join("b.PY"), "x = 1").unwrap();
        fs::write(dir.path().join("c.rs"), "fn main() {}").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/d.ts"), "let a = 1").unwrap();

        let files = discover_files(dir.path(), 0);
        let exts: Vec<_> = files.iter().map(|f| f.ext.as_str()).collect();
        assert_eq!(exts, vec![".go", ".py", ".ts"]);
    }

    #[test]
    fn max_files_caps_discovery() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.js", "b.js", "c.js"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(discover_files(dir.path(), 2).len(), 2);
        assert_eq!(discover_files(dir.path(), 0).len(), 3);
    }
}

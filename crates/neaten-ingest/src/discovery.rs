//! Input file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Directory searched when no input files are given.
pub const DEFAULT_INPUT_DIR: &str = "../..";

/// Filename prefix of the released treebank splits.
pub const DEFAULT_INPUT_PREFIX: &str = "en_ewt-ud-";

/// Filename suffix of CoNLL-U files.
pub const CONLLU_SUFFIX: &str = ".conllu";

/// Lists files in `dir` whose name is `<prefix>*<suffix>`.
///
/// Returns files sorted by filename. A missing directory yields no files.
pub fn list_matching(dir: &Path, prefix: &str, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "input directory does not exist");
        return Ok(files);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = path.file_name().and_then(|v| v.to_str()).unwrap_or("");
        if name.len() >= prefix.len() + suffix.len()
            && name.starts_with(prefix)
            && name.ends_with(suffix)
        {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// The released splits two directories up: `../../en_ewt-ud-*.conllu`.
pub fn default_inputs() -> Result<Vec<PathBuf>> {
    list_matching(
        Path::new(DEFAULT_INPUT_DIR),
        DEFAULT_INPUT_PREFIX,
        CONLLU_SUFFIX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &[
            "en_ewt-ud-train.conllu",
            "en_ewt-ud-dev.conllu",
            "en_ewt-ud-test.conllu",
            "en_ewt-ud-dev.txt",
            "en_gum-ud-dev.conllu",
        ] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("en_ewt-ud-dir.conllu")).unwrap();
        dir
    }

    #[test]
    fn test_list_matching_filters_and_sorts() {
        let dir = create_test_dir();
        let files = list_matching(dir.path(), DEFAULT_INPUT_PREFIX, CONLLU_SUFFIX).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "en_ewt-ud-dev.conllu",
                "en_ewt-ud-test.conllu",
                "en_ewt-ud-train.conllu"
            ]
        );
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let files =
            list_matching(&dir.path().join("absent"), DEFAULT_INPUT_PREFIX, CONLLU_SUFFIX).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_prefix_and_suffix_do_not_overlap() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.conllu"), "").unwrap();
        let files = list_matching(dir.path(), "a.conllu", ".conllu").unwrap();
        assert!(files.is_empty());
    }
}

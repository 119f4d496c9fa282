//! Assembling split files from per-document sources, and the reverse.
//!
//! Layout under the corpus root:
//!
//! - `<prefix>-<split>.conllu`: released split files
//! - `not-to-release/file-lists/files.<split>`: source paths per split
//! - `not-to-release/sources/<subcorpus>/<docid>.xml.conllu`: one file per document

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Split names, in build order.
pub const SPLITS: [&str; 3] = ["train", "dev", "test"];

/// Prefix of the released split files.
pub const DEFAULT_PREFIX: &str = "en_ewt-ud";

const NEWDOC_PREFIX: &str = "# newdoc id = ";

/// Metadata lines dropped when splitting documents back out.
const DROPPED_COMMENTS: [&str; 2] = ["# streusle_sent_id", "# mwe ="];

/// Paths of a corpus checkout.
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    root: PathBuf,
    prefix: String,
}

impl CorpusLayout {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split_file(&self, split: &str) -> PathBuf {
        self.root.join(format!("{}-{split}.conllu", self.prefix))
    }

    pub fn file_list(&self, split: &str) -> PathBuf {
        self.root
            .join("not-to-release")
            .join("file-lists")
            .join(format!("files.{split}"))
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root.join("not-to-release").join("sources")
    }
}

/// Result of writing one split file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub split: &'static str,
    pub path: PathBuf,
    pub documents: usize,
}

/// Concatenate the sources listed for each split into its split file.
pub fn build(layout: &CorpusLayout) -> Result<Vec<SplitSummary>> {
    ensure_root(layout)?;
    let mut summaries = Vec::with_capacity(SPLITS.len());
    for split in SPLITS {
        let list_path = layout.file_list(split);
        let list = read_to_string(&list_path)?;
        let out_path = layout.split_file(split);
        let mut out = create(&out_path)?;
        let mut documents = 0;
        for source in list.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let source_path = layout.sources_dir().join(source);
            let data = read_to_string(&source_path)?;
            out.write_all(data.as_bytes())
                .map_err(|e| write_error(&out_path, e))?;
            documents += 1;
        }
        out.flush().map_err(|e| write_error(&out_path, e))?;
        info!(split, documents, path = %out_path.display(), "built split");
        summaries.push(SplitSummary {
            split,
            path: out_path,
            documents,
        });
    }
    Ok(summaries)
}

/// Split each split file back into per-document source files.
///
/// Returns the number of documents written.
pub fn unbuild(layout: &CorpusLayout) -> Result<usize> {
    ensure_root(layout)?;
    let mut documents = 0;
    for split in SPLITS {
        let split_path = layout.split_file(split);
        let file = fs::File::open(&split_path).map_err(|e| IngestError::FileRead {
            path: split_path.clone(),
            source: e,
        })?;
        let mut current: Option<(PathBuf, BufWriter<fs::File>)> = None;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| IngestError::FileRead {
                path: split_path.clone(),
                source: e,
            })?;
            if let Some(full_id) = line.strip_prefix(NEWDOC_PREFIX) {
                if let Some((path, mut writer)) = current.take() {
                    writer.flush().map_err(|e| write_error(&path, e))?;
                }
                let target = document_path(layout, full_id.trim()).ok_or_else(|| {
                    IngestError::CorpusFormat {
                        path: split_path.clone(),
                        line: index + 1,
                        reason: format!("document id '{}' has no subcorpus", full_id.trim()),
                    }
                })?;
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
                }
                debug!(path = %target.display(), "writing document");
                current = Some((target.clone(), create(&target)?));
                documents += 1;
            } else if DROPPED_COMMENTS
                .iter()
                .any(|prefix| line.starts_with(prefix))
            {
                continue;
            }
            let Some((path, writer)) = current.as_mut() else {
                return Err(IngestError::CorpusFormat {
                    path: split_path.clone(),
                    line: index + 1,
                    reason: "content before the first newdoc id".to_string(),
                });
            };
            writeln!(writer, "{line}").map_err(|e| write_error(path, e))?;
        }
        if let Some((path, mut writer)) = current.take() {
            writer.flush().map_err(|e| write_error(&path, e))?;
        }
    }
    info!(documents, "unbuilt split files");
    Ok(documents)
}

/// `reviews-001325` becomes `sources/reviews/001325.xml.conllu`.
fn document_path(layout: &CorpusLayout, full_id: &str) -> Option<PathBuf> {
    let (subcorpus, doc_id) = full_id.split_once('-')?;
    if subcorpus.is_empty() || doc_id.is_empty() {
        return None;
    }
    Some(
        layout
            .sources_dir()
            .join(subcorpus)
            .join(format!("{doc_id}.xml.conllu")),
    )
}

fn ensure_root(layout: &CorpusLayout) -> Result<()> {
    if layout.root().is_dir() {
        Ok(())
    } else {
        Err(IngestError::DirectoryNotFound {
            path: layout.root().to_path_buf(),
        })
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn create(path: &Path) -> Result<BufWriter<fs::File>> {
    fs::File::create(path)
        .map(BufWriter::new)
        .map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> IngestError {
    IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

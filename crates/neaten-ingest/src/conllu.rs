//! Streaming CoNLL-U reader.
//!
//! Sentences are blank-line separated blocks of `#` comments followed by
//! ten-column token lines. The reader tracks `# newdoc id` across the blocks
//! of one file and stamps every sentence with the current document id and
//! the file's basename.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use neaten_model::{EnhancedDep, Features, Misc, ModelError, Sentence, Token, TokenId, Upos};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

const COLUMNS: usize = 10;

/// Iterator over the sentences of one CoNLL-U source.
pub struct ConlluReader<R> {
    lines: std::io::Lines<R>,
    filename: String,
    line_no: usize,
    doc: Option<String>,
    done: bool,
}

impl ConlluReader<BufReader<File>> {
    /// Open a file; sentences carry the file's basename.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file = %filename, "opened CoNLL-U file");
        Ok(Self::new(BufReader::new(file), filename))
    }
}

impl<R: BufRead> ConlluReader<R> {
    pub fn new(reader: R, filename: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            filename: filename.into(),
            line_no: 0,
            doc: None,
            done: false,
        }
    }

    fn read_block(&mut self) -> Option<Result<Sentence>> {
        let mut comments = Vec::new();
        let mut tokens = Vec::new();
        let mut start_line = 0;
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(IngestError::FileRead {
                        path: self.filename.clone().into(),
                        source: e,
                    }));
                }
                None => {
                    self.done = true;
                    break;
                }
            };
            self.line_no += 1;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                if comments.is_empty() && tokens.is_empty() {
                    continue;
                }
                break;
            }
            if start_line == 0 {
                start_line = self.line_no;
            }
            if let Some(comment) = line.strip_prefix('#') {
                comments.push(comment.trim().to_string());
                continue;
            }
            match self.parse_token(line) {
                Ok(token) => tokens.push(token),
                Err(e) => return Some(Err(e)),
            }
        }
        if comments.is_empty() && tokens.is_empty() {
            return None;
        }
        Some(self.finish_sentence(comments, tokens, start_line))
    }

    fn finish_sentence(
        &mut self,
        comments: Vec<String>,
        tokens: Vec<Token>,
        start_line: usize,
    ) -> Result<Sentence> {
        let mut sent_id = None;
        for comment in &comments {
            let Some((key, value)) = comment.split_once('=') else {
                continue;
            };
            match key.trim() {
                "newdoc id" => self.doc = Some(value.trim().to_string()),
                "sent_id" => sent_id = Some(value.trim().to_string()),
                _ => {}
            }
        }
        let sent_id = sent_id.ok_or_else(|| IngestError::MissingSentId {
            file: self.filename.clone(),
            line: start_line,
        })?;
        trace!(sent_id = %sent_id, tokens = tokens.len(), "parsed sentence");
        Ok(Sentence {
            sent_id,
            doc: self.doc.clone(),
            filename: self.filename.clone(),
            comments,
            tokens,
        })
    }

    fn parse_token(&self, line: &str) -> Result<Token> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMNS {
            return Err(IngestError::ColumnCount {
                file: self.filename.clone(),
                line: self.line_no,
                found: columns.len(),
            });
        }
        let id: TokenId = columns[0]
            .parse()
            .map_err(|e| self.invalid_field("ID", e))?;
        let head = match columns[6] {
            "_" | "" => None,
            raw => Some(raw.parse::<usize>().map_err(|_| {
                self.invalid_field("HEAD", ModelError::InvalidHead(raw.to_string()))
            })?),
        };
        let deps = match columns[8] {
            "_" | "" => None,
            raw => Some(
                raw.split('|')
                    .map(str::parse::<EnhancedDep>)
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| self.invalid_field("DEPS", e))?,
            ),
        };
        Ok(Token {
            id,
            form: columns[1].to_string(),
            lemma: columns[2].to_string(),
            upos: Upos::parse(columns[3]),
            xpos: columns[4].to_string(),
            feats: Features::parse(columns[5]),
            head,
            deprel: columns[7].to_string(),
            deps,
            misc: Misc::parse(columns[9]),
            merged: false,
        })
    }
}

impl<R> ConlluReader<R> {
    fn invalid_field(&self, field: &'static str, source: ModelError) -> IngestError {
        IngestError::InvalidField {
            file: self.filename.clone(),
            line: self.line_no,
            field,
            source,
        }
    }
}

impl<R: BufRead> Iterator for ConlluReader<R> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.read_block()
    }
}

/// Parse an in-memory CoNLL-U document.
pub fn parse_str(content: &str, filename: &str) -> Result<Vec<Sentence>> {
    ConlluReader::new(content.as_bytes(), filename).collect()
}

/// Read every sentence of a file.
pub fn read_file(path: &Path) -> Result<Vec<Sentence>> {
    ConlluReader::open(path)?.collect()
}

//! # Extracting TODOs from a set of source files.
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::parser::{self, Metadata, ParsedComment};

/// A file's path and full contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
    /// The base name of `path`.
    pub filename: String,
}

impl SourceFile {
    /// ```rust
    /// use todo_query_lib::SourceFile;
    ///
    /// let file = SourceFile::new("src/lib/index.js", "");
    /// assert_eq!(file.filename, "index.js");
    /// ```
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        let filename = Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        SourceFile {
            path,
            content: content.into(),
            filename,
        }
    }
}

/// A TODO comment found in a source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub file: String,
    pub filename: String,
    /// 1-based.
    pub line_number: usize,
    pub author: Option<String>,
    /// The date as it was written in the comment.
    pub date: Option<String>,
    pub date_value: Option<NaiveDate>,
    pub comment: String,
    pub important: bool,
}

impl Todo {
    pub fn new(file: &SourceFile, line_number: usize, parsed: ParsedComment) -> Self {
        let ParsedComment {
            metadata,
            comment,
            important,
        } = parsed;
        let (author, date, date_value) = match metadata {
            Some(Metadata {
                author,
                date,
                date_value,
            }) => (Some(author), Some(date), Some(date_value)),
            None => (None, None, None),
        };
        Todo {
            file: file.path.clone(),
            filename: file.filename.clone(),
            line_number,
            author,
            date,
            date_value,
            comment,
            important,
        }
    }

    /// The number of importance markers in the note.
    pub fn importance(&self) -> usize {
        self.comment
            .chars()
            .filter(|c| *c == parser::metadata::IMPORTANT_MARKER)
            .count()
    }
}

/// Find the TODOs in one file, in line order.
pub fn extract_file(file: &SourceFile) -> impl Iterator<Item = Todo> + '_ {
    parser::numbered_lines(&file.content).filter_map(move |(line_number, line)| {
        let raw = parser::todo_comment(line)?;
        log::trace!("  found a TODO in {} on line {line_number}: '{raw}'", file.path);
        Some(Todo::new(file, line_number, parser::parse_comment(raw)))
    })
}

/// Find the TODOs in all files, in file order and then line order.
pub fn extract(files: &[SourceFile]) -> Vec<Todo> {
    files.iter().flat_map(extract_file).collect()
}

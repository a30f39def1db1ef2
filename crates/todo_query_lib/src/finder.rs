//! Finding and reading the source files that make up a snapshot.
pub mod langs;

use snafu::ResultExt;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{
    extract::{extract, SourceFile, Todo},
    Message, PrefixSnafu, Result, WalkSnafu,
};

/// Directories that are never scanned.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "vendor",
    "dist",
    "build",
    "__pycache__",
    ".venv",
];

pub struct FileSearcher;

impl FileSearcher {
    /// Find the files below `root` with one of the given extensions, skipping
    /// any directory named in [`SKIP_DIRS`] or `excludes`. Paths are sorted.
    pub fn find(
        root: &Path,
        extensions: &[String],
        excludes: &[String],
    ) -> Result<Vec<PathBuf>> {
        let is_excluded = |entry: &DirEntry| {
            entry.depth() > 0
                && entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .map(|name| {
                        SKIP_DIRS.contains(&name) || excludes.iter().any(|ex| ex == name)
                    })
                    .unwrap_or(false)
        };

        let mut paths = vec![];
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        for entry in walker.filter_entry(|entry| !is_excluded(entry)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(err).context(WalkSnafu { path: root });
                }
                Err(err) => {
                    log::warn!("skipping an unreadable entry: {err}");
                    Message::SkippedFile {
                        path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                        reason: err.to_string(),
                    }
                    .send();
                    continue;
                }
            };
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// The source files of a project, captured once. A snapshot never changes
/// after it is taken.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    files: Vec<SourceFile>,
}

impl Snapshot {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Snapshot { files }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Extract the TODOs afresh, in baseline order.
    pub fn todos(&self) -> Vec<Todo> {
        extract(&self.files)
    }

    /// Read every matching file below `root`. Files that can't be read as
    /// UTF-8 text are skipped. Paths are kept relative to `root`.
    pub async fn from_directory(
        root: impl AsRef<Path>,
        extensions: &[String],
        excludes: &[String],
    ) -> Result<Snapshot> {
        let root = root.as_ref();
        Message::ScanningFiles {
            root: root.to_path_buf(),
        }
        .send();

        let paths = FileSearcher::find(root, extensions, excludes)?;
        let mut files = vec![];
        for path in paths.into_iter() {
            log::trace!("Reading {path:?}");
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("skipping {path:?}: {err}");
                    Message::SkippedFile {
                        path,
                        reason: err.to_string(),
                    }
                    .send();
                    continue;
                }
            };

            let relative = path.strip_prefix(root).context(PrefixSnafu { path: &path })?;
            let display_path = if relative.as_os_str().is_empty() {
                path.display().to_string()
            } else {
                relative.display().to_string()
            };
            Message::ReadFile { path: path.clone() }.send();
            files.push(SourceFile::new(display_path, content));
        }

        Message::ScannedFiles { count: files.len() }.send();
        Ok(Snapshot::new(files))
    }
}

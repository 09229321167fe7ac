//! Parse-forest providers: the set of parsed files a [`Query`] runs over.
//!
//! Loading is the only I/O in this crate. Once a [`SourceForest`] exists it
//! is immutable, and every query borrows it.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::ForestError;
use crate::parser::{AstTree, is_csharp_path, parse_source};
use crate::query::Query;
use crate::walk::{LoadOptions, build_walker};

/// One parsed translation unit.
pub struct ParsedFile {
    pub(crate) path: PathBuf,
    pub(crate) source: String,
    pub(crate) tree: AstTree,
}

impl ParsedFile {
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let source = source.into();
        let tree = parse_source(&source);
        Self {
            path: path.into(),
            source,
            tree,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn tree(&self) -> &AstTree {
        &self.tree
    }
}

impl fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("bytes", &self.source.len())
            .finish_non_exhaustive()
    }
}

/// Anything that can hand out an ordered list of parsed files plus the
/// directory their relative paths are computed against.
pub trait ForestProvider {
    fn entry_path(&self) -> &Path;

    fn parsed_files(&self) -> &[ParsedFile];
}

/// The in-crate [`ForestProvider`].
#[derive(Debug)]
pub struct SourceForest {
    entry_path: PathBuf,
    files: Vec<ParsedFile>,
}

impl SourceForest {
    #[must_use]
    pub fn new(entry_path: impl Into<PathBuf>, files: Vec<ParsedFile>) -> Self {
        Self {
            entry_path: entry_path.into(),
            files,
        }
    }

    /// Parse in-memory sources. Relative paths are joined onto `entry_path`.
    pub fn from_sources<P, S>(
        entry_path: impl Into<PathBuf>,
        sources: impl IntoIterator<Item = (P, S)>,
    ) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let entry_path = entry_path.into();
        let files = sources
            .into_iter()
            .map(|(path, source)| ParsedFile::parse(entry_path.join(path.into()), source))
            .collect();
        Self { entry_path, files }
    }

    /// Walk `root` and parse every C# file it contains.
    ///
    /// Files that are not valid UTF-8 are skipped with a warning.
    ///
    /// # Errors
    /// Returns [`ForestError::EntryPath`] if `root` is not a directory,
    /// [`ForestError::InvalidGlob`] for bad include/exclude globs, and
    /// [`ForestError::Walk`] or [`ForestError::Io`] for filesystem failures.
    pub fn load(root: impl Into<PathBuf>, options: &LoadOptions) -> Result<Self, ForestError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ForestError::EntryPath(root));
        }

        let mut files = Vec::new();
        let mut skipped = 0usize;
        for entry in build_walker(&root, options)? {
            let entry = entry?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_csharp_path(entry.path())
            {
                continue;
            }

            let path = entry.into_path();
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(path = %path.display(), "skipping non-UTF-8 source file");
                    skipped += 1;
                    continue;
                }
                Err(source) => return Err(ForestError::Io { path, source }),
            };
            tracing::debug!(path = %path.display(), bytes = source.len(), "parsed source file");
            files.push(ParsedFile::parse(path, source));
        }

        tracing::info!(
            root = %root.display(),
            files = files.len(),
            skipped,
            "loaded source forest"
        );
        Ok(Self {
            entry_path: root,
            files,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Start a query over this forest.
    #[must_use]
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }
}

impl ForestProvider for SourceForest {
    fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    fn parsed_files(&self) -> &[ParsedFile] {
        &self.files
    }
}

/// Project directory of a build artifact: everything before the first path
/// component equal to `marker`.
///
/// `/src/App/obj/Debug/net8.0/App.dll` with marker `obj` gives `/src/App`.
#[must_use]
pub fn entry_path_from_build_output(path: &Path, marker: &str) -> Option<PathBuf> {
    let mut entry = PathBuf::new();
    for component in path.components() {
        if matches!(component, Component::Normal(name) if name == marker) {
            if entry.as_os_str().is_empty() {
                entry.push(".");
            }
            return Some(entry);
        }
        entry.push(component);
    }
    None
}

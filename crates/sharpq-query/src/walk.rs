//! File walker used to discover C# sources under a project root.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking with
//! include/exclude override globs. Build output directories (`bin/`, `obj/`)
//! are skipped by name so generated sources never enter the forest.

use std::path::Path;

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::ForestError;

/// Options controlling which files [`crate::SourceForest::load`] picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Glob whitelisting files (e.g. `"Services/**"`).
    pub include_glob: Option<String>,
    /// Glob blacklisting files or directories (e.g. `"Migrations/"`).
    pub exclude_glob: Option<String>,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// Honour `.gitignore`, `.ignore` and hidden-file rules.
    pub respect_gitignore: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include_glob: None,
            exclude_glob: None,
            skip_dirs: vec!["bin".to_string(), "obj".to_string()],
            respect_gitignore: true,
        }
    }
}

/// Build a file walker over `root` honouring `options`.
///
/// Entries are yielded sorted by file name so forests load deterministically.
///
/// # Errors
/// Returns [`ForestError::InvalidGlob`] if an include or exclude glob does not parse.
pub fn build_walker(root: &Path, options: &LoadOptions) -> Result<ignore::Walk, ForestError> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(options.respect_gitignore);
    builder.require_git(false);
    builder.sort_by_file_name(std::cmp::Ord::cmp);

    if options.include_glob.is_some() || options.exclude_glob.is_some() {
        let mut overrides = OverrideBuilder::new(root);
        if let Some(glob) = &options.include_glob {
            overrides
                .add(glob)
                .map_err(|source| invalid_glob(glob, source))?;
        }
        if let Some(glob) = &options.exclude_glob {
            // Caller passes the raw pattern; negate it to exclude.
            let negated = format!("!{glob}");
            overrides
                .add(&negated)
                .map_err(|source| invalid_glob(glob, source))?;
        }
        let built = overrides
            .build()
            .map_err(|source| invalid_glob("<overrides>", source))?;
        builder.overrides(built);
    }

    let skip_dirs = options.skip_dirs.clone();
    if !skip_dirs.is_empty() {
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && skip_dirs.iter().any(|dir| entry.file_name() == dir.as_str()))
        });
    }

    Ok(builder.build())
}

fn invalid_glob(glob: &str, source: ignore::Error) -> ForestError {
    ForestError::InvalidGlob {
        glob: glob.to_string(),
        source,
    }
}

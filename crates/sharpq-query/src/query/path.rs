//! Host-independent relative paths and path-prefix matching.

use std::path::Path;

/// `path` relative to `entry`, `/`-separated and prefixed with `./`.
///
/// Works on the textual form so a forest loaded on Windows and one built
/// from in-memory sources produce the same strings.
pub(crate) fn relative_file_path(entry: &Path, path: &Path) -> String {
    let entry = to_forward_slashes(&entry.to_string_lossy());
    let full = to_forward_slashes(&path.to_string_lossy());
    let entry = entry.trim_end_matches('/');

    let relative = if entry.is_empty() || entry == "." {
        full.as_str()
    } else {
        full.strip_prefix(entry)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(&full)
    };
    format!("./{}", strip_leading_dots(relative))
}

/// Matches `./`-prefixed file paths against a directory or file prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    prefix: String,
    include_subdirectories: bool,
}

impl PathFilter {
    /// `path` may use either separator and may omit the leading `./`.
    #[must_use]
    pub fn new(path: &str, include_subdirectories: bool) -> Self {
        let normalized = to_forward_slashes(path.trim());
        Self {
            prefix: strip_leading_dots(&normalized).trim_end_matches('/').to_string(),
            include_subdirectories,
        }
    }

    /// Whether `file_path` (as produced by [`crate::SourceFile::file_path`])
    /// lies under the prefix. Matching is by whole path segments, so
    /// `./Social` does not match `./SocialMedia/Feed.cs`.
    #[must_use]
    pub fn matches(&self, file_path: &str) -> bool {
        let normalized = to_forward_slashes(file_path);
        let relative = strip_leading_dots(&normalized);

        let rest = if self.prefix.is_empty() {
            relative
        } else {
            match relative.strip_prefix(self.prefix.as_str()) {
                Some(rest) if rest.is_empty() => return true,
                Some(rest) if rest.starts_with('/') => rest,
                _ => return false,
            }
        };
        self.include_subdirectories || !rest.trim_start_matches('/').contains('/')
    }
}

fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

fn strip_leading_dots(path: &str) -> &str {
    let mut rest = path;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    if rest == "." {
        return "";
    }
    rest.trim_start_matches('/')
}

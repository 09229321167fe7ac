//! Query root and the combinator library.
//!
//! A pipeline starts at [`Query::files`] and chains extension-trait
//! combinators. Every combinator wraps the previous iterator without
//! consuming it, and every stage is `Clone`, so a built pipeline can be
//! cloned and enumerated again. Nothing is cached: each enumeration walks the
//! forest afresh.

mod declarations;
mod files;
mod members;
mod methods;
pub(crate) mod path;
mod types;

use std::path::Path;

pub use declarations::DeclarationQuery;
pub use files::FileQuery;
pub use members::MemberQuery;
pub use methods::MethodQuery;
pub use path::PathFilter;
pub use types::TypeQuery;

use crate::declarations::SourceFile;
use crate::forest::{ForestProvider, ParsedFile};

/// Root handle over a parse forest.
#[derive(Debug, Clone, Copy)]
pub struct Query<'f> {
    files: &'f [ParsedFile],
    entry_path: &'f Path,
}

impl<'f> Query<'f> {
    pub fn new<P: ForestProvider + ?Sized>(provider: &'f P) -> Self {
        Self {
            files: provider.parsed_files(),
            entry_path: provider.entry_path(),
        }
    }

    /// Every file in the forest, in provider order.
    pub fn files(self) -> impl Iterator<Item = SourceFile<'f>> + Clone + use<'f> {
        let entry_path = self.entry_path;
        self.files
            .iter()
            .map(move |parsed| SourceFile::new(parsed, entry_path))
    }

    #[must_use]
    pub const fn entry_path(self) -> &'f Path {
        self.entry_path
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.files.is_empty()
    }
}

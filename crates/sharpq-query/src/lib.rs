//! # sharpq-query
//!
//! Declarative, lazily-evaluated queries over a forest of parsed C# files.
//!
//! A [`SourceForest`] (or any [`ForestProvider`]) owns the parsed files. A
//! [`Query`] borrows it and starts pipelines of read-only declaration views:
//! - [`SourceFile`]: usings, namespaces and the types and enums of one file
//! - [`TypeDecl`]: classes, interfaces, structs and records, with shallow
//!   and deep access to everything nested inside
//! - [`MethodDecl`]: methods, constructors and local functions
//! - [`MemberDecl`]: fields, properties, enums and parameters behind one view
//! - [`AttributeDecl`] / [`ArgumentDecl`]: annotations, matched textually
//!
//! Combinators come from the extension traits in [`prelude`]:
//!
//! ```no_run
//! use sharpq_query::prelude::*;
//! use sharpq_query::{LoadOptions, SourceForest};
//!
//! let forest = SourceForest::load("./MyApp", &LoadOptions::default())?;
//! let getters: Vec<String> = forest
//!     .query()
//!     .files()
//!     .with_path("./Social", true)
//!     .classes(Depth::Shallow)
//!     .with_name(|name| name.ends_with("Client"))
//!     .methods_where(Depth::Shallow, |m| m.is_public())
//!     .filter_map(|m| m.name().ok())
//!     .collect();
//! # Ok::<(), sharpq_query::ForestError>(())
//! ```

pub mod declarations;
pub mod error;
pub mod forest;
pub mod generator;
pub mod parser;
pub mod query;
mod syntax;
pub mod walk;

pub use declarations::{
    Access, ArgumentDecl, AttributeDecl, Depth, EnumValue, MemberDecl, MemberKind, MethodDecl,
    MethodKind, MethodParent, Modifiers, SourceFile, TypeDecl, TypeKind,
};
pub use error::{ForestError, QueryError};
pub use forest::{ForestProvider, ParsedFile, SourceForest, entry_path_from_build_output};
pub use generator::{Generator, run_generator};
pub use query::{PathFilter, Query};
pub use walk::LoadOptions;

/// Capability traits, [`Depth`] and every combinator trait.
pub mod prelude {
    pub use crate::declarations::{Attributed, Depth, Modifiable, Named};
    pub use crate::query::{DeclarationQuery, FileQuery, MemberQuery, MethodQuery, TypeQuery};
}

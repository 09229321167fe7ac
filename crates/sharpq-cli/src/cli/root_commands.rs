use clap::{Args, Subcommand, ValueEnum};
use sharpq_query::{Depth, TypeKind};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List source files relative to the project root.
    Files(FilesArgs),
    /// List classes, interfaces, structs and records.
    Types(TypesArgs),
    /// Print method signatures of matching classes.
    Methods(MethodsArgs),
    /// List enums and their values.
    Enums(EnumsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FilesArgs {
    /// Directory relative to the project root, e.g. `./Social`
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Only files directly inside --path, not in its subdirectories
    #[arg(long)]
    pub direct: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TypeKindArg {
    Class,
    Interface,
    Struct,
    Record,
}

impl From<TypeKindArg> for TypeKind {
    fn from(kind: TypeKindArg) -> Self {
        match kind {
            TypeKindArg::Class => Self::Class,
            TypeKindArg::Interface => Self::Interface,
            TypeKindArg::Struct => Self::Struct,
            TypeKindArg::Record => Self::Record,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct TypesArgs {
    #[arg(long, default_value = ".")]
    pub path: String,

    #[arg(long, value_enum)]
    pub kind: Option<TypeKindArg>,

    /// Include types nested inside other types
    #[arg(long)]
    pub deep: bool,

    #[arg(long)]
    pub name_prefix: Option<String>,

    #[arg(long)]
    pub name_suffix: Option<String>,

    /// Attribute name, matched case-insensitively
    #[arg(long)]
    pub attribute: Option<String>,

    /// Base type or implemented interface
    #[arg(long)]
    pub base: Option<String>,

    #[arg(long)]
    pub public: bool,
}

impl TypesArgs {
    #[must_use]
    pub const fn depth(&self) -> Depth {
        Depth::from_deep(self.deep)
    }
}

#[derive(Clone, Debug, Args)]
pub struct MethodsArgs {
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Only classes whose name ends with this suffix
    #[arg(long)]
    pub class_suffix: Option<String>,

    #[arg(long)]
    pub name_prefix: Option<String>,

    #[arg(long)]
    pub attribute: Option<String>,

    #[arg(long)]
    pub public: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EnumsArgs {
    /// Include enums nested inside types
    #[arg(long)]
    pub deep: bool,
}

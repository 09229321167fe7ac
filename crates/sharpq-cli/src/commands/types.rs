use anyhow::Context;
use serde::Serialize;
use sharpq_query::prelude::*;
use sharpq_query::{
    Access, Generator, Query, QueryError, SourceForest, TypeDecl, TypeKind, run_generator,
};

use crate::cli::RenderOptions;
use crate::cli::root_commands::TypesArgs;
use crate::output::output_rows;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TypeRow {
    pub file: String,
    pub name: String,
    pub kind: TypeKind,
    pub access: Option<Access>,
    pub bases: Vec<String>,
}

impl From<TypeDecl<'_>> for TypeRow {
    fn from(ty: TypeDecl<'_>) -> Self {
        Self {
            file: ty.file().file_path(),
            name: ty.name(),
            kind: ty.kind(),
            access: ty.access(),
            bases: ty.base_types(),
        }
    }
}

pub struct TypesGenerator<'a> {
    args: &'a TypesArgs,
}

impl<'a> TypesGenerator<'a> {
    pub const fn new(args: &'a TypesArgs) -> Self {
        Self { args }
    }
}

impl Generator for TypesGenerator<'_> {
    type Output = Vec<TypeRow>;

    fn execute(&mut self, query: Query<'_>) -> Result<Self::Output, QueryError> {
        let args = self.args;
        let kind = args.kind.map(TypeKind::from);
        let prefix = args.name_prefix.as_deref();
        let suffix = args.name_suffix.as_deref();
        let attribute = args.attribute.as_deref();
        let base = args.base.as_deref();

        let rows = query
            .files()
            .with_path(&args.path, true)
            .types(args.depth())
            .with_name(move |name| {
                prefix.is_none_or(|p| name.starts_with(p))
                    && suffix.is_none_or(|s| name.ends_with(s))
            })
            .filter(move |ty| {
                kind.is_none_or(|k| ty.kind() == k)
                    && attribute.is_none_or(|a| ty.has_attribute(a))
                    && base.is_none_or(|b| ty.has_base_type(b))
                    && (!args.public || ty.is_public())
            })
            .map(TypeRow::from)
            .collect();
        Ok(rows)
    }
}

/// Handle `sharpq types`.
pub fn handle(
    args: &TypesArgs,
    forest: &SourceForest,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    let rows =
        run_generator(&mut TypesGenerator::new(args), forest).context("types query failed")?;
    output_rows(rows, render)
}

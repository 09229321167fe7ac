use anyhow::Context;
use serde::Serialize;
use sharpq_query::prelude::*;
use sharpq_query::{Generator, MethodDecl, Query, QueryError, SourceForest, run_generator};

use crate::cli::RenderOptions;
use crate::cli::root_commands::MethodsArgs;
use crate::output::output_rows;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MethodRow {
    pub file: String,
    pub class: String,
    pub name: String,
    /// `modifiers Name(Type name, ...)`
    pub line: String,
}

impl MethodRow {
    fn from_method(method: &MethodDecl<'_>) -> Result<Self, QueryError> {
        Ok(Self {
            file: method.file().file_path(),
            class: method
                .enclosing_type()
                .map(|ty| ty.name())
                .unwrap_or_default(),
            name: method.name()?,
            line: signature_line(method)?,
        })
    }
}

/// One-line rendering of a method: modifiers, name and typed parameters.
/// Return types and bodies are left out.
pub fn signature_line(method: &MethodDecl<'_>) -> Result<String, QueryError> {
    let parameters = method
        .parameters()
        .map(|parameter| Ok(format!("{} {}", parameter.type_name()?, parameter.name())))
        .collect::<Result<Vec<_>, QueryError>>()?;

    let modifiers = method.modifiers().words().join(" ");
    let call = format!("{}({})", method.name()?, parameters.join(", "));
    if modifiers.is_empty() {
        Ok(call)
    } else {
        Ok(format!("{modifiers} {call}"))
    }
}

pub struct MethodsGenerator<'a> {
    args: &'a MethodsArgs,
}

impl<'a> MethodsGenerator<'a> {
    pub const fn new(args: &'a MethodsArgs) -> Self {
        Self { args }
    }
}

impl Generator for MethodsGenerator<'_> {
    type Output = Vec<MethodRow>;

    fn execute(&mut self, query: Query<'_>) -> Result<Self::Output, QueryError> {
        let args = self.args;
        let class_suffix = args.class_suffix.as_deref();
        let name_prefix = args.name_prefix.as_deref();
        let attribute = args.attribute.as_deref();

        query
            .files()
            .with_path(&args.path, true)
            .classes(Depth::Shallow)
            .with_name(move |name| class_suffix.is_none_or(|s| name.ends_with(s)))
            .methods(Depth::Shallow)
            .with_name(move |name| name_prefix.is_none_or(|p| name.starts_with(p)))
            .filter(move |method| {
                attribute.is_none_or(|a| method.has_attribute(a))
                    && (!args.public || method.is_public())
            })
            .map(|method| MethodRow::from_method(&method))
            .collect()
    }
}

/// Handle `sharpq methods`.
pub fn handle(
    args: &MethodsArgs,
    forest: &SourceForest,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    let rows =
        run_generator(&mut MethodsGenerator::new(args), forest).context("methods query failed")?;
    output_rows(rows, render)
}

use anyhow::Context;
use serde::Serialize;
use sharpq_query::prelude::*;
use sharpq_query::{EnumValue, Generator, Query, QueryError, SourceForest, run_generator};

use crate::cli::RenderOptions;
use crate::cli::root_commands::EnumsArgs;
use crate::output::output_rows;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EnumRow {
    pub file: String,
    pub name: String,
    /// Enclosing type for nested enums.
    pub parent: Option<String>,
    pub values: Vec<EnumValue>,
}

pub struct EnumsGenerator {
    depth: Depth,
}

impl EnumsGenerator {
    pub const fn new(args: &EnumsArgs) -> Self {
        Self {
            depth: Depth::from_deep(args.deep),
        }
    }
}

impl Generator for EnumsGenerator {
    type Output = Vec<EnumRow>;

    fn execute(&mut self, query: Query<'_>) -> Result<Self::Output, QueryError> {
        Ok(query
            .files()
            .enums(self.depth)
            .map(|member| EnumRow {
                file: member.file().file_path(),
                name: member.name(),
                parent: member.enclosing_type().map(|ty| ty.name()),
                values: member.values(),
            })
            .collect())
    }
}

/// Handle `sharpq enums`.
pub fn handle(
    args: &EnumsArgs,
    forest: &SourceForest,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    let rows =
        run_generator(&mut EnumsGenerator::new(args), forest).context("enums query failed")?;
    output_rows(rows, render)
}

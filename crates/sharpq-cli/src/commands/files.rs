use anyhow::Context;
use serde::Serialize;
use sharpq_query::prelude::*;
use sharpq_query::{Generator, Query, QueryError, SourceForest, run_generator};

use crate::cli::RenderOptions;
use crate::cli::root_commands::FilesArgs;
use crate::output::output_rows;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileRow {
    pub path: String,
    pub namespaces: Vec<String>,
    /// Types at any nesting depth.
    pub types: usize,
}

pub struct FilesGenerator<'a> {
    args: &'a FilesArgs,
}

impl<'a> FilesGenerator<'a> {
    pub const fn new(args: &'a FilesArgs) -> Self {
        Self { args }
    }
}

impl Generator for FilesGenerator<'_> {
    type Output = Vec<FileRow>;

    fn execute(&mut self, query: Query<'_>) -> Result<Self::Output, QueryError> {
        Ok(query
            .files()
            .with_path(&self.args.path, !self.args.direct)
            .map(|file| FileRow {
                path: file.file_path(),
                namespaces: file.namespaces().collect(),
                types: file.types(Depth::Deep).count(),
            })
            .collect())
    }
}

/// Handle `sharpq files`.
pub fn handle(
    args: &FilesArgs,
    forest: &SourceForest,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    let rows =
        run_generator(&mut FilesGenerator::new(args), forest).context("files query failed")?;
    output_rows(rows, render)
}

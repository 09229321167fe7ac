use sharpq_query::SourceForest;

use crate::cli::{Commands, RenderOptions};

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    forest: &SourceForest,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    match command {
        Commands::Files(args) => super::files::handle(args, forest, render),
        Commands::Types(args) => super::types::handle(args, forest, render),
        Commands::Methods(args) => super::methods::handle(args, forest, render),
        Commands::Enums(args) => super::enums::handle(args, forest, render),
    }
}

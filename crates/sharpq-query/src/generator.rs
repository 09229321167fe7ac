//! Host-facing generator protocol.
//!
//! A host builds a [`ForestProvider`], hands it to [`run_generator`], and gets
//! back whatever the generator produced. Emitting that output is the host's
//! business.

use crate::error::QueryError;
use crate::forest::ForestProvider;
use crate::query::Query;

pub trait Generator {
    type Output;

    /// Called once before [`execute`](Self::execute).
    fn initialize(&mut self) {}

    /// # Errors
    /// Propagates any [`QueryError`] raised while enumerating the pipeline.
    fn execute(&mut self, query: Query<'_>) -> Result<Self::Output, QueryError>;
}

/// Run `generator` against `provider`: `initialize`, then `execute`.
///
/// # Errors
/// Returns whatever error `execute` reports.
pub fn run_generator<G, P>(generator: &mut G, provider: &P) -> Result<G::Output, QueryError>
where
    G: Generator + ?Sized,
    P: ForestProvider + ?Sized,
{
    let query = Query::new(provider);
    tracing::debug!(
        files = query.len(),
        entry = %query.entry_path().display(),
        "running generator"
    );
    generator.initialize();
    let output = generator.execute(query);
    if let Err(error) = &output {
        tracing::debug!(%error, "generator failed");
    }
    output
}

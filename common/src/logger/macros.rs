use tracing::{Level, Span};

use super::RunId;

/// Root span for one end-to-end statistics run.
pub fn run_span(run_id: &RunId) -> Span {
    tracing::span!(Level::INFO, "statistics_run", run_id = %run_id)
}

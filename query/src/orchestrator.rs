//! The orchestration chain: login → dependent order aggregation → report.
//!
//! `run_statistics` wires one run end to end:
//!   1. `AuthFlow::log_in` resolves the credentials to a canonical username.
//!   2. Only once that value exists is `StatisticsFlow::process_orders_of`
//!      constructed and submitted (dependent chaining, never speculative).
//!   3. A terminal continuation reports the result or the failure exactly
//!      once, then completes the returned run promise so callers can
//!      sequence shutdown on actual completion instead of wall-clock delays.
//!
//! Runs are independent: they share only the pool and the store, so a
//! failed run never corrupts or blocks the next one.

use std::sync::Arc;

use common::logger::{run_span, RunId};
use exec::promise::Promise;
use store::backend::ShopStore;

use crate::auth::AuthFlow;
use crate::dao::DataAccess;
use crate::error::QueryError;
use crate::report::Reporter;
use crate::stats::StatisticsFlow;
use crate::types::Credentials;

pub struct Orchestrator<S, R> {
    auth: AuthFlow<S>,
    statistics: StatisticsFlow<S>,
    reporter: Arc<R>,
}

impl<S, R> Orchestrator<S, R>
where
    S: ShopStore + 'static,
    R: Reporter + 'static,
{
    pub fn new(dao: DataAccess<S>, reporter: Arc<R>) -> Self {
        Self {
            auth: AuthFlow::new(dao.clone()),
            statistics: StatisticsFlow::new(dao),
            reporter,
        }
    }

    /// Run one statistics orchestration for `credentials`.
    ///
    /// The returned promise completes once the terminal handler has run,
    /// regardless of whether the run succeeded or failed.
    pub fn run_statistics(&self, credentials: Credentials) -> Promise<(), QueryError> {
        let run_id = RunId::new();
        let span = run_span(&run_id);
        let _enter = span.enter();
        tracing::info!(user = %credentials.username, "starting statistics run");

        let done: Promise<(), QueryError> = Promise::new();
        let finished = done.clone();
        let statistics = self.statistics.clone();
        let reporter = Arc::clone(&self.reporter);

        self.auth
            .log_in(&credentials)
            .and_then(move |username| statistics.process_orders_of(&username))
            .on_complete(move |outcome| {
                match &outcome {
                    Ok(result) => {
                        tracing::info!(run_id = %run_id, user = %result.username, "run completed");
                        reporter.report_success(result);
                    }
                    Err(error) => {
                        tracing::warn!(run_id = %run_id, error = %error, "run failed");
                        reporter.report_failure(&error.to_string());
                    }
                }
                finished.complete(());
            });

        done
    }
}

//! Reporting collaborators for the terminal handler.

use crate::types::OrderStatistics;

/// Receives exactly one call per orchestration run: a result or a failure.
pub trait Reporter: Send + Sync {
    fn report_success(&self, statistics: &OrderStatistics);
    fn report_failure(&self, description: &str);
}

/// Console reporter used by the demo driver.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_success(&self, statistics: &OrderStatistics) {
        println!(
            "eCommerce statistics of user \"{}\": {} orders, total amount {}, average amount {}",
            statistics.username,
            statistics.order_count,
            statistics.total_amount,
            statistics.average_amount,
        );
    }

    fn report_failure(&self, description: &str) {
        eprintln!("{description}");
    }
}

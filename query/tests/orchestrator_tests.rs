use std::sync::{Arc, Mutex};

use exec::pool::ExecutionContext;
use query::dao::DataAccess;
use query::orchestrator::Orchestrator;
use query::report::Reporter;
use query::types::{Credentials, OrderStatistics};

use mock_store::RecordingStore;

/// Captures every terminal-handler invocation for later assertions.
#[derive(Default)]
struct RecordingReporter {
    successes: Mutex<Vec<OrderStatistics>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn successes(&self) -> Vec<OrderStatistics> {
        self.successes.lock().unwrap().clone()
    }

    fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }

    fn invocations(&self) -> usize {
        self.successes().len() + self.failures().len()
    }
}

impl Reporter for RecordingReporter {
    fn report_success(&self, statistics: &OrderStatistics) {
        self.successes.lock().unwrap().push(statistics.clone());
    }

    fn report_failure(&self, description: &str) {
        self.failures.lock().unwrap().push(description.to_owned());
    }
}

struct Harness {
    orchestrator: Orchestrator<RecordingStore, RecordingReporter>,
    reporter: Arc<RecordingReporter>,
    store: Arc<RecordingStore>,
    exec: Arc<ExecutionContext>,
}

fn harness(store: RecordingStore) -> Harness {
    let store = Arc::new(store);
    let exec = Arc::new(ExecutionContext::new(2));
    let reporter = Arc::new(RecordingReporter::default());
    let dao = DataAccess::new(Arc::clone(&store), Arc::clone(&exec));
    Harness {
        orchestrator: Orchestrator::new(dao, Arc::clone(&reporter)),
        reporter,
        store,
        exec,
    }
}

#[tokio::test]
async fn valid_credentials_report_the_aggregated_statistics() {
    let h = harness(RecordingStore::with_demo_users());

    h.orchestrator
        .run_statistics(Credentials::new("lisa", "password"))
        .await
        .unwrap();

    assert_eq!(
        h.reporter.successes(),
        vec![OrderStatistics {
            username: "lisa".into(),
            order_count: 2,
            total_amount: 40,
            average_amount: 20.0,
        }]
    );
    assert!(h.reporter.failures().is_empty());
    h.exec.shutdown().await;
}

#[tokio::test]
async fn bad_password_reports_failure_and_never_scans_orders() {
    let h = harness(RecordingStore::with_demo_users());

    h.orchestrator
        .run_statistics(Credentials::new("lisa", "bad_password"))
        .await
        .unwrap();

    assert_eq!(h.reporter.invocations(), 1);
    assert!(h.reporter.failures()[0].contains("wrong password"));
    assert!(
        !h.store
            .calls()
            .iter()
            .any(|c| c.starts_with("find_orders_by_username")),
        "orders lookup must not run when login fails"
    );
    h.exec.shutdown().await;
}

#[tokio::test]
async fn miscased_username_reports_user_not_found() {
    let h = harness(RecordingStore::with_demo_users());

    h.orchestrator
        .run_statistics(Credentials::new("LISA", "password"))
        .await
        .unwrap();

    assert_eq!(h.reporter.successes(), vec![]);
    assert_eq!(h.reporter.failures(), vec!["user \"LISA\" not found".to_owned()]);
    h.exec.shutdown().await;
}

#[tokio::test]
async fn store_outage_reaches_the_terminal_handler_once() {
    let h = harness(RecordingStore {
        fail_order_scans: true,
        ..RecordingStore::with_demo_users()
    });

    h.orchestrator
        .run_statistics(Credentials::new("lisa", "password"))
        .await
        .unwrap();

    assert_eq!(h.reporter.invocations(), 1);
    assert!(h.reporter.successes().is_empty());
    h.exec.shutdown().await;
}

#[tokio::test]
async fn empty_order_history_reports_zero_statistics() {
    let h = harness(RecordingStore::with_demo_users());

    h.orchestrator
        .run_statistics(Credentials::new("tom", "secret"))
        .await
        .unwrap();

    assert_eq!(
        h.reporter.successes(),
        vec![OrderStatistics {
            username: "tom".into(),
            order_count: 0,
            total_amount: 0,
            average_amount: 0.0,
        }]
    );
    h.exec.shutdown().await;
}

#[tokio::test]
async fn concurrent_runs_complete_independently() {
    let h = harness(RecordingStore::with_demo_users());

    let lisa = h
        .orchestrator
        .run_statistics(Credentials::new("lisa", "password"));
    let tom = h
        .orchestrator
        .run_statistics(Credentials::new("tom", "secret"));

    let (lisa_done, tom_done) = tokio::join!(lisa, tom);
    lisa_done.unwrap();
    tom_done.unwrap();

    let mut successes = h.reporter.successes();
    successes.sort_by(|a, b| a.username.cmp(&b.username));
    assert_eq!(
        successes,
        vec![
            OrderStatistics {
                username: "lisa".into(),
                order_count: 2,
                total_amount: 40,
                average_amount: 20.0,
            },
            OrderStatistics {
                username: "tom".into(),
                order_count: 0,
                total_amount: 0,
                average_amount: 0.0,
            },
        ]
    );
    assert!(h.reporter.failures().is_empty());
    h.exec.shutdown().await;
}

#[tokio::test]
async fn failed_run_does_not_block_the_next_one() {
    let h = harness(RecordingStore::with_demo_users());

    h.orchestrator
        .run_statistics(Credentials::new("lisa", "bad_password"))
        .await
        .unwrap();
    h.orchestrator
        .run_statistics(Credentials::new("lisa", "password"))
        .await
        .unwrap();

    assert_eq!(h.reporter.failures().len(), 1);
    assert_eq!(h.reporter.successes().len(), 1);
    h.exec.shutdown().await;
}

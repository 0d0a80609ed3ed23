use std::sync::Arc;

use exec::pool::ExecutionContext;
use query::auth::AuthFlow;
use query::dao::DataAccess;
use query::error::{AuthError, QueryError};
use query::types::Credentials;

use mock_store::RecordingStore;

fn auth_flow(store: RecordingStore) -> (AuthFlow<RecordingStore>, Arc<ExecutionContext>) {
    let exec = Arc::new(ExecutionContext::new(2));
    let dao = DataAccess::new(Arc::new(store), Arc::clone(&exec));
    (AuthFlow::new(dao), exec)
}

#[tokio::test]
async fn correct_credentials_resolve_to_canonical_name() {
    let (auth, exec) = auth_flow(RecordingStore::with_demo_users());

    let name = auth
        .log_in(&Credentials::new("lisa", "password"))
        .await
        .unwrap();

    assert_eq!(name, "lisa");
    exec.shutdown().await;
}

#[tokio::test]
async fn wrong_password_fails_with_bad_password() {
    let (auth, exec) = auth_flow(RecordingStore::with_demo_users());

    let err = auth
        .log_in(&Credentials::new("lisa", "bad_password"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Auth(AuthError::BadPassword(ref name)) if name == "lisa"
    ));
    exec.shutdown().await;
}

#[tokio::test]
async fn unknown_user_fails_with_user_not_found() {
    let (auth, exec) = auth_flow(RecordingStore::with_demo_users());

    let err = auth
        .log_in(&Credentials::new("nobody", "password"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Auth(AuthError::UserNotFound(ref name)) if name == "nobody"
    ));
    exec.shutdown().await;
}

#[tokio::test]
async fn miscased_username_is_not_found() {
    // Lookup is a case-sensitive exact match; "LISA" is a different key.
    let (auth, exec) = auth_flow(RecordingStore::with_demo_users());

    let err = auth
        .log_in(&Credentials::new("LISA", "password"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Auth(AuthError::UserNotFound(ref name)) if name == "LISA"
    ));
    exec.shutdown().await;
}

#[tokio::test]
async fn store_failure_propagates_unmasked() {
    let store = RecordingStore {
        fail_user_lookups: true,
        ..RecordingStore::with_demo_users()
    };
    let (auth, exec) = auth_flow(store);

    let err = auth
        .log_in(&Credentials::new("lisa", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Store(_)));
    exec.shutdown().await;
}

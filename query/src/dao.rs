//! Asynchronous data access over the worker pool.
//!
//! Each call submits one store lookup to the shared [`ExecutionContext`] and
//! returns the promise of its outcome immediately; the caller never blocks
//! on submission. Store failures settle the promise as
//! [`QueryError::Store`](crate::error::QueryError).

use std::sync::Arc;

use exec::pool::ExecutionContext;
use exec::promise::Promise;
use store::backend::ShopStore;
use store::model::{Order, User};

use crate::error::QueryError;

pub struct DataAccess<S> {
    store: Arc<S>,
    exec: Arc<ExecutionContext>,
}

impl<S> Clone for DataAccess<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            exec: Arc::clone(&self.exec),
        }
    }
}

impl<S: ShopStore + 'static> DataAccess<S> {
    pub fn new(store: Arc<S>, exec: Arc<ExecutionContext>) -> Self {
        Self { store, exec }
    }

    /// Point lookup of a user by name, run on the pool.
    pub fn find_user_by_name(&self, name: &str) -> Promise<Option<User>, QueryError> {
        let store = Arc::clone(&self.store);
        let name = name.to_owned();

        self.exec.submit(async move {
            tracing::debug!(user = %name, "user lookup");
            Ok(store.find_user_by_name(&name).await?)
        })
    }

    /// Filtered scan of a user's orders, run on the pool.
    pub fn find_orders_by_username(&self, username: &str) -> Promise<Vec<Order>, QueryError> {
        let store = Arc::clone(&self.store);
        let username = username.to_owned();

        self.exec.submit(async move {
            tracing::debug!(user = %username, "orders scan");
            Ok(store.find_orders_by_username(&username).await?)
        })
    }
}

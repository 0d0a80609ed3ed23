pub mod sqlite_store;

use crate::error::StoreError;
use crate::model::{Order, User};

/// The document store the pipeline reads from: a point lookup over the
/// users keyspace and a filtered scan over the orders keyspace.
#[async_trait::async_trait]
pub trait ShopStore: Send + Sync {
    /// Point lookup by primary key. Case-sensitive exact match; a mis-cased
    /// name is simply not found.
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError>;

    /// All orders whose `username` field matches, in a stable order.
    async fn find_orders_by_username(&self, username: &str) -> Result<Vec<Order>, StoreError>;
}

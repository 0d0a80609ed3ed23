use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned order identity.
pub type OrderId = Uuid;

/// A user record. Identity key is `name`, case-sensitive as stored.
/// Constructed only from a store row; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

/// One order placed by a user. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the store; seed files may omit it.
    #[serde(default = "OrderId::new_v4")]
    pub id: OrderId,
    pub username: String,
    pub amount: i64,
}

/// Caller-supplied login data. Never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Summary statistics for one user's order history, computed once per run.
///
/// `average_amount` is 0.0 when `order_count` is 0 (see [`crate::aggregate::average`]).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatistics {
    pub username: String,
    pub order_count: u32,
    pub total_amount: i64,
    pub average_amount: f64,
}

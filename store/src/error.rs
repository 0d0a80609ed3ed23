use thiserror::Error;

/// Failures at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying lookup failed (I/O, connectivity). Never retried here;
    /// callers surface it to the terminal handler.
    #[error("store access failed: {0}")]
    Access(#[from] sqlx::Error),

    /// A stored row violated the record schema.
    #[error("malformed {entity} record \"{key}\": {reason}")]
    Malformed {
        entity: &'static str,
        key: String,
        reason: String,
    },
}

use thiserror::Error;

use exec::error::ExecError;
use store::error::StoreError;

/// Authentication outcomes that are not a successful login.
///
/// These are ordinary values flowing through the chain, not panics or
/// bail-outs; the terminal handler renders them as one descriptive line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No user record for the supplied name. Lookup is case-sensitive, so a
    /// mis-cased name lands here as well.
    #[error("user \"{0}\" not found")]
    UserNotFound(String),

    /// The user exists but the supplied password does not match.
    #[error("wrong password for user \"{0}\"")]
    BadPassword(String),
}

/// Every failure a statistics run can surface, tagged with its origin.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}

//! Login step: user lookup composed with the credential check.

use exec::promise::Promise;
use store::backend::ShopStore;

use crate::dao::DataAccess;
use crate::error::{AuthError, QueryError};
use crate::types::Credentials;

pub struct AuthFlow<S> {
    dao: DataAccess<S>,
}

impl<S> Clone for AuthFlow<S> {
    fn clone(&self) -> Self {
        Self {
            dao: self.dao.clone(),
        }
    }
}

impl<S: ShopStore + 'static> AuthFlow<S> {
    pub fn new(dao: DataAccess<S>) -> Self {
        Self { dao }
    }

    /// Resolve credentials to the canonical store-cased username.
    ///
    /// Exactly one outcome: the canonical name on success, otherwise
    /// [`AuthError::UserNotFound`] (no record, including mis-cased names),
    /// [`AuthError::BadPassword`], or the propagated store failure.
    pub fn log_in(&self, credentials: &Credentials) -> Promise<String, QueryError> {
        let supplied = credentials.clone();

        self.dao
            .find_user_by_name(&credentials.username)
            .try_map(move |found| match found {
                None => Err(AuthError::UserNotFound(supplied.username).into()),
                Some(user) if user.password != supplied.password => {
                    Err(AuthError::BadPassword(user.name).into())
                }
                Some(user) => Ok(user.name),
            })
    }
}

use std::fmt;

use uuid::Uuid;

/// Correlation id that follows one orchestration run through the logs.
#[derive(Clone, Debug)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

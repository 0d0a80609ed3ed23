use thiserror::Error;

/// Errors produced by the execution context itself (as opposed to the task
/// it runs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("worker pool is shut down")]
    PoolClosed,
}

pub mod aggregate;
pub mod auth;
pub mod dao;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod stats;
pub mod types;

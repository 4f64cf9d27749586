//! userdata-report — Reqres user data report generator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetch;
pub mod generate;
pub mod mock;
pub mod models;
pub mod output;
pub mod report;

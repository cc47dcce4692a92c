//! Clipshelf Application Orchestration Layer
//!
//! This crate contains the stateful history services, the use cases and
//! the application context that wires them to the `cs-core` ports.

pub mod app_paths;
pub mod context;
pub mod models;
pub mod services;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use app_paths::AppPaths;
pub use context::{AppContext, AppDeps, AppSettings, UseCases};

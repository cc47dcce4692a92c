//! # cs-infra
//!
//! Infrastructure adapters for Clipshelf: durable storage behind
//! `StringListStorePort`.

pub mod storage;

pub use storage::{FileStringListStore, InMemoryStringListStore};

//! Local storage module for persisting the board between sessions
//!
//! This module provides a small key-value store on SQLite, accessed through
//! SeaORM. It holds the structured item backup and the last simulated cloud
//! snapshot.

pub mod db;

pub use db::LocalStorage;

//! Lostfound - a terminal board for campus lost and found reports
//!
//! This library keeps a shared list of lost and found item reports in step
//! with a cloud copy, falls back to a local backup or demo data when the
//! cloud is out of reach, and presents the board in an interactive UI built
//! with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`item`] - Item records, report input and validation
//! * [`codec`] - JSON text encoding of item lists
//! * [`backend`] - Cloud, local backup and demo data sources
//! * [`storage`] - Local SQLite key-value store
//! * [`sync`] - Refresh and save orchestration over the backends
//! * [`query`] - Type filter and free-text search
//! * [`ui`] - Terminal user interface components
//! * [`config`] - Application configuration management

/// Storage backends: cloud, local backup and demo data
pub mod backend;

/// Text encoding and decoding of item lists
pub mod codec;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Lost and found item model
pub mod item;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Filtering and searching of items
pub mod query;

/// Repository layer for database operations
pub mod repositories;

/// Local key-value storage
pub mod storage;

/// Loading and saving the board through the backends
pub mod sync;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::kv_entry;
pub use item::{FilterType, Item, ItemType, NewItem};

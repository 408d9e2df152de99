//! Database module for SQLite operations.
//!
//! This module provides:
//! - Storage-handle acquisition and SQLite pragma configuration
//! - The static data model and its DDL rendering
//! - Repository layer for database operations

pub mod connect;
pub mod repo;
pub mod schema;

pub use connect::connect;
pub use repo::Repository;

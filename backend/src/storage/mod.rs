//! # Storage Module
//!
//! SQLite persistence for alumni records. Every operation opens its own
//! connection through [`DbConnection`] and closes it when done.

pub mod alumni_repository;
pub mod connection;

pub use alumni_repository::AlumniRepository;
pub use connection::DbConnection;

//! # IO Module
//!
//! Interfaces that expose the domain to the outside world. Currently only the
//! REST API.

pub mod rest;

pub use rest::*;

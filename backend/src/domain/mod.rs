//! # Domain Module
//!
//! Business rules for alumni records: request validation, record creation and
//! listing, and spreadsheet export. Storage details stay in `storage`; HTTP
//! concerns stay in `io`.

pub mod alumni_service;
pub mod export_service;
pub mod models;

pub use alumni_service::AlumniService;
pub use export_service::{AlumniExport, ExportService};

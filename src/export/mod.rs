//! Export functionality for analysis results

pub mod policy;

pub use policy::{export_csv, export_json};

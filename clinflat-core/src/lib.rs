//! # Core data model for clinflat
//!
//! This crate holds the in-memory representation of one ClinVar variation release as it is
//! decoded from the upstream XML: release metadata plus an ordered sequence of
//! [`models::VariationArchive`] records. Every attribute and child element is optional or
//! repeated, so absence is represented as `None` or an empty `Vec` and never as an error.
//!
//! It also carries the constants shared by the extraction and io crates and the
//! [`errors::ClinflatError`] type used across the workspace.
pub mod consts;
pub mod errors;
pub mod models;

pub use consts::*;
pub use errors::*;
pub use models::*;

//! # Flattening of ClinVar variation archives
//!
//! Projects the deeply nested, sparsely populated [`clinflat_core::VariationArchive`] tree onto a
//! fixed-shape [`FlatVariant`] record. Ambiguous fields (several genes, several cross-references,
//! several trait names) are settled by explicit tie-break rules in [`resolvers`], and absent data
//! resolves to `None` or an empty list, which serializes as `"notProvided"` or `[]`.
//!
//! ```rust,ignore
//! use clinflat_extract::{ExtractOptions, extract_release};
//!
//! let extracted = extract_release(&release, &ExtractOptions::default())?;
//! assert_eq!(extracted.variants.len(), release.archives.len());
//! ```
pub mod models;
pub mod options;
pub mod release;
pub mod resolvers;
pub mod variant;

// Re-exports
pub use models::*;
pub use options::*;
pub use release::*;
pub use variant::*;

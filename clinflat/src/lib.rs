//! # clinflat
//!
//! Flatten a ClinVar variation release into one fixed-shape record per variation archive.
//!
//! The library is split by concern and each part sits behind a feature:
//! - `core`: the decoded release tree and the shared error type
//! - `extract`: output records and the flattening itself
//! - `io`: reading releases (plain or gzipped) and writing JSON
//!
//! ```no_run
//! use std::path::Path;
//!
//! use clinflat::extract::{ExtractOptions, extract_release};
//! use clinflat::io::{JsonSink, read_release_from};
//!
//! let release = read_release_from(Some(Path::new("ClinVarVariationRelease.xml.gz")))?;
//! let extracted = extract_release(&release, &ExtractOptions::default())?;
//! JsonSink::file("variants.json").write(&extracted.variants)?;
//! # Ok::<(), clinflat::core::ClinflatError>(())
//! ```
#[cfg(feature = "core")]
#[doc(inline)]
pub use clinflat_core as core;

#[cfg(feature = "extract")]
#[doc(inline)]
pub use clinflat_extract as extract;

#[cfg(feature = "io")]
#[doc(inline)]
pub use clinflat_io as io;

//! # Input/Output utilities for ClinVar releases.
//!
//! Reading: a release is read from a file or from standard input, gzip compressed or not, and
//! decoded into a [`clinflat_core::ClinVarRelease`]. The release header alone can be streamed
//! with [`read_release_header`] without decoding any archive.
//!
//! Writing: [`JsonSink`] serializes a value completely before touching its destination, so a
//! serialization failure never leaves a partial output file behind.
//!
pub mod consts;
pub mod header;
pub mod reader;
pub mod writer;

// re-expose core functions
pub use consts::*;
pub use header::*;
pub use reader::*;
pub use writer::*;

pub mod archive;
pub mod interpretation;
pub mod release;

// Re-exports
pub use archive::*;
pub use interpretation::*;
pub use release::*;

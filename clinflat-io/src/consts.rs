pub const RELEASE_ROOT_ELEMENT: &str = "ClinVarVariationRelease";
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
pub const GZIP_EXTENSION: &str = "gz";
pub const READ_BUFFER_CAPACITY: usize = 256 * 1024;

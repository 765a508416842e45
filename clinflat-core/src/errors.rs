use thiserror::Error;

/// Fatal errors. Anything that is merely missing from a release is not an error and is
/// resolved to a default during extraction instead.
#[derive(Error, Debug)]
pub enum ClinflatError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not decode ClinVar release XML: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("Could not read XML event stream: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Could not serialize flattened variants: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not build worker pool: {0}")]
    ThreadPool(String),

    #[error("No ClinVarVariationRelease root element found in input")]
    MissingReleaseHeader,
}

pub type Result<T> = std::result::Result<T, ClinflatError>;

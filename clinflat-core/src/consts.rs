/// Placeholder written to the output for every field whose source data is absent.
pub const NOT_PROVIDED: &str = "notProvided";

// cross-reference database tags
pub const DB_DBSNP: &str = "dbSNP";
pub const DB_OMIM: &str = "OMIM";
pub const DB_MEDGEN: &str = "MedGen";
pub const DB_ORPHANET: &str = "Orphanet";

// OMIM cross-reference types on traits
pub const XREF_TYPE_PHENOTYPIC_SERIES: &str = "Phenotypic series";
pub const XREF_TYPE_MIM: &str = "MIM";

/// Qualifier marking the canonical name among a trait's candidate names.
pub const PREFERRED_NAME_TYPE: &str = "Preferred";

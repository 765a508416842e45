use serde::{Serialize, Serializer};

use clinflat_core::NOT_PROVIDED;

/// Writes `None` as the `"notProvided"` sentinel so output stays wire compatible with
/// earlier flattened releases.
fn or_not_provided<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_PROVIDED))
}

/// Metadata of the release a set of variants was flattened from, copied verbatim from the
/// release root element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseInfo {
    #[serde(rename = "W3SchemaInfo", serialize_with = "or_not_provided")]
    pub schema_namespace: Option<String>,

    #[serde(rename = "ClinVarSchemaVersion", serialize_with = "or_not_provided")]
    pub schema_version: Option<String>,

    #[serde(rename = "ClinVarReleaseDate", serialize_with = "or_not_provided")]
    pub release_date: Option<String>,
}

/// Position of a variant relative to its first associated gene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationType {
    WithinGene,
    OutsideGene,
    #[default]
    NotProvided,
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LocationType::WithinGene => "withinGene",
            LocationType::OutsideGene => "outsideGene",
            LocationType::NotProvided => NOT_PROVIDED,
        };
        write!(f, "{}", label)
    }
}

/// One flattened variant. Owns all of its sub-collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatVariant {
    #[serde(rename = "Accession", serialize_with = "or_not_provided")]
    pub accession: Option<String>,

    #[serde(rename = "Version", serialize_with = "or_not_provided")]
    pub version: Option<String>,

    #[serde(rename = "Type", serialize_with = "or_not_provided")]
    pub variation_type: Option<String>,

    #[serde(rename = "VariationID", serialize_with = "or_not_provided")]
    pub variation_id: Option<String>,

    #[serde(rename = "VariationName", serialize_with = "or_not_provided")]
    pub variation_name: Option<String>,

    #[serde(rename = "GeneAffected", serialize_with = "or_not_provided")]
    pub gene_symbol: Option<String>,

    #[serde(rename = "GeneEntrezID", serialize_with = "or_not_provided")]
    pub gene_entrez_id: Option<String>,

    #[serde(rename = "GeneOmimID", serialize_with = "or_not_provided")]
    pub gene_omim_id: Option<String>,

    /// Canonical SPDI of the allele.
    #[serde(rename = "NcbiRefSeq", serialize_with = "or_not_provided")]
    pub ncbi_ref_seq: Option<String>,

    #[serde(rename = "LocationType")]
    pub location_type: LocationType,

    #[serde(rename = "DbSNPID", serialize_with = "or_not_provided")]
    pub dbsnp_id: Option<String>,

    #[serde(rename = "GenomeVersion", serialize_with = "or_not_provided")]
    pub genome_version: Option<String>,

    /// Cytogenetic band.
    #[serde(rename = "ChromLocation", serialize_with = "or_not_provided")]
    pub chrom_location: Option<String>,

    #[serde(rename = "ChromStart", serialize_with = "or_not_provided")]
    pub chrom_start: Option<String>,

    #[serde(rename = "ChromStop", serialize_with = "or_not_provided")]
    pub chrom_stop: Option<String>,

    #[serde(rename = "Length", serialize_with = "or_not_provided")]
    pub length: Option<String>,

    #[serde(rename = "OmimID", serialize_with = "or_not_provided")]
    pub omim_id: Option<String>,

    #[serde(rename = "ReviewStatus", serialize_with = "or_not_provided")]
    pub review_status: Option<String>,

    #[serde(rename = "HGVData")]
    pub consequences: Vec<Consequence>,

    #[serde(rename = "RCVData")]
    pub rcvs: Vec<RcvSummary>,

    #[serde(rename = "ClinicalInterpretations")]
    pub clinical_interpretations: ClinicalInterpretations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consequence {
    #[serde(rename = "Consequence")]
    pub consequence: String,
}

impl Consequence {
    pub fn new(consequence: impl Into<String>) -> Self {
        Consequence {
            consequence: consequence.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RcvSummary {
    #[serde(rename = "AccessionID", serialize_with = "or_not_provided")]
    pub accession: Option<String>,

    #[serde(rename = "Version", serialize_with = "or_not_provided")]
    pub version: Option<String>,

    #[serde(rename = "Interpretation", serialize_with = "or_not_provided")]
    pub interpretation: Option<String>,

    #[serde(rename = "Condition", serialize_with = "or_not_provided")]
    pub condition: Option<String>,

    #[serde(rename = "SubmissionCount", serialize_with = "or_not_provided")]
    pub submission_count: Option<String>,

    #[serde(rename = "ReviewStatus", serialize_with = "or_not_provided")]
    pub review_status: Option<String>,

    #[serde(rename = "MedGenID", serialize_with = "or_not_provided")]
    pub medgen_id: Option<String>,

    #[serde(rename = "TraitSetID", serialize_with = "or_not_provided")]
    pub trait_set_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClinicalInterpretations {
    #[serde(rename = "Citations")]
    pub citations: Vec<CitationRef>,

    #[serde(rename = "Trait")]
    pub traits: Vec<TraitRecord>,
}

/// A `(source database, identifier)` pair. Duplicates are kept, position is provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CitationRef {
    #[serde(rename = "CitationSource", serialize_with = "or_not_provided")]
    pub source: Option<String>,

    #[serde(rename = "CitationID", serialize_with = "or_not_provided")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraitRecord {
    #[serde(rename = "ID", serialize_with = "or_not_provided")]
    pub id: Option<String>,

    /// The preferred name. A trait without one is never emitted.
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Citations")]
    pub citations: Vec<CitationRef>,

    #[serde(rename = "PhenotypicSeries", serialize_with = "or_not_provided")]
    pub phenotypic_series: Option<String>,

    #[serde(rename = "MIM", serialize_with = "or_not_provided")]
    pub mim: Option<String>,

    #[serde(rename = "MedGen", serialize_with = "or_not_provided")]
    pub medgen: Option<String>,

    #[serde(rename = "Orph", serialize_with = "or_not_provided")]
    pub orphanet: Option<String>,
}

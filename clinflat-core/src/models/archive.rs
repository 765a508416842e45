use serde::Deserialize;

use super::interpretation::{Interpretation, Interpretations, RcvAccession, RcvList};

/// A single variant as released by ClinVar, with everything submitted about it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VariationArchive {
    #[serde(rename = "@VariationID", default)]
    pub variation_id: Option<String>,

    #[serde(rename = "@VariationName", default)]
    pub variation_name: Option<String>,

    #[serde(rename = "@VariationType", default)]
    pub variation_type: Option<String>,

    #[serde(rename = "@DateCreated", default)]
    pub date_created: Option<String>,

    #[serde(rename = "@DateLastUpdated", default)]
    pub date_last_updated: Option<String>,

    #[serde(rename = "@Accession", default)]
    pub accession: Option<String>,

    #[serde(rename = "@Version", default)]
    pub version: Option<String>,

    #[serde(rename = "@RecordType", default)]
    pub record_type: Option<String>,

    #[serde(rename = "@NumberOfSubmissions", default)]
    pub number_of_submissions: Option<String>,

    #[serde(rename = "@NumberOfSubmitters", default)]
    pub number_of_submitters: Option<String>,

    #[serde(rename = "RecordStatus", default)]
    pub record_status: Option<String>,

    #[serde(rename = "InterpretedRecord", default)]
    pub interpreted_record: Option<InterpretedRecord>,
}

impl VariationArchive {
    pub fn simple_allele(&self) -> Option<&SimpleAllele> {
        self.interpreted_record
            .as_ref()
            .and_then(|record| record.simple_allele.as_ref())
    }

    pub fn review_status(&self) -> Option<&str> {
        self.interpreted_record
            .as_ref()
            .and_then(|record| record.review_status.as_deref())
    }

    pub fn rcvs(&self) -> &[RcvAccession] {
        self.interpreted_record
            .as_ref()
            .and_then(|record| record.rcv_list.as_ref())
            .map(|list| list.accessions.as_slice())
            .unwrap_or(&[])
    }

    /// Every `Interpretation` of the record. Their citations and trait sets together make up the
    /// aggregated interpretation.
    pub fn interpretations(&self) -> &[Interpretation] {
        self.interpreted_record
            .as_ref()
            .and_then(|record| record.interpretations.as_ref())
            .map(|interpretations| interpretations.interpretations.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InterpretedRecord {
    #[serde(rename = "SimpleAllele", default)]
    pub simple_allele: Option<SimpleAllele>,

    #[serde(rename = "ReviewStatus", default)]
    pub review_status: Option<String>,

    #[serde(rename = "RCVList", default)]
    pub rcv_list: Option<RcvList>,

    #[serde(rename = "Interpretations", default)]
    pub interpretations: Option<Interpretations>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimpleAllele {
    #[serde(rename = "@AlleleID", default)]
    pub allele_id: Option<String>,

    #[serde(rename = "@VariationID", default)]
    pub variation_id: Option<String>,

    #[serde(rename = "GeneList", default)]
    pub gene_list: Option<GeneList>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Type", default)]
    pub allele_type: Option<String>,

    #[serde(rename = "Location", default)]
    pub location: Option<Location>,

    #[serde(rename = "XRefList", default)]
    pub xref_list: Option<XRefList>,

    #[serde(rename = "CanonicalSPDI", default)]
    pub canonical_spdi: Option<String>,

    #[serde(rename = "HGVSlist", default)]
    pub hgvs_list: Option<HgvsList>,
}

impl SimpleAllele {
    pub fn genes(&self) -> &[Gene] {
        self.gene_list
            .as_ref()
            .map(|list| list.genes.as_slice())
            .unwrap_or(&[])
    }

    pub fn sequence_locations(&self) -> &[SequenceLocation] {
        self.location
            .as_ref()
            .map(|location| location.sequence_locations.as_slice())
            .unwrap_or(&[])
    }

    pub fn cytogenetic_location(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|location| location.cytogenetic_location.as_deref())
    }

    pub fn xrefs(&self) -> &[XRef] {
        self.xref_list
            .as_ref()
            .map(|list| list.xrefs.as_slice())
            .unwrap_or(&[])
    }

    pub fn hgvs(&self) -> &[Hgvs] {
        self.hgvs_list
            .as_ref()
            .map(|list| list.expressions.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneList {
    #[serde(rename = "Gene", default)]
    pub genes: Vec<Gene>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Gene {
    #[serde(rename = "@Symbol", default)]
    pub symbol: Option<String>,

    #[serde(rename = "@FullName", default)]
    pub full_name: Option<String>,

    #[serde(rename = "@GeneID", default)]
    pub gene_id: Option<String>,

    #[serde(rename = "@HGNC_ID", default)]
    pub hgnc_id: Option<String>,

    #[serde(rename = "@Source", default)]
    pub source: Option<String>,

    #[serde(rename = "@RelationshipType", default)]
    pub relationship_type: Option<String>,

    #[serde(rename = "Location", default)]
    pub location: Option<Location>,

    #[serde(rename = "OMIM", default)]
    pub omim: Vec<String>,
}

impl Gene {
    pub fn sequence_locations(&self) -> &[SequenceLocation] {
        self.location
            .as_ref()
            .map(|location| location.sequence_locations.as_slice())
            .unwrap_or(&[])
    }

    /// Last listed OMIM entry; repeated entries overwrite each other in legacy output.
    pub fn omim_id(&self) -> Option<&str> {
        self.omim.last().map(String::as_str)
    }
}

/// Shared by the allele and its genes: a cytogenetic band plus one placement per assembly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(rename = "CytogeneticLocation", default)]
    pub cytogenetic_location: Option<String>,

    #[serde(rename = "SequenceLocation", default)]
    pub sequence_locations: Vec<SequenceLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SequenceLocation {
    #[serde(rename = "@Assembly", default)]
    pub assembly: Option<String>,

    #[serde(rename = "@AssemblyAccessionVersion", default)]
    pub assembly_accession_version: Option<String>,

    #[serde(rename = "@AssemblyStatus", default)]
    pub assembly_status: Option<String>,

    #[serde(rename = "@Chr", default)]
    pub chr: Option<String>,

    #[serde(rename = "@Accession", default)]
    pub accession: Option<String>,

    #[serde(rename = "@start", default)]
    pub start: Option<String>,

    #[serde(rename = "@stop", default)]
    pub stop: Option<String>,

    #[serde(rename = "@display_start", default)]
    pub display_start: Option<String>,

    #[serde(rename = "@display_stop", default)]
    pub display_stop: Option<String>,

    #[serde(rename = "@Length", default)]
    pub length: Option<String>,

    #[serde(rename = "@positionVCF", default)]
    pub position_vcf: Option<String>,

    #[serde(rename = "@referenceAlleleVCF", default)]
    pub reference_allele_vcf: Option<String>,

    #[serde(rename = "@alternateAlleleVCF", default)]
    pub alternate_allele_vcf: Option<String>,
}

impl SequenceLocation {
    /// Numeric start coordinate. `None` when absent or not an integer.
    pub fn start_position(&self) -> Option<u64> {
        parse_coordinate(self.start.as_deref())
    }

    /// Numeric stop coordinate. `None` when absent or not an integer.
    pub fn stop_position(&self) -> Option<u64> {
        parse_coordinate(self.stop.as_deref())
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct XRefList {
    #[serde(rename = "XRef", default)]
    pub xrefs: Vec<XRef>,
}

/// A cross-reference into an external database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct XRef {
    #[serde(rename = "@DB", default)]
    pub db: Option<String>,

    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Type", default)]
    pub xref_type: Option<String>,
}

impl XRef {
    pub fn is_from(&self, db: &str) -> bool {
        self.db.as_deref() == Some(db)
    }

    pub fn has_type(&self, xref_type: &str) -> bool {
        self.xref_type.as_deref() == Some(xref_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HgvsList {
    #[serde(rename = "HGVS", default)]
    pub expressions: Vec<Hgvs>,
}

/// One transcript- or genome-level HGVS expression with its predicted consequences.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hgvs {
    #[serde(rename = "@Type", default)]
    pub hgvs_type: Option<String>,

    #[serde(rename = "@Assembly", default)]
    pub assembly: Option<String>,

    #[serde(rename = "NucleotideExpression", default)]
    pub nucleotide_expression: Option<Expression>,

    #[serde(rename = "ProteinExpression", default)]
    pub protein_expression: Option<Expression>,

    #[serde(rename = "MolecularConsequence", default)]
    pub molecular_consequences: Vec<MolecularConsequence>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Expression {
    #[serde(rename = "@sequenceAccessionVersion", default)]
    pub sequence_accession_version: Option<String>,

    #[serde(rename = "@change", default)]
    pub change: Option<String>,

    #[serde(rename = "Expression", default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MolecularConsequence {
    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Type", default)]
    pub consequence_type: Option<String>,

    #[serde(rename = "@DB", default)]
    pub db: Option<String>,
}

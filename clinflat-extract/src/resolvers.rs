//! Field resolvers.
//!
//! Each resolver settles one optional or ambiguous field of a [`VariationArchive`] into a single
//! output value. None of them fail: absent data resolves to `None`, [`LocationType::NotProvided`]
//! or an empty list.
//!
//! Tie-breaks are positional. Only the first gene and the first allele placement are looked at,
//! the variant-level cross-reference scan follows an [`XrefPolicy`], and trait cross-references
//! are last-match-wins.
use fxhash::FxHashSet;

use clinflat_core::consts::*;
use clinflat_core::models::{
    Citation, Hgvs, Interpretation, RcvAccession, SimpleAllele, Trait, XRef,
};

use crate::models::{CitationRef, Consequence, LocationType, RcvSummary, TraitRecord};
use crate::options::XrefPolicy;

/// Gene-derived fields, taken from the first listed gene only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneFields {
    pub symbol: Option<String>,
    pub entrez_id: Option<String>,
    pub omim_id: Option<String>,
}

/// Coordinates of the allele's first listed placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub assembly: Option<String>,
    pub start: Option<String>,
    pub stop: Option<String>,
    pub length: Option<String>,
}

///
/// Classify where the variant sits relative to its first gene.
///
/// The variant's first placement is `withinGene` when both its start and stop fall inside the
/// first gene's first placement (inclusive), `outsideGene` otherwise. Coordinates are compared
/// as integers. Missing placement, missing gene, or a coordinate that is absent or not numeric
/// gives `notProvided`.
///
pub fn classify_location(allele: Option<&SimpleAllele>) -> LocationType {
    let Some(allele) = allele else {
        return LocationType::NotProvided;
    };

    let variant_placement = allele.sequence_locations().first();
    let gene_placement = allele
        .genes()
        .first()
        .and_then(|gene| gene.sequence_locations().first());

    let (Some(variant), Some(gene)) = (variant_placement, gene_placement) else {
        return LocationType::NotProvided;
    };

    match (
        variant.start_position(),
        variant.stop_position(),
        gene.start_position(),
        gene.stop_position(),
    ) {
        (Some(start), Some(stop), Some(gene_start), Some(gene_stop)) => {
            if start >= gene_start && stop <= gene_stop {
                LocationType::WithinGene
            } else {
                LocationType::OutsideGene
            }
        }
        _ => LocationType::NotProvided,
    }
}

pub fn resolve_gene(allele: Option<&SimpleAllele>) -> GeneFields {
    match allele.and_then(|allele| allele.genes().first()) {
        Some(gene) => GeneFields {
            symbol: gene.symbol.clone(),
            entrez_id: gene.gene_id.clone(),
            omim_id: gene.omim_id().map(String::from),
        },
        None => GeneFields::default(),
    }
}

///
/// Pick the id of the cross-reference from `db` according to `policy`.
///
/// # Arguments
/// - xrefs: the allele's cross-references, in source order
/// - db: database tag to look for, e.g. `dbSNP`
/// - policy: tie-break between several (or interleaved) entries
///
pub fn resolve_xref(xrefs: &[XRef], db: &str, policy: XrefPolicy) -> Option<String> {
    match policy {
        XrefPolicy::ScanReset => {
            let mut resolved = None;
            for xref in xrefs {
                resolved = if xref.is_from(db) {
                    xref.id.clone()
                } else {
                    None
                };
            }
            resolved
        }
        XrefPolicy::FirstMatch => xrefs
            .iter()
            .find(|xref| xref.is_from(db))
            .and_then(|xref| xref.id.clone()),
        XrefPolicy::LastMatch => xrefs
            .iter()
            .rev()
            .find(|xref| xref.is_from(db))
            .and_then(|xref| xref.id.clone()),
    }
}

pub fn resolve_placement(allele: Option<&SimpleAllele>) -> Placement {
    match allele.and_then(|allele| allele.sequence_locations().first()) {
        Some(location) => Placement {
            assembly: location.assembly.clone(),
            start: location.start.clone(),
            stop: location.stop.clone(),
            length: location.length.clone(),
        },
        None => Placement::default(),
    }
}

/// Molecular consequence types across all expressions, deduplicated, in first-occurrence order.
/// Empty types are skipped.
pub fn dedup_consequences(expressions: &[Hgvs]) -> Vec<Consequence> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut consequences = Vec::new();

    let types = expressions
        .iter()
        .flat_map(|hgvs| hgvs.molecular_consequences.iter())
        .filter_map(|consequence| consequence.consequence_type.as_deref())
        .filter(|consequence_type| !consequence_type.is_empty());

    for consequence_type in types {
        if seen.insert(consequence_type) {
            consequences.push(Consequence::new(consequence_type));
        }
    }

    consequences
}

/// Summarize one RCV. The condition and its MedGen id are only kept when the condition is a
/// MedGen reference.
pub fn summarize_rcv(rcv: &RcvAccession) -> RcvSummary {
    let medgen_condition = rcv
        .condition()
        .filter(|condition| condition.db.as_deref() == Some(DB_MEDGEN));

    RcvSummary {
        accession: rcv.accession.clone(),
        version: rcv.version.clone(),
        interpretation: rcv.interpretation.clone(),
        condition: medgen_condition.and_then(|condition| condition.name.clone()),
        submission_count: rcv.submission_count.clone(),
        review_status: rcv.review_status.clone(),
        medgen_id: medgen_condition.and_then(|condition| condition.id.clone()),
        trait_set_id: rcv.trait_set_id().map(String::from),
    }
}

pub fn summarize_rcvs(rcvs: &[RcvAccession]) -> Vec<RcvSummary> {
    rcvs.iter().map(summarize_rcv).collect()
}

/// Citations of the aggregated interpretation, one pair per citation, unfiltered. Citations of
/// every `Interpretation` are concatenated in source order.
pub fn collect_citations(interpretations: &[Interpretation]) -> Vec<CitationRef> {
    interpretations
        .iter()
        .flat_map(|interpretation| interpretation.citations.iter())
        .map(|citation| match citation.first_id() {
            Some(id) => CitationRef {
                source: id.source.clone(),
                id: id.value.clone(),
            },
            None => CitationRef::default(),
        })
        .collect()
}

///
/// Traits of the aggregated interpretation.
///
/// One record is emitted per `Preferred` name of each trait; names with any other qualifier are
/// skipped, so a trait without a preferred name contributes nothing. A preferred name without
/// text still yields a record, with an empty name.
///
pub fn resolve_traits(interpretations: &[Interpretation]) -> Vec<TraitRecord> {
    let mut records = Vec::new();
    for trait_set in interpretations
        .iter()
        .flat_map(|interpretation| interpretation.trait_sets())
    {
        for condition in &trait_set.traits {
            for name in &condition.names {
                if let Some(preferred) = name.value_if(PREFERRED_NAME_TYPE) {
                    records.push(trait_record(condition, preferred));
                }
            }
        }
    }
    records
}

fn trait_record(condition: &Trait, name: &str) -> TraitRecord {
    let mut record = TraitRecord {
        id: condition.id.clone(),
        name: name.to_string(),
        citations: flatten_citations(&condition.citations),
        ..Default::default()
    };

    // later matches overwrite earlier ones
    for xref in &condition.xrefs {
        if xref.is_from(DB_ORPHANET) {
            record.orphanet = xref.id.clone();
        } else if xref.is_from(DB_MEDGEN) {
            record.medgen = xref.id.clone();
        } else if xref.is_from(DB_OMIM) {
            if xref.has_type(XREF_TYPE_PHENOTYPIC_SERIES) {
                record.phenotypic_series = xref.id.clone();
            } else if xref.has_type(XREF_TYPE_MIM) {
                record.mim = xref.id.clone();
            }
        }
    }

    record
}

/// Every `(source, id)` pair across all citations, in nested source order.
fn flatten_citations(citations: &[Citation]) -> Vec<CitationRef> {
    citations
        .iter()
        .flat_map(|citation| citation.ids.iter())
        .map(|id| CitationRef {
            source: id.source.clone(),
            id: id.value.clone(),
        })
        .collect()
}

use clinflat_core::consts::{DB_DBSNP, DB_OMIM};
use clinflat_core::models::VariationArchive;

use crate::models::{ClinicalInterpretations, FlatVariant};
use crate::options::XrefPolicy;
use crate::resolvers::*;

/// Flatten one archive. This is a pure function of the archive: it never fails and never looks
/// at other archives.
pub fn extract_variant(archive: &VariationArchive, xref_policy: XrefPolicy) -> FlatVariant {
    let allele = archive.simple_allele();
    let xrefs = allele.map(|allele| allele.xrefs()).unwrap_or(&[]);

    let gene = resolve_gene(allele);
    let placement = resolve_placement(allele);
    let interpretations = archive.interpretations();

    FlatVariant {
        accession: archive.accession.clone(),
        version: archive.version.clone(),
        variation_type: archive.variation_type.clone(),
        variation_id: archive.variation_id.clone(),
        variation_name: archive.variation_name.clone(),

        gene_symbol: gene.symbol,
        gene_entrez_id: gene.entrez_id,
        gene_omim_id: gene.omim_id,

        ncbi_ref_seq: allele.and_then(|allele| allele.canonical_spdi.clone()),
        location_type: classify_location(allele),
        dbsnp_id: resolve_xref(xrefs, DB_DBSNP, xref_policy),

        genome_version: placement.assembly,
        chrom_location: allele
            .and_then(|allele| allele.cytogenetic_location())
            .map(String::from),
        chrom_start: placement.start,
        chrom_stop: placement.stop,
        length: placement.length,

        omim_id: resolve_xref(xrefs, DB_OMIM, xref_policy),
        review_status: archive.review_status().map(String::from),

        consequences: allele
            .map(|allele| dedup_consequences(allele.hgvs()))
            .unwrap_or_default(),
        rcvs: summarize_rcvs(archive.rcvs()),
        clinical_interpretations: ClinicalInterpretations {
            citations: collect_citations(interpretations),
            traits: resolve_traits(interpretations),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::LocationType;

    #[rstest]
    fn test_empty_archive_resolves_to_defaults() {
        let archive = VariationArchive {
            accession: Some("VCV000000001".to_string()),
            ..Default::default()
        };

        let variant = extract_variant(&archive, XrefPolicy::default());
        assert_eq!(
            variant,
            FlatVariant {
                accession: Some("VCV000000001".to_string()),
                ..Default::default()
            }
        );
        assert_eq!(variant.location_type, LocationType::NotProvided);
        assert!(variant.rcvs.is_empty());
    }
}

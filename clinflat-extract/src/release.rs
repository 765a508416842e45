use rayon::prelude::*;
use tracing::{debug, info};

use clinflat_core::errors::{ClinflatError, Result};
use clinflat_core::models::{ClinVarRelease, ReleaseHeader, VariationArchive};

use crate::models::{FlatVariant, ReleaseInfo};
use crate::options::{ExtractOptions, XrefPolicy};
use crate::variant::extract_variant;

/// Result of flattening a whole release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRelease {
    /// Present only when requested through [`ExtractOptions::include_release_info`].
    pub info: Option<ReleaseInfo>,
    /// One record per archive, in input order.
    pub variants: Vec<FlatVariant>,
}

impl From<&ReleaseHeader> for ReleaseInfo {
    fn from(header: &ReleaseHeader) -> Self {
        ReleaseInfo {
            schema_namespace: header.xsi.clone(),
            schema_version: header.no_namespace_schema_location.clone(),
            release_date: header.release_date.clone(),
        }
    }
}

/// Release metadata, copied verbatim from the root element.
pub fn extract_release_info(release: &ClinVarRelease) -> ReleaseInfo {
    ReleaseInfo::from(&ReleaseHeader::from(release))
}

///
/// Flatten every archive of the release.
///
/// Archives are independent, so they are mapped in parallel; the output keeps the input order
/// and has exactly one record per archive.
///
/// # Arguments
/// - release: the decoded release
/// - options: tie-break policy and worker count
///
pub fn extract_variants(
    release: &ClinVarRelease,
    options: &ExtractOptions,
) -> Result<Vec<FlatVariant>> {
    let archives = release.archives.as_slice();
    let policy = options.xref_policy;

    let variants = match options.threads {
        Some(1) => {
            debug!("Flattening {} archives sequentially", archives.len());
            archives
                .iter()
                .map(|archive| extract_variant(archive, policy))
                .collect()
        }
        Some(threads) => {
            debug!("Flattening {} archives on {} threads", archives.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| ClinflatError::ThreadPool(e.to_string()))?;
            pool.install(|| extract_parallel(archives, policy))
        }
        None => extract_parallel(archives, policy),
    };

    Ok(variants)
}

fn extract_parallel(archives: &[VariationArchive], policy: XrefPolicy) -> Vec<FlatVariant> {
    // indexed collect keeps input order
    archives
        .par_iter()
        .map(|archive| extract_variant(archive, policy))
        .collect()
}

/// Flatten a release into its optional metadata record and its ordered variant records.
pub fn extract_release(release: &ClinVarRelease, options: &ExtractOptions) -> Result<ExtractedRelease> {
    let info = options
        .include_release_info
        .then(|| extract_release_info(release));

    let variants = extract_variants(release, options)?;
    info!(
        "Flattened {} of {} variation archives",
        variants.len(),
        release.len()
    );

    Ok(ExtractedRelease { info, variants })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn release() -> ClinVarRelease {
        let archives = (0..64)
            .map(|i| VariationArchive {
                accession: Some(format!("VCV{:09}", i)),
                ..Default::default()
            })
            .collect();

        ClinVarRelease {
            xsi: Some("http://www.w3.org/2001/XMLSchema-instance".to_string()),
            no_namespace_schema_location: Some(
                "http://ftp.ncbi.nlm.nih.gov/pub/clinvar/xsd_public/ClinVar_VCV_1.57.xsd".to_string(),
            ),
            release_date: Some("2021-09-19".to_string()),
            archives,
        }
    }

    fn accessions(variants: &[FlatVariant]) -> Vec<String> {
        variants
            .iter()
            .map(|v| v.accession.clone().unwrap_or_default())
            .collect()
    }

    #[rstest]
    fn test_release_info_verbatim(release: ClinVarRelease) {
        let info = extract_release_info(&release);
        assert_eq!(info.release_date.as_deref(), Some("2021-09-19"));
        assert_eq!(
            info.schema_namespace.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema-instance")
        );
        assert!(info.schema_version.unwrap().ends_with("ClinVar_VCV_1.57.xsd"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(1))]
    #[case(Some(4))]
    fn test_order_and_cardinality_preserved(release: ClinVarRelease, #[case] threads: Option<usize>) {
        let options = ExtractOptions::default().with_threads(threads);
        let variants = extract_variants(&release, &options).unwrap();

        let expected: Vec<String> = (0..64).map(|i| format!("VCV{:09}", i)).collect();
        assert_eq!(accessions(&variants), expected);
    }

    #[rstest]
    fn test_release_info_only_when_requested(release: ClinVarRelease) {
        let without = extract_release(&release, &ExtractOptions::default()).unwrap();
        assert!(without.info.is_none());

        let with = extract_release(
            &release,
            &ExtractOptions::default().with_release_info(true),
        )
        .unwrap();
        assert_eq!(with.info, Some(extract_release_info(&release)));
        assert_eq!(with.variants, without.variants);
    }

    #[rstest]
    fn test_empty_release() {
        let extracted = extract_release(&ClinVarRelease::default(), &ExtractOptions::default()).unwrap();
        assert!(extracted.variants.is_empty());
    }
}

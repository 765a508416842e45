//! Integration tests for reading the release fixture from disk, plain and gzipped.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use clinflat_core::{ClinflatError, ReleaseHeader};
use clinflat_io::{read_release, read_release_from, read_release_header};

#[fixture]
fn path_to_release() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data/clinvar_release_small.xml")
}

#[rstest]
fn test_decode_fixture(path_to_release: PathBuf) {
    let release = read_release_from(Some(path_to_release.as_path())).unwrap();

    assert_eq!(release.len(), 4);
    assert_eq!(release.release_date.as_deref(), Some("2021-09-19"));
    assert_eq!(
        release.xsi.as_deref(),
        Some("http://www.w3.org/2001/XMLSchema-instance")
    );

    let brca1 = &release.archives[0];
    let allele = brca1.simple_allele().unwrap();
    assert_eq!(allele.genes().len(), 1);
    assert_eq!(allele.genes()[0].symbol.as_deref(), Some("BRCA1"));
    assert_eq!(allele.genes()[0].omim_id(), Some("113705"));
    assert_eq!(allele.sequence_locations().len(), 2);
    assert_eq!(allele.xrefs().len(), 2);
    assert_eq!(allele.hgvs().len(), 3);
    assert_eq!(brca1.rcvs().len(), 2);

    let interpretation = &brca1.interpretations()[0];
    assert_eq!(interpretation.citations.len(), 2);
    let condition = &interpretation.trait_sets()[0].traits[0];
    assert_eq!(condition.names.len(), 2);
    assert_eq!(condition.xrefs.len(), 3);
    assert_eq!(condition.citations[0].ids.len(), 2);
    assert_eq!(
        condition.names[0].value_if("Preferred"),
        Some("Hereditary breast cancer")
    );
}

#[rstest]
fn test_decode_empty_and_missing_lists(path_to_release: PathBuf) {
    let release = read_release_from(Some(path_to_release.as_path())).unwrap();

    assert!(release.archives[1].rcvs().is_empty());
    assert!(release.archives[1].simple_allele().unwrap().genes().is_empty());
    assert!(release.archives[3].interpreted_record.is_none());
}

#[rstest]
fn test_decode_gzipped_copy(path_to_release: PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("clinvar_release_small.xml.gz");

    let content = std::fs::read(&path_to_release).unwrap();
    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(&content).unwrap();
    encoder.finish().unwrap();

    let plain = read_release_from(Some(path_to_release.as_path())).unwrap();
    let gzipped = read_release_from(Some(gz_path.as_path())).unwrap();
    assert_eq!(plain, gzipped);
}

#[rstest]
fn test_header_matches_full_decode(path_to_release: PathBuf) {
    let file = BufReader::new(File::open(&path_to_release).unwrap());
    let header = read_release_header(file).unwrap();
    let release = read_release_from(Some(path_to_release.as_path())).unwrap();

    assert_eq!(header, ReleaseHeader::from(&release));
}

#[rstest]
fn test_truncated_release_is_fatal(path_to_release: PathBuf) {
    let content = std::fs::read_to_string(&path_to_release).unwrap();
    let truncated = &content[..content.len() / 2];

    let result = read_release(truncated.as_bytes());
    assert!(matches!(result, Err(ClinflatError::Decode(_))));
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::info;

use clinflat_core::errors::Result;
use clinflat_core::models::ClinVarRelease;

use crate::consts::{GZIP_MAGIC, READ_BUFFER_CAPACITY};

///
/// Get a reader for the release input, decompressing it when it is gzipped.
///
/// Compression is detected from the leading magic bytes rather than the file name, so piped
/// `.xml.gz` releases work as well.
///
/// # Arguments
/// - path: file to read; `None` or an empty path reads standard input
///
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let source: Box<dyn Read> = match path.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => {
            let file = File::open(path)?;
            info!("Opened input file {:?}", path);
            Box::new(file)
        }
        None => {
            info!("Reading release from standard input");
            Box::new(io::stdin())
        }
    };

    maybe_decompress(BufReader::with_capacity(READ_BUFFER_CAPACITY, source))
}

/// Wrap `reader` in a gzip decoder if its content starts with the gzip magic bytes.
pub fn maybe_decompress<R>(mut reader: R) -> Result<Box<dyn BufRead>>
where
    R: BufRead + 'static,
{
    let is_gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if is_gzipped {
        Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER_CAPACITY,
            MultiGzDecoder::new(reader),
        )))
    } else {
        Ok(Box::new(reader))
    }
}

/// Decode a complete release. Any structural problem in the XML is returned as
/// [`clinflat_core::ClinflatError::Decode`].
pub fn read_release<R: BufRead>(reader: R) -> Result<ClinVarRelease> {
    let release: ClinVarRelease = quick_xml::de::from_reader(reader)?;
    Ok(release)
}

/// Open `path` (or standard input) and decode the release it holds.
pub fn read_release_from(path: Option<&Path>) -> Result<ClinVarRelease> {
    let reader = open_input(path)?;
    read_release(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ClinVarVariationRelease ReleaseDate="2021-09-19">
  <VariationArchive Accession="VCV000000001" Version="1" VariationID="1"/>
</ClinVarVariationRelease>"#;

    fn gzipped(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[rstest]
    fn test_maybe_decompress_plain() {
        let mut reader = maybe_decompress(Cursor::new(MINIMAL.as_bytes().to_vec())).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, MINIMAL);
    }

    #[rstest]
    fn test_maybe_decompress_gzip() {
        let mut reader = maybe_decompress(Cursor::new(gzipped(MINIMAL))).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, MINIMAL);
    }

    #[rstest]
    fn test_read_release_minimal() {
        let release = read_release(MINIMAL.as_bytes()).unwrap();
        assert_eq!(release.release_date.as_deref(), Some("2021-09-19"));
        assert_eq!(release.len(), 1);
        assert_eq!(release.archives[0].accession.as_deref(), Some("VCV000000001"));
        assert!(release.archives[0].interpreted_record.is_none());
    }

    #[rstest]
    fn test_read_release_from_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.xml.gz");
        std::fs::write(&path, gzipped(MINIMAL)).unwrap();

        let release = read_release_from(Some(path.as_path())).unwrap();
        assert_eq!(release.len(), 1);
    }

    #[rstest]
    fn test_open_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.xml");
        assert!(open_input(Some(missing.as_path())).is_err());
    }

    #[rstest]
    #[case("<ClinVarVariationRelease><VariationArchive></ClinVarVariationRelease>")]
    #[case("")]
    fn test_read_release_malformed(#[case] content: &str) {
        let result = read_release(content.as_bytes());
        assert!(result.is_err());
    }
}

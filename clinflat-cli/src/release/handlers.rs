use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use clinflat_extract::ReleaseInfo;
use clinflat_io::{JsonSink, open_input, read_release_header};

pub fn run_release(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").map(Path::new);

    let info = release_info(input)?;
    JsonSink::stdout().pretty(true).write(&info)?;

    Ok(())
}

/// Read only the root element of the release; the archives are never decoded.
pub fn release_info(input: Option<&Path>) -> Result<ReleaseInfo> {
    let reader = open_input(input)?;
    let header = read_release_header(reader).context("Failed to read the release header")?;

    Ok(ReleaseInfo::from(&header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    #[fixture]
    fn path_to_release() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data/clinvar_release_small.xml")
    }

    #[rstest]
    fn test_release_info_from_header(path_to_release: PathBuf) {
        let info = release_info(Some(path_to_release.as_path())).unwrap();

        assert_eq!(
            info,
            ReleaseInfo {
                schema_namespace: Some("http://www.w3.org/2001/XMLSchema-instance".to_string()),
                schema_version: Some(
                    "http://ftp.ncbi.nlm.nih.gov/pub/clinvar/xsd_public/ClinVar_VCV_1.57.xsd"
                        .to_string()
                ),
                release_date: Some("2021-09-19".to_string()),
            }
        );
    }

    #[rstest]
    fn test_wrong_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("other.xml");
        std::fs::write(&input, "<ReleaseSet Dated=\"2021-09-19\"/>").unwrap();

        assert!(release_info(Some(input.as_path())).is_err());
    }
}

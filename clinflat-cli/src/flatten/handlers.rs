use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use clinflat_core::ClinVarRelease;
use clinflat_extract::extract_release;
use clinflat_io::read_release_from;

use super::config::FlattenConfig;

pub fn run_flatten(matches: &ArgMatches) -> Result<()> {
    let mut config = FlattenConfig::from_matches(matches)?;

    if let Some(path) = matches.get_one::<String>("config") {
        let from_file = FlattenConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?;
        config = config.or(from_file);
    }

    flatten(&config)
}

/// Decode, flatten and write one release according to `config`.
pub fn flatten(config: &FlattenConfig) -> Result<()> {
    let release = decode_release(config.input.as_deref())?;

    let options = config.extract_options();
    info!("Resolving cross-references with the {} policy", options.xref_policy);

    let extracted = extract_release(&release, &options)?;

    if let Some(info) = &extracted.info {
        eprintln!("{:#?}", info);
    }

    config
        .sink()
        .write(&extracted.variants)
        .context("Failed to write flattened variants")?;

    Ok(())
}

fn decode_release(input: Option<&Path>) -> Result<ClinVarRelease> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(match input {
        Some(path) => format!("Decoding release: {:?}", path.file_name().unwrap_or_default()),
        None => "Decoding release from standard input".to_string(),
    });
    pb.enable_steady_tick(Duration::from_millis(120));

    let release = read_release_from(input);
    pb.finish_and_clear();

    let release = release.with_context(|| match input {
        Some(path) => format!("Failed to read ClinVar release: {}", path.display()),
        None => "Failed to read ClinVar release from standard input".to_string(),
    })?;

    info!("Decoded {} variation archives", release.len());
    Ok(release)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    use serde_json::{Value, json};

    use clinflat_extract::XrefPolicy;

    use crate::flatten::cli::create_flatten_cli;

    #[fixture]
    fn path_to_release() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data/clinvar_release_small.xml")
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[rstest]
    fn test_flatten_to_file(path_to_release: PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("variants.json");

        let config = FlattenConfig {
            input: Some(path_to_release),
            output: Some(output.clone()),
            ..Default::default()
        };
        flatten(&config).unwrap();

        let records = read_json(&output);
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["Accession"], json!("VCV000017661"));
        assert_eq!(records[0]["LocationType"], json!("withinGene"));
        assert_eq!(records[0]["DbSNPID"], json!("rs123"));
        assert_eq!(records[0]["OmimID"], json!("604370"));
        assert_eq!(records[1]["RCVData"], json!([]));
        assert_eq!(records[3]["GeneAffected"], json!("notProvided"));
    }

    #[rstest]
    fn test_run_flatten_with_config_file(path_to_release: PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("variants.json");
        let config_path = dir.path().join("flatten.toml");
        std::fs::write(
            &config_path,
            format!(
                "input = {:?}\noutput = \"ignored.json\"\nxref_policy = \"scan-reset\"\nthreads = 1\n",
                path_to_release.display().to_string()
            ),
        )
        .unwrap();

        let matches = create_flatten_cli()
            .try_get_matches_from([
                "flatten",
                "-c",
                config_path.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .unwrap();
        run_flatten(&matches).unwrap();

        assert!(!dir.path().join("ignored.json").exists());
        let records = read_json(&output);
        // scan-reset drops the dbSNP id that is followed by an OMIM entry
        assert_eq!(records[0]["DbSNPID"], json!("notProvided"));
        assert_eq!(records[0]["OmimID"], json!("604370"));
    }

    #[rstest]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("variants.json");

        let config = FlattenConfig {
            input: Some(dir.path().join("missing.xml")),
            output: Some(output.clone()),
            ..Default::default()
        };

        assert!(flatten(&config).is_err());
        assert!(!output.exists());
    }

    #[rstest]
    fn test_malformed_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.xml");
        let output = dir.path().join("variants.json");
        std::fs::write(&input, "<ClinVarVariationRelease><VariationArchive>").unwrap();

        let config = FlattenConfig {
            input: Some(input),
            output: Some(output.clone()),
            xref_policy: Some(XrefPolicy::FirstMatch),
            ..Default::default()
        };

        assert!(flatten(&config).is_err());
        assert!(!output.exists());
    }

    #[rstest]
    fn test_unreadable_config_is_fatal() {
        let matches = create_flatten_cli()
            .try_get_matches_from(["flatten", "-c", "does/not/exist.toml"])
            .unwrap();
        let err = run_flatten(&matches).unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }
}

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use serde::Deserialize;

use clinflat_extract::{ExtractOptions, XrefPolicy};
use clinflat_io::JsonSink;

///
/// Settings for one `flatten` run. Every key is optional, so the same type holds the values
/// read from a TOML file and the values given on the command line.
///
/// ```toml
/// input = "ClinVarVariationRelease_00-latest.xml.gz"
/// output = "variants.json.gz"
/// release_info = true
/// pretty = false
/// threads = 8
/// xref_policy = "scan-reset"
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlattenConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub release_info: Option<bool>,
    pub pretty: Option<bool>,
    pub threads: Option<usize>,
    pub xref_policy: Option<XrefPolicy>,
}

impl FlattenConfig {
    pub fn from_file(path: &Path) -> clinflat_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Collect the settings given on the command line. Switches that were not passed stay
    /// `None` so they do not mask the config file.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let xref_policy = matches
            .get_one::<String>("xref-policy")
            .map(|raw| XrefPolicy::from_str(raw).map_err(|e| anyhow!(e)))
            .transpose()?;

        let threads = matches
            .get_one::<u64>("threads")
            .map(|n| usize::try_from(*n))
            .transpose()
            .context("Thread count does not fit this platform")?;

        Ok(FlattenConfig {
            input: matches.get_one::<String>("input").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            release_info: matches.get_flag("release-info").then_some(true),
            pretty: matches.get_flag("pretty").then_some(true),
            threads,
            xref_policy,
        })
    }

    /// Keep every value set on `self`, filling the gaps from `fallback`.
    pub fn or(self, fallback: FlattenConfig) -> Self {
        FlattenConfig {
            input: self.input.or(fallback.input),
            output: self.output.or(fallback.output),
            release_info: self.release_info.or(fallback.release_info),
            pretty: self.pretty.or(fallback.pretty),
            threads: self.threads.or(fallback.threads),
            xref_policy: self.xref_policy.or(fallback.xref_policy),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default()
            .with_xref_policy(self.xref_policy.unwrap_or_default())
            .with_threads(self.threads)
            .with_release_info(self.release_info.unwrap_or(false))
    }

    pub fn sink(&self) -> JsonSink {
        JsonSink::from_option(self.output.as_deref()).pretty(self.pretty.unwrap_or(false))
    }
}

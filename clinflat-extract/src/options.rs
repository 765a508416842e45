use std::str::FromStr;

use serde::Deserialize;

/// How the variant-level dbSNP and OMIM ids are picked from an allele's cross-reference list.
///
/// ClinVar lists can hold several entries for the same database, so a tie-break is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XrefPolicy {
    /// Scan the whole list; a matching entry sets the field and every non-matching entry
    /// resets it. Only a match in last position survives. This reproduces legacy flattener output.
    ScanReset,
    /// The first entry from the target database wins.
    #[default]
    FirstMatch,
    /// The last entry from the target database wins; other databases are ignored.
    LastMatch,
}

impl FromStr for XrefPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan-reset" => Ok(XrefPolicy::ScanReset),
            "first-match" => Ok(XrefPolicy::FirstMatch),
            "last-match" => Ok(XrefPolicy::LastMatch),
            _ => Err(format!("Invalid cross-reference policy: {}", s)),
        }
    }
}

impl std::fmt::Display for XrefPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            XrefPolicy::ScanReset => "scan-reset",
            XrefPolicy::FirstMatch => "first-match",
            XrefPolicy::LastMatch => "last-match",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub xref_policy: XrefPolicy,
    /// `None` runs on rayon's global pool, `Some(1)` runs sequentially.
    pub threads: Option<usize>,
    pub include_release_info: bool,
}

impl ExtractOptions {
    pub fn with_xref_policy(mut self, xref_policy: XrefPolicy) -> Self {
        self.xref_policy = xref_policy;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_release_info(mut self, include_release_info: bool) -> Self {
        self.include_release_info = include_release_info;
        self
    }
}

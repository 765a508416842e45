use serde::Deserialize;

use super::archive::VariationArchive;

/// One ClinVar variation release: the `ClinVarVariationRelease` root element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClinVarRelease {
    /// Namespace bound to the `xsi` prefix on the root element.
    #[serde(rename = "@xmlns:xsi", alias = "@xsi", default)]
    pub xsi: Option<String>,

    /// Schema location, which ClinVar uses to carry the schema version.
    #[serde(
        rename = "@noNamespaceSchemaLocation",
        alias = "@xsi:noNamespaceSchemaLocation",
        default
    )]
    pub no_namespace_schema_location: Option<String>,

    #[serde(rename = "@ReleaseDate", default)]
    pub release_date: Option<String>,

    #[serde(rename = "VariationArchive", default)]
    pub archives: Vec<VariationArchive>,
}

impl ClinVarRelease {
    pub fn len(&self) -> usize {
        self.archives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}

/// Just the attributes of the release root element, without any archives.
///
/// This is what the release-header streaming reader produces, so a release can be identified
/// without decoding the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseHeader {
    pub xsi: Option<String>,
    pub no_namespace_schema_location: Option<String>,
    pub release_date: Option<String>,
}

impl From<&ClinVarRelease> for ReleaseHeader {
    fn from(release: &ClinVarRelease) -> Self {
        ReleaseHeader {
            xsi: release.xsi.clone(),
            no_namespace_schema_location: release.no_namespace_schema_location.clone(),
            release_date: release.release_date.clone(),
        }
    }
}

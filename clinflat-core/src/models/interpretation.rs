use serde::Deserialize;

use super::archive::XRef;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RcvList {
    #[serde(rename = "RCVAccession", default)]
    pub accessions: Vec<RcvAccession>,
}

/// A submitted interpretation summary (RCV record) for one condition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RcvAccession {
    #[serde(rename = "@Title", default)]
    pub title: Option<String>,

    #[serde(rename = "@DateLastEvaluated", default)]
    pub date_last_evaluated: Option<String>,

    #[serde(rename = "@ReviewStatus", default)]
    pub review_status: Option<String>,

    #[serde(rename = "@Interpretation", default)]
    pub interpretation: Option<String>,

    #[serde(rename = "@SubmissionCount", default)]
    pub submission_count: Option<String>,

    #[serde(rename = "@Accession", default)]
    pub accession: Option<String>,

    #[serde(rename = "@Version", default)]
    pub version: Option<String>,

    #[serde(rename = "InterpretedConditionList", default)]
    pub condition_list: Option<InterpretedConditionList>,
}

impl RcvAccession {
    pub fn trait_set_id(&self) -> Option<&str> {
        self.condition_list
            .as_ref()
            .and_then(|list| list.trait_set_id.as_deref())
    }

    /// The condition this RCV refers to. When several are listed the last one wins, as in
    /// legacy flattened output.
    pub fn condition(&self) -> Option<&InterpretedCondition> {
        self.condition_list
            .as_ref()
            .and_then(|list| list.conditions.last())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InterpretedConditionList {
    #[serde(rename = "@TraitSetID", default)]
    pub trait_set_id: Option<String>,

    #[serde(rename = "InterpretedCondition", default)]
    pub conditions: Vec<InterpretedCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InterpretedCondition {
    #[serde(rename = "@DB", default)]
    pub db: Option<String>,

    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "$text", default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Interpretations {
    #[serde(rename = "Interpretation", default)]
    pub interpretations: Vec<Interpretation>,
}

/// The aggregated interpretation of a variant across all of its submissions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Interpretation {
    #[serde(rename = "@DateLastEvaluated", default)]
    pub date_last_evaluated: Option<String>,

    #[serde(rename = "@NumberOfSubmissions", default)]
    pub number_of_submissions: Option<String>,

    #[serde(rename = "@NumberOfSubmitters", default)]
    pub number_of_submitters: Option<String>,

    #[serde(rename = "@Type", default)]
    pub interpretation_type: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    #[serde(rename = "Citation", default)]
    pub citations: Vec<Citation>,

    #[serde(rename = "ConditionList", default)]
    pub condition_list: Option<ConditionList>,
}

impl Interpretation {
    pub fn trait_sets(&self) -> &[TraitSet] {
        self.condition_list
            .as_ref()
            .map(|list| list.trait_sets.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Citation {
    #[serde(rename = "@Type", default)]
    pub citation_type: Option<String>,

    #[serde(rename = "@Abbrev", default)]
    pub abbrev: Option<String>,

    #[serde(rename = "ID", default)]
    pub ids: Vec<CitationId>,

    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

impl Citation {
    pub fn first_id(&self) -> Option<&CitationId> {
        self.ids.first()
    }
}

/// An identifier of a cited work, e.g. `<ID Source="PubMed">20301425</ID>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CitationId {
    #[serde(rename = "@Source", default)]
    pub source: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConditionList {
    #[serde(rename = "TraitSet", default)]
    pub trait_sets: Vec<TraitSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraitSet {
    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Type", default)]
    pub trait_set_type: Option<String>,

    #[serde(rename = "Trait", default)]
    pub traits: Vec<Trait>,
}

/// A condition with its candidate names, cross-references and citations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Trait {
    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Type", default)]
    pub trait_type: Option<String>,

    #[serde(rename = "Name", default)]
    pub names: Vec<TraitName>,

    #[serde(rename = "XRef", default)]
    pub xrefs: Vec<XRef>,

    #[serde(rename = "Citation", default)]
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraitName {
    #[serde(rename = "ElementValue", default)]
    pub element_value: Option<ElementValue>,

    #[serde(rename = "XRef", default)]
    pub xrefs: Vec<XRef>,
}

impl TraitName {
    /// The name text, if it carries the given qualifier (e.g. `Preferred`). A qualified name
    /// without text yields `""`.
    pub fn value_if(&self, qualifier: &str) -> Option<&str> {
        self.element_value
            .as_ref()
            .filter(|value| value.value_type.as_deref() == Some(qualifier))
            .map(|value| value.value.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElementValue {
    #[serde(rename = "@Type", default)]
    pub value_type: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

//! Block data and descriptor types
//!
//! These are the values exchanged with the host editor: the persisted
//! block payload and the static toolbox/sanitize descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Persisted representation of one raw HTML block
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockData {
    /// Raw markup exactly as typed. Missing or `null` loads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html: String,
}

impl BlockData {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Parse saved block data from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to the JSON form stored in the host document
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Toolbox entry shown in the host's block insertion UI
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ToolboxDescriptor {
    /// SVG markup
    pub icon: String,
    pub title: String,
}

/// Per-field sanitizer directives
///
/// `true` tells the host's output sanitizer to keep every tag in that field.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SanitizePolicy {
    rules: BTreeMap<String, bool>,
}

impl SanitizePolicy {
    /// Keep markup untouched in `field`
    pub fn allow_markup(mut self, field: impl Into<String>) -> Self {
        self.rules.insert(field.into(), true);
        self
    }

    /// Rule for `field`, if one is declared
    pub fn rule(&self, field: &str) -> Option<bool> {
        self.rules.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, bool)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), *rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_data_missing_html_is_empty() {
        let data = BlockData::from_json("{}").unwrap();
        assert_eq!(data.html, "");
    }

    #[test]
    fn test_block_data_null_html_is_empty() {
        let data = BlockData::from_json(r#"{"html":null}"#).unwrap();
        assert_eq!(data.html, "");
    }

    #[test]
    fn test_block_data_json_shape() {
        let data = BlockData::new("<b>hi</b>\n<i>there</i>");
        let json = data.to_json().unwrap();
        assert_eq!(json, r#"{"html":"<b>hi</b>\n<i>there</i>"}"#);
        assert_eq!(BlockData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn test_sanitize_policy_serializes_as_flat_object() {
        let policy = SanitizePolicy::default().allow_markup("html");
        assert_eq!(serde_json::to_string(&policy).unwrap(), r#"{"html":true}"#);
        assert_eq!(policy.rule("html"), Some(true));
        assert_eq!(policy.rule("text"), None);
    }
}

//! Parsing of comma-separated field specifications.
//!
//! A field specification such as `"Name, ProductCode, Status__c"` names the
//! record fields a list displays. The first field is the primary field: it
//! becomes the link column of a table or the title of a card.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

use crate::text_processing::humanize_label;

/// Ordered, non-empty, trimmed field identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSpec {
    fields: Vec<String>,
}

impl FieldSpec {
    /// Parse an optional specification string.
    ///
    /// Tokens are split on commas, trimmed, and dropped when empty. Order is
    /// preserved and duplicates are kept.
    ///
    /// # Example
    /// ```rust
    /// use relist_util::field_spec::FieldSpec;
    ///
    /// let spec = FieldSpec::parse(Some(" Name ,ProductCode,, Status__c "));
    /// assert_eq!(spec.fields(), ["Name", "ProductCode", "Status__c"]);
    /// assert_eq!(spec.primary_field(), Some("Name"));
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let fields = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// The first field, used for the link/title.
    pub fn primary_field(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Every field after the primary one.
    pub fn secondary_fields(&self) -> &[String] {
        self.fields.get(1..).unwrap_or_default()
    }

    /// Field identifiers paired with their humanized labels.
    pub fn labeled(&self) -> Vec<(&str, String)> {
        self.iter().map(|field| (field, humanize_label(field))).collect()
    }
}

impl FromStr for FieldSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(Some(s)))
    }
}

impl From<&str> for FieldSpec {
    fn from(value: &str) -> Self {
        Self::parse(Some(value))
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_tokens() {
        let spec = FieldSpec::from(" Name ,ProductCode,, Status__c ");
        assert_eq!(spec.fields(), ["Name", "ProductCode", "Status__c"]);
        assert_eq!(spec.to_string(), "Name,ProductCode,Status__c");
    }

    #[test]
    fn empty_and_missing_inputs_produce_empty_spec() {
        for raw in [None, Some(""), Some(" , ,, ")] {
            let spec = FieldSpec::parse(raw);
            assert!(spec.is_empty(), "expected empty spec for {:?}", raw);
            assert_eq!(spec.primary_field(), None);
            assert!(spec.secondary_fields().is_empty());
        }
    }

    #[test]
    fn primary_and_secondary_split() {
        let spec: FieldSpec = "Name".parse().unwrap();
        assert_eq!(spec.primary_field(), Some("Name"));
        assert!(spec.secondary_fields().is_empty());

        let spec = FieldSpec::from("Name,Status__c,ProductCode");
        assert_eq!(spec.secondary_fields(), ["Status__c", "ProductCode"]);
    }

    #[test]
    fn labeled_pairs_fields_with_humanized_labels() {
        let spec = FieldSpec::from("Name,productCode");
        assert_eq!(spec.labeled(), vec![("Name", "Name".to_string()), ("productCode", "Product Code".to_string())]);
    }
}

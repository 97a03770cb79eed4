//! # Record View Builder
//!
//! Turns the records returned by a lookup into render-ready rows. The shape
//! of each row is chosen by [`ListConfig::shape`]:
//!
//! - **Table**: the raw record is kept verbatim and a sibling
//!   `<primaryField>Url` field is added, paired with [`ColumnSpec`]s derived
//!   from the field specification.
//! - **Card**: the primary field becomes the title and every secondary field
//!   becomes a labeled [`CardField`].
//!
//! Configuration is validated before a [`LookupRequest`] is produced, so an
//! incomplete list never reaches the lookup service.

use relist_types::config::non_blank;
use relist_types::{
    CardField, CardRow, ColumnKind, ColumnSpec, FETCH_LIMIT, FieldRef, ListConfig, LookupRequest, RawRecord, RenderShape,
    TypeAttributes, ViewRow, display_value, is_truthy, record_id, record_url,
};
use relist_util::{FieldSpec, humanize_label};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ViewError;
use crate::lookup::RecordLookup;

/// Relative URL prefix serving a stored document by identifier.
pub const DOCUMENT_DOWNLOAD_PREFIX: &str = "/sfc/servlet.shepherd/document/download/";

/// Suffix of the synthesized link field in table rows.
const URL_FIELD_SUFFIX: &str = "Url";

/// Rows and columns ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub shape: RenderShape,
    /// Empty for the card shape.
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<ViewRow>,
}

impl ViewModel {
    /// An empty model of the given shape.
    pub fn empty(shape: RenderShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RecordViewBuilder {
    config: ListConfig,
    fields: FieldSpec,
}

impl RecordViewBuilder {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            config: config.clone(),
            fields: FieldSpec::parse(config.fields_list.as_deref()),
        }
    }

    pub fn field_spec(&self) -> &FieldSpec {
        &self.fields
    }

    pub fn shape(&self) -> RenderShape {
        self.config.shape
    }

    /// Check that every input the lookup needs is present and non-blank.
    ///
    /// A field list made only of separators counts as missing.
    pub fn validate(&self) -> Result<(), ViewError> {
        let mut missing = Vec::new();
        if non_blank(&self.config.record_id).is_none() {
            missing.push("recordId");
        }
        if non_blank(&self.config.child_object_api_name).is_none() {
            missing.push("childObjectApiName");
        }
        if non_blank(&self.config.lookup_field_api_name).is_none() {
            missing.push("lookupFieldApiName");
        }
        if non_blank(&self.config.fields_list).is_none() || self.fields.is_empty() {
            missing.push("fieldsList");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            debug!(?missing, "list configuration incomplete");
            Err(ViewError::configuration(missing))
        }
    }

    /// The request to send to the lookup service.
    ///
    /// Always asks for [`FETCH_LIMIT`] records; the display limit only
    /// affects which of the fetched rows are visible.
    pub fn lookup_request(&self) -> Result<LookupRequest, ViewError> {
        self.validate()?;
        let required = |value: &Option<String>| non_blank(value).unwrap_or_default().to_string();
        Ok(LookupRequest {
            parent_id: required(&self.config.record_id),
            child_object_api_name: required(&self.config.child_object_api_name),
            lookup_field_api_name: required(&self.config.lookup_field_api_name),
            fields_string: self.fields.to_string(),
            limit_size: FETCH_LIMIT,
        })
    }

    /// Column descriptions for the table shape; empty for cards.
    ///
    /// The primary field becomes a non-sortable link column whose text is the
    /// field's own value; every other field is a plain text column.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        if self.config.shape != RenderShape::Table {
            return Vec::new();
        }

        self.fields
            .labeled()
            .into_iter()
            .enumerate()
            .map(|(index, (field, label))| {
                if index == 0 {
                    ColumnSpec {
                        label,
                        field_name: url_field_name(field),
                        kind: ColumnKind::Url,
                        type_attributes: Some(TypeAttributes {
                            label: FieldRef {
                                field_name: field.to_string(),
                            },
                        }),
                        sortable: false,
                    }
                } else {
                    ColumnSpec {
                        label,
                        field_name: field.to_string(),
                        kind: ColumnKind::Text,
                        type_attributes: None,
                        sortable: false,
                    }
                }
            })
            .collect()
    }

    /// Shape raw records into a [`ViewModel`].
    pub fn build(&self, records: &[RawRecord]) -> ViewModel {
        let rows = records
            .iter()
            .map(|record| match self.config.shape {
                RenderShape::Table => ViewRow::Table(self.table_row(record)),
                RenderShape::Card => ViewRow::Card(self.card_row(record)),
            })
            .collect();

        ViewModel {
            shape: self.config.shape,
            columns: self.columns(),
            rows,
        }
    }

    /// Validate, fetch through `lookup`, and build.
    pub async fn fetch_and_build(&self, lookup: &dyn RecordLookup) -> Result<ViewModel, ViewError> {
        let request = self.lookup_request()?;
        let records = lookup
            .fetch_related(&request)
            .await
            .map_err(|rejection| ViewError::from_rejection(&rejection))?;
        Ok(self.build(&records))
    }

    fn table_row(&self, record: &RawRecord) -> RawRecord {
        let mut row = record.clone();
        if let Some(primary) = self.fields.primary_field() {
            row.insert(url_field_name(primary), Value::String(record_url(record)));
        }
        row
    }

    fn card_row(&self, record: &RawRecord) -> CardRow {
        let title = self
            .fields
            .primary_field()
            .and_then(|field| record.get(field))
            .cloned()
            .unwrap_or(Value::Null);

        let fields = self
            .fields
            .secondary_fields()
            .iter()
            .map(|field| self.card_field(field, record.get(field).cloned().unwrap_or(Value::Null)))
            .collect();

        CardRow {
            id: record_id(record),
            title,
            url: record_url(record),
            fields,
        }
    }

    fn card_field(&self, field: &str, value: Value) -> CardField {
        let label = humanize_label(field);
        if !self.config.image_aware {
            return CardField::plain(label, value);
        }

        let is_image = field == self.config.image_field() && is_truthy(&value);
        let value = if is_image {
            Value::String(document_url(&value))
        } else {
            value
        };
        CardField {
            label,
            value,
            api_name: Some(field.to_string()),
            is_image: Some(is_image),
        }
    }
}

fn url_field_name(field: &str) -> String {
    format!("{field}{URL_FIELD_SUFFIX}")
}

/// Download URL for a document identifier value.
pub fn document_url(document_id: &Value) -> String {
    format!("{DOCUMENT_DOWNLOAD_PREFIX}{}", display_value(document_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::StaticLookup;
    use relist_types::LookupRejection;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        serde_json::from_value(value).expect("record")
    }

    fn configured(fields: &str, shape: RenderShape) -> ListConfig {
        ListConfig {
            record_id: Some("001P".into()),
            child_object_api_name: Some("Product2".into()),
            lookup_field_api_name: Some("Account__c".into()),
            fields_list: Some(fields.into()),
            shape,
            ..ListConfig::default()
        }
    }

    #[test]
    fn card_row_uses_primary_as_title() {
        let builder = RecordViewBuilder::new(&configured("Name,Status__c", RenderShape::Card));
        let model = builder.build(&[record(json!({"Id": "001", "Name": "Acme", "Status__c": "Active"}))]);

        assert!(model.columns.is_empty());
        assert_eq!(
            serde_json::to_value(&model.rows[0]).unwrap(),
            json!({
                "id": "001",
                "title": "Acme",
                "url": "/001",
                "fields": [{"label": "Status", "value": "Active"}]
            })
        );
    }

    #[test]
    fn table_row_keeps_fields_and_adds_link() {
        let builder = RecordViewBuilder::new(&configured("Name,ProductCode", RenderShape::Table));
        let model = builder.build(&[record(json!({"Id": "01t1", "Name": "Widget", "ProductCode": "W-1"}))]);

        let row = model.rows[0].as_table().expect("table row");
        assert_eq!(row["Name"], "Widget");
        assert_eq!(row["ProductCode"], "W-1");
        assert_eq!(row["NameUrl"], "/01t1");
    }

    #[test]
    fn columns_link_primary_and_text_for_the_rest() {
        let builder = RecordViewBuilder::new(&configured("Name, Technology_Readiness_Level__c", RenderShape::Table));
        let columns = builder.columns();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].kind, ColumnKind::Url);
        assert_eq!(columns[0].field_name, "NameUrl");
        assert_eq!(
            columns[0].type_attributes.as_ref().map(|attrs| attrs.label.field_name.as_str()),
            Some("Name")
        );
        assert_eq!(columns[1].kind, ColumnKind::Text);
        assert_eq!(columns[1].label, "Technology Readiness Level");
        assert!(columns.iter().all(|column| !column.sortable));
    }

    #[test]
    fn missing_field_yields_null_value() {
        let builder = RecordViewBuilder::new(&configured("Name,Status__c", RenderShape::Card));
        let model = builder.build(&[record(json!({"Id": "001", "Name": "Acme"}))]);
        let card = model.rows[0].as_card().expect("card");
        assert_eq!(card.fields[0].value, Value::Null);
    }

    #[test]
    fn image_field_rewritten_when_image_aware() {
        let config = ListConfig {
            image_aware: true,
            ..configured("Name,current_product_image__c,Family", RenderShape::Card)
        };
        let builder = RecordViewBuilder::new(&config);
        let model = builder.build(&[
            record(json!({"Id": "1", "Name": "A", "current_product_image__c": "069xx", "Family": "Gear"})),
            record(json!({"Id": "2", "Name": "B", "current_product_image__c": null, "Family": "Gear"})),
        ]);

        let with_image = model.rows[0].as_card().unwrap();
        assert_eq!(with_image.fields[0].value, json!("/sfc/servlet.shepherd/document/download/069xx"));
        assert_eq!(with_image.fields[0].is_image, Some(true));
        assert_eq!(with_image.fields[0].api_name.as_deref(), Some("current_product_image__c"));
        assert_eq!(with_image.fields[1].is_image, Some(false));

        let without_image = model.rows[1].as_card().unwrap();
        assert_eq!(without_image.fields[0].value, Value::Null);
        assert_eq!(without_image.fields[0].is_image, Some(false));
    }

    #[test]
    fn image_field_left_alone_for_plain_cards() {
        let builder = RecordViewBuilder::new(&configured("Name,current_product_image__c", RenderShape::Card));
        let model = builder.build(&[record(json!({"Id": "1", "Name": "A", "current_product_image__c": "069xx"}))]);
        let card = model.rows[0].as_card().unwrap();
        assert_eq!(card.fields[0].value, json!("069xx"));
        assert_eq!(card.fields[0].is_image, None);
    }

    #[test]
    fn validation_lists_every_missing_input() {
        let config = ListConfig {
            fields_list: Some(" , ".into()),
            ..ListConfig::default()
        };
        let error = RecordViewBuilder::new(&config).validate().unwrap_err();
        assert_eq!(
            error,
            ViewError::configuration(vec!["recordId", "childObjectApiName", "lookupFieldApiName", "fieldsList"])
        );
    }

    #[test]
    fn lookup_request_always_asks_for_the_cap() {
        let config = ListConfig {
            record_limit: 5,
            ..configured(" Name ,ProductCode,, Status__c ", RenderShape::Table)
        };
        let request = RecordViewBuilder::new(&config).lookup_request().expect("request");
        assert_eq!(request.limit_size, FETCH_LIMIT);
        assert_eq!(request.fields_string, "Name,ProductCode,Status__c");
        assert_eq!(request.parent_id, "001P");
    }

    #[tokio::test]
    async fn incomplete_config_never_reaches_lookup() {
        let lookup = StaticLookup::records(Vec::new());
        let builder = RecordViewBuilder::new(&ListConfig::default());

        let error = builder.fetch_and_build(&lookup).await.unwrap_err();
        assert!(error.is_configuration());
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn rejection_message_surfaces_as_fetch_error() {
        let lookup = StaticLookup::rejecting(LookupRejection::with_message("INVALID_FIELD"));
        let builder = RecordViewBuilder::new(&configured("Name", RenderShape::Table));

        let error = builder.fetch_and_build(&lookup).await.unwrap_err();
        assert_eq!(error.to_string(), "INVALID_FIELD");
        assert_eq!(lookup.call_count(), 1);
    }
}

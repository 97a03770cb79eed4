//! Configuration surface of a related-records list.
//!
//! A [`ListConfig`] is static for one activation. Every field is optional on
//! the wire so that partially configured lists deserialize cleanly; the
//! engine decides which combinations are usable.

use serde::{Deserialize, Serialize};

use crate::RenderShape;

/// Rows shown before the user asks to see everything.
pub const DEFAULT_RECORD_LIMIT: usize = 2;

/// Field treated as a document identifier and rendered as an image.
pub const DEFAULT_IMAGE_FIELD: &str = "current_product_image__c";

/// Path namespace used when building relative navigation URLs.
pub const DEFAULT_NAVIGATION_NAMESPACE: &str = "lightning";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListConfig {
    /// Identifier of the parent record whose children are listed.
    pub record_id: Option<String>,
    /// API name of the child record type.
    pub child_object_api_name: Option<String>,
    /// Lookup field on the child pointing at the parent.
    pub lookup_field_api_name: Option<String>,
    /// Relationship name, used for the card title and navigation.
    pub child_relationship_name: Option<String>,
    /// Comma-separated field specification (e.g. `Name,ProductCode`).
    pub fields_list: Option<String>,
    /// Rows shown while the list is limited.
    pub record_limit: usize,
    pub shape: RenderShape,
    /// Whether the list body can be collapsed.
    pub collapsible: bool,
    /// Whether card entries carry `apiName`/`isImage` metadata.
    pub image_aware: bool,
    /// Exact field name holding a document identifier.
    pub image_field: Option<String>,
    pub navigation: NavigationConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            record_id: None,
            child_object_api_name: None,
            lookup_field_api_name: None,
            child_relationship_name: None,
            fields_list: None,
            record_limit: DEFAULT_RECORD_LIMIT,
            shape: RenderShape::default(),
            collapsible: false,
            image_aware: false,
            image_field: None,
            navigation: NavigationConfig::default(),
        }
    }
}

impl ListConfig {
    /// The configured image field, or [`DEFAULT_IMAGE_FIELD`].
    pub fn image_field(&self) -> &str {
        self.image_field
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_IMAGE_FIELD)
    }
}

/// Inputs to the "see more" destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationConfig {
    /// External page that hosts the full list.
    pub view_all_page: Option<String>,
    /// Component rendered on the view-all page.
    pub view_all_component: Option<String>,
    /// Parent object type used to build a relative related-list path.
    pub parent_object_api_name: Option<String>,
    /// Object type of the hosting record page.
    pub object_api_name: Option<String>,
    /// First path segment of view-all and related-list URLs, defaults to
    /// [`DEFAULT_NAVIGATION_NAMESPACE`].
    pub namespace: Option<String>,
}

/// Returns the trimmed value when it is present and not blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

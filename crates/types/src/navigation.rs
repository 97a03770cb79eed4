//! Navigation intents produced for the "see more" action.

use serde::{Deserialize, Serialize};

/// Action name carried by related-list page intents.
pub const VIEW_ACTION: &str = "view";

/// Where the host should take the user.
///
/// Serialized as `{ "type": ..., "attributes": { ... } }` so that structured
/// intents can be handed to a navigation service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attributes")]
pub enum NavigationIntent {
    /// Open a URL directly. `replace` opens it in place of the current view.
    #[serde(rename = "openUrl")]
    OpenUrl { url: String, replace: bool },
    /// Open a relative URL as a web page.
    #[serde(rename = "standard__webPage")]
    WebPage { url: String },
    /// Generic related-list page of a record.
    #[serde(rename = "standard__recordRelationshipPage", rename_all = "camelCase")]
    RelatedListPage {
        record_id: String,
        object_api_name: Option<String>,
        relationship_api_name: Option<String>,
        action_name: String,
    },
}

impl NavigationIntent {
    /// The target URL for URL-based intents.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::OpenUrl { url, .. } | Self::WebPage { url } => Some(url),
            Self::RelatedListPage { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn related_list_page_uses_type_and_attributes() {
        let intent = NavigationIntent::RelatedListPage {
            record_id: "001A".into(),
            object_api_name: Some("Account".into()),
            relationship_api_name: Some("Products__r".into()),
            action_name: VIEW_ACTION.into(),
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({
                "type": "standard__recordRelationshipPage",
                "attributes": {
                    "recordId": "001A",
                    "objectApiName": "Account",
                    "relationshipApiName": "Products__r",
                    "actionName": "view"
                }
            })
        );
        assert_eq!(intent.url(), None);
    }

    #[test]
    fn web_page_round_trips() {
        let raw = json!({"type": "standard__webPage", "attributes": {"url": "/lightning/r/Account/001A/related/Products__r/view"}});
        let intent: NavigationIntent = serde_json::from_value(raw).expect("intent");
        assert_eq!(intent.url(), Some("/lightning/r/Account/001A/related/Products__r/view"));
    }
}

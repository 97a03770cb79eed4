//! Destination of the "see more" action.
//!
//! Three strategies are tried in order; the first whose inputs are all
//! configured wins. Partial configuration of an earlier strategy falls
//! through to the next one.

use relist_types::config::non_blank;
use relist_types::navigation::VIEW_ACTION;
use relist_types::{DEFAULT_NAVIGATION_NAMESPACE, ListConfig, NavigationIntent};
use relist_util::http::{build_path, encode_path_segment};
use serde::Serialize;
use url::form_urlencoded;

const RELATED_LIST_PATH: &str = "/{namespace}/r/{object}/{id}/related/{relationship}/view";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStrategy {
    /// A dedicated page hosting the full list component.
    ViewAllPage,
    /// Relative URL of the parent's related list.
    RelatedListUrl,
    /// Structured related-list page intent.
    RelatedListPage,
}

#[derive(Debug, Clone)]
pub struct NavigationResolver<'a> {
    config: &'a ListConfig,
}

impl<'a> NavigationResolver<'a> {
    pub fn new(config: &'a ListConfig) -> Self {
        Self { config }
    }

    pub fn strategy(&self) -> NavigationStrategy {
        let nav = &self.config.navigation;
        if non_blank(&nav.view_all_page).is_some() && non_blank(&nav.view_all_component).is_some() {
            NavigationStrategy::ViewAllPage
        } else if non_blank(&nav.parent_object_api_name).is_some()
            && non_blank(&self.config.child_relationship_name).is_some()
        {
            NavigationStrategy::RelatedListUrl
        } else {
            NavigationStrategy::RelatedListPage
        }
    }

    pub fn resolve(&self) -> NavigationIntent {
        let nav = &self.config.navigation;
        let record_id = non_blank(&self.config.record_id).unwrap_or_default();
        let relationship = non_blank(&self.config.child_relationship_name);
        let namespace = non_blank(&nav.namespace).unwrap_or(DEFAULT_NAVIGATION_NAMESPACE);

        match self.strategy() {
            NavigationStrategy::ViewAllPage => {
                let page = non_blank(&nav.view_all_page).unwrap_or_default();
                let component = non_blank(&nav.view_all_component).unwrap_or_default();
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("c__componentName", component)
                    .append_pair("c__recordId", record_id)
                    .finish();
                NavigationIntent::OpenUrl {
                    url: format!(
                        "/{}/n/{}?{}",
                        encode_path_segment(namespace),
                        encode_path_segment(page),
                        query
                    ),
                    replace: true,
                }
            }
            NavigationStrategy::RelatedListUrl => {
                let url = build_path(
                    RELATED_LIST_PATH,
                    &[
                        ("namespace", namespace),
                        ("object", non_blank(&nav.parent_object_api_name).unwrap_or_default()),
                        ("id", record_id),
                        ("relationship", relationship.unwrap_or_default()),
                    ],
                );
                NavigationIntent::WebPage { url }
            }
            NavigationStrategy::RelatedListPage => NavigationIntent::RelatedListPage {
                record_id: record_id.to_string(),
                object_api_name: non_blank(&nav.object_api_name)
                    .or_else(|| non_blank(&nav.parent_object_api_name))
                    .map(str::to_string),
                relationship_api_name: relationship.map(str::to_string),
                action_name: VIEW_ACTION.to_string(),
            },
        }
    }
}

/// Resolve the "see more" destination for a list configuration.
pub fn resolve_navigation(config: &ListConfig) -> NavigationIntent {
    NavigationResolver::new(config).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relist_types::NavigationConfig;

    fn base() -> ListConfig {
        ListConfig {
            record_id: Some("001A".into()),
            child_relationship_name: Some("Products__r".into()),
            ..ListConfig::default()
        }
    }

    #[test]
    fn view_all_page_wins_over_related_list_url() {
        let config = ListConfig {
            navigation: NavigationConfig {
                view_all_page: Some("Product_List".into()),
                view_all_component: Some("c:productList".into()),
                parent_object_api_name: Some("Account".into()),
                ..NavigationConfig::default()
            },
            ..base()
        };

        assert_eq!(NavigationResolver::new(&config).strategy(), NavigationStrategy::ViewAllPage);
        assert_eq!(
            resolve_navigation(&config),
            NavigationIntent::OpenUrl {
                url: "/lightning/n/Product_List?c__componentName=c%3AproductList&c__recordId=001A".into(),
                replace: true,
            }
        );
    }

    #[test]
    fn partial_view_all_config_falls_through() {
        let config = ListConfig {
            navigation: NavigationConfig {
                view_all_page: Some("Product_List".into()),
                parent_object_api_name: Some("Account".into()),
                ..NavigationConfig::default()
            },
            ..base()
        };

        assert_eq!(
            resolve_navigation(&config),
            NavigationIntent::WebPage {
                url: "/lightning/r/Account/001A/related/Products__r/view".into()
            }
        );
    }

    #[test]
    fn related_list_url_honors_namespace() {
        let config = ListConfig {
            navigation: NavigationConfig {
                parent_object_api_name: Some("Account".into()),
                namespace: Some("partners".into()),
                ..NavigationConfig::default()
            },
            ..base()
        };
        assert_eq!(
            resolve_navigation(&config).url(),
            Some("/partners/r/Account/001A/related/Products__r/view")
        );
    }

    #[test]
    fn view_all_page_honors_namespace() {
        let config = ListConfig {
            navigation: NavigationConfig {
                view_all_page: Some("Product_List".into()),
                view_all_component: Some("productList".into()),
                namespace: Some("partners".into()),
                ..NavigationConfig::default()
            },
            ..base()
        };
        assert_eq!(
            resolve_navigation(&config).url(),
            Some("/partners/n/Product_List?c__componentName=productList&c__recordId=001A")
        );
    }

    #[test]
    fn falls_back_to_related_list_page() {
        let config = ListConfig {
            navigation: NavigationConfig {
                object_api_name: Some("Account".into()),
                ..NavigationConfig::default()
            },
            ..base()
        };

        assert_eq!(
            resolve_navigation(&config),
            NavigationIntent::RelatedListPage {
                record_id: "001A".into(),
                object_api_name: Some("Account".into()),
                relationship_api_name: Some("Products__r".into()),
                action_name: "view".into(),
            }
        );
    }
}

use relist_types::LookupRejection;
use relist_util::http::rejection_message;
use thiserror::Error;

/// Fixed message reported when required configuration is missing.
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Configuration error: check childObjectApiName, lookupFieldApiName, and fieldsList.";

/// Why a list has no rows to show.
///
/// Both kinds render identically (as their message); the variant only tells
/// callers whether the lookup was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Required configuration is missing; the lookup was never invoked.
    #[error("{}", CONFIGURATION_ERROR_MESSAGE)]
    Configuration { missing: Vec<&'static str> },
    /// The lookup service rejected the request.
    #[error("{message}")]
    Fetch { message: String },
}

impl ViewError {
    pub fn configuration(missing: Vec<&'static str>) -> Self {
        Self::Configuration { missing }
    }

    pub fn from_rejection(rejection: &LookupRejection) -> Self {
        Self::Fetch {
            message: rejection_message(rejection),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_kinds_display_their_message() {
        let config = ViewError::configuration(vec!["recordId"]);
        assert_eq!(config.to_string(), CONFIGURATION_ERROR_MESSAGE);
        assert!(config.is_configuration());

        let fetch = ViewError::from_rejection(&LookupRejection::with_message("INVALID_FIELD"));
        assert_eq!(fetch.to_string(), "INVALID_FIELD");
        assert!(!fetch.is_configuration());
    }
}

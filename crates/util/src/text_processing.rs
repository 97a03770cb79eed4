//! # Text Processing Utilities
//!
//! Label derivation for field identifiers, card titles, and redaction of
//! credentials before text reaches logs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when no relationship name is configured.
pub const DEFAULT_CARD_TITLE: &str = "Related Records";

static FIELD_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"__c$|__r$").expect("field suffix pattern"));
static RELATIONSHIP_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"__r$").expect("relationship suffix pattern"));
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary pattern"));

/// Derives a human-readable label from a field identifier.
///
/// The transformation runs in a fixed order:
/// 1. strip one trailing `__c` or `__r` suffix
/// 2. replace underscores with spaces
/// 3. insert a space between a lowercase letter and a following uppercase letter
/// 4. upper-case the first character of every space-separated word
///
/// Acronyms get no special treatment, so applying the function twice is not
/// guaranteed to be stable.
///
/// # Example
/// ```rust
/// use relist_util::text_processing::humanize_label;
///
/// assert_eq!(humanize_label("Technology_Readiness_Level__c"), "Technology Readiness Level");
/// assert_eq!(humanize_label("productCode"), "Product Code");
/// ```
pub fn humanize_label(api_name: &str) -> String {
    let stripped = FIELD_SUFFIX.replace(api_name, "");
    let spaced = stripped.replace('_', " ");
    let split = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");

    split.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Removes a trailing `__r` relationship suffix.
pub fn strip_relationship_suffix(name: &str) -> String {
    RELATIONSHIP_SUFFIX.replace(name, "").into_owned()
}

/// Card title for a list: `Related <relationship>` or [`DEFAULT_CARD_TITLE`].
pub fn card_title(relationship_name: Option<&str>) -> String {
    match relationship_name.filter(|name| !name.is_empty()) {
        Some(name) => format!("Related {}", strip_relationship_suffix(name)),
        None => DEFAULT_CARD_TITLE.to_string(),
    }
}

/// Redacts values that look like credentials.
///
/// # Example
/// ```rust
/// use relist_util::text_processing::redact_sensitive;
///
/// assert_eq!(redact_sensitive("Authorization: Bearer abc.def"), "Authorization: [REDACTED]");
/// assert_eq!(redact_sensitive("RELIST_API_TOKEN=xyz"), "RELIST_API_TOKEN=[REDACTED]");
/// ```
pub fn redact_sensitive(input: &str) -> String {
    let mut redacted = input.to_string();
    for pattern in REDACT_PATTERNS.iter() {
        redacted = pattern
            .replace_all(&redacted, |captures: &regex::Captures| {
                let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("{}[REDACTED]", prefix)
            })
            .into_owned();
    }
    redacted
}

static REDACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(authorization:\s+)([^\s]+(?:\s+[^\s]+)*)",
        r"(?i)((?:^|\b)Bearer\s+)([A-Za-z0-9\-._~+/]+=*)",
        r"(?i)(\b[A-Z0-9_]*(?:KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)",
        r#"(?i)("(?:access_?token|client_?secret|password|session_?id)"\s*:\s*)("[^"]*")"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("redaction pattern"))
    .collect()
});

/// Shortens text to `max_len` characters, appending `...` when truncated.
pub fn truncate_for_summary(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_len {
        return trimmed.to_string();
    }

    let target_len = max_len.saturating_sub(3);
    let truncated: String = trimmed.chars().take(target_len).collect();
    format!("{}...", truncated.trim_end())
}

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped inside a single path segment: everything except the
/// RFC3986 unreserved set (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Resolves a path template by replacing `{key}` placeholders with
/// percent-encoded values.
///
/// Placeholders without a matching variable are left untouched.
///
/// # Examples
/// ```rust
/// use relist_util::http::build_path;
///
/// let path = build_path(
///     "/{namespace}/r/{object}/{id}/related/{relationship}/view",
///     &[("namespace", "lightning"), ("object", "Account"), ("id", "001A"), ("relationship", "Products__r")],
/// );
/// assert_eq!(path, "/lightning/r/Account/001A/related/Products__r/view");
/// ```
pub fn build_path(template: &str, variables: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (key, value) in variables {
        let encoded = encode_path_segment(value);
        path = path.replace(&format!("{{{}}}", key), &encoded);
    }
    path
}

/// Percent-encodes a value for use as one path segment.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_path_preserves_unreserved_identifier_bytes() {
        let path = build_path("/r/{object}/{id}", &[("object", "Custom_Object__c"), ("id", "a01-x.y~z")]);
        assert_eq!(path, "/r/Custom_Object__c/a01-x.y~z");
    }

    #[test]
    fn build_path_encodes_reserved_bytes() {
        let path = build_path("/n/{page}", &[("page", "team/app name")]);
        assert_eq!(path, "/n/team%2Fapp%20name");
    }

    #[test]
    fn missing_placeholders_remain() {
        assert_eq!(build_path("/r/{object}/{id}", &[("object", "Account")]), "/r/Account/{id}");
    }
}

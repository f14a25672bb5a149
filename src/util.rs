use crate::constants::header::LIST_SEPARATOR;

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        normalize_lower(a) == normalize_lower(b)
    }
}

/// Splits every `Access-Control-Request-Headers` value into trimmed,
/// lower-cased header names. Empty tokens are dropped; order and duplicates
/// are kept.
pub fn parse_request_headers(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(LIST_SEPARATOR))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(normalize_lower)
        .collect()
}

/// RFC 9110 `token`, the grammar of method and header names.
pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Trims entries, drops empty ones and keeps the first occurrence of each key.
pub(crate) fn dedup_trimmed<I, S, K>(values: I, key: K) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    K: Fn(&str) -> String,
{
    let mut seen = std::collections::HashSet::new();
    let mut deduped = Vec::new();
    for value in values {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(key(trimmed)) {
            deduped.push(trimmed.to_string());
        }
    }
    deduped
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

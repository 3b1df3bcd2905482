//! Shared CLI utilities.

/// Parse a comma-separated flag value into a `Vec<String>`, trimming
/// whitespace and discarding empty segments. Returns `None` when the flag
/// was not given.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

/// Turn a repeatable flag into an override: an empty list means the flag was
/// never given and the config value should stand.
pub fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

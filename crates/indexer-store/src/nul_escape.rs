use std::sync::LazyLock;

use regex::Regex;

/// Matches a run of JSON-escaped NUL sequences, not itself preceded by an
/// odd number of backslashes, so an already-escaped backslash before the
/// sequence isn't mistaken for part of it.
static NUL_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\\](\\\\)*)(\\u0000)+").unwrap());

/// Postgres's `jsonb` type rejects embedded NUL characters outright, and
/// AT Protocol records occasionally contain them in free-text fields.
/// Replace escaped NUL sequences with a visible placeholder before the
/// JSON is handed to the database rather than letting the insert fail.
pub fn escape_null_chars(json: &str) -> std::borrow::Cow<'_, str> {
    NUL_ESCAPE.replace_all(json, "$1<0x00>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_clean_json_untouched() {
        let input = "{\"text\":\"hello\"}";
        assert_eq!(escape_null_chars(input), input);
    }

    #[test]
    fn escapes_embedded_nul() {
        let esc = ['\\', 'u', '0', '0', '0', '0'].iter().collect::<String>();
        let input = format!("{{\"text\":\"a{esc}b\"}}");
        let out = escape_null_chars(&input);
        assert!(out.contains("<0x00>"));
        assert!(!out.contains(&esc));
    }
}

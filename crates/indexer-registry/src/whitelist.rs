use globset::{Glob, GlobSet, GlobSetBuilder};

/// Builds the host whitelist matcher from `PDS_WHITELIST` config patterns,
/// e.g. `https://bsky.social,https://*.bsky.network,https://*`.
pub fn build(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

/// Matches any `https://` host, the original's implicit default when no
/// whitelist is configured.
pub fn default_patterns() -> Vec<String> {
    vec!["https://*".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_any_https_host() {
        let set = build(&default_patterns()).unwrap();
        assert!(set.is_match("https://bsky.social"));
        assert!(set.is_match("https://evil.example"));
        assert!(!set.is_match("http://bsky.social"));
    }

    #[test]
    fn narrow_patterns_exclude_unlisted_hosts() {
        let set = build(&[
            "https://bsky.social".to_string(),
            "https://*.bsky.network".to_string(),
        ])
        .unwrap();
        assert!(set.is_match("https://bsky.social"));
        assert!(set.is_match("https://morel.us-east.host.bsky.network"));
        assert!(!set.is_match("https://evil.example"));
    }
}

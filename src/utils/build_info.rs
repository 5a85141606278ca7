//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `seagull <version> (<date>, <commit>)`, printed by `--version`.
pub fn version_string() -> String {
    format!(
        "seagull {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_is_iso() {
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_string_mentions_everything() {
        let v = version_string();
        assert!(v.starts_with("seagull "));
        assert!(v.contains(BUILD_COMMIT));
        assert!(v.contains(BUILD_DATE));
    }
}

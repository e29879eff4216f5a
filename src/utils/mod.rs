//! Utility functions for makemkv

use std::env;

/// Check if an environment variable is set to a truthy value
/// Accepts: "1", "true", "on", "yes", "t" (case insensitive)
pub fn is_env_true(key: &str) -> bool {
    match env::var(key) {
        Ok(val) => {
            let val_lower = val.to_lowercase();
            matches!(val_lower.as_str(), "1" | "true" | "on" | "yes" | "t")
        }
        Err(_) => false,
    }
}

/// `snake_case` key as a tree label: "title_count" -> "Title count"
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_env_true_unset() {
        assert!(!is_env_true("MAKEMKV_TEST_SURELY_UNSET_VARIABLE"));
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("title_count"), "Title count");
        assert_eq!(humanize_key("drives"), "Drives");
        assert_eq!(humanize_key("ABC_def"), "Abc def");
        assert_eq!(humanize_key(""), "");
    }
}

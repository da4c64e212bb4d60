use log::trace;

use crate::constants::SHARED_WRAPPER_KEYWORDS;

/// Returns the subsequence of `specifiers` whose text contains a shared-wrapper
/// keyword, case-insensitively. Substring containment, not whole-segment
/// matching; input order and duplicates are preserved.
pub fn detect_shared_wrappers(specifiers: &[String]) -> Vec<String> {
    specifiers
        .iter()
        .filter(|spec| {
            let lower = spec.to_lowercase();
            let hit = SHARED_WRAPPER_KEYWORDS.iter().any(|kw| lower.contains(kw));
            if hit {
                trace!("Shared wrapper keyword matched in '{}'", spec);
            }
            hit
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matches_theme_and_provider_preserving_order() {
        let input = specs(&["./Theme", "./utils", "./Provider"]);
        assert_eq!(detect_shared_wrappers(&input), specs(&["./Theme", "./Provider"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(detect_shared_wrappers(&[]).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let input = specs(&["./THEMEProvider", "@acme/ui-WRAPPER"]);
        assert_eq!(detect_shared_wrappers(&input), input);
    }

    #[test]
    fn test_substring_not_whole_segment() {
        // "provideradapter" contains "provider" and therefore matches
        let input = specs(&["./provideradapter"]);
        assert_eq!(detect_shared_wrappers(&input), input);
    }

    #[test]
    fn test_duplicates_produce_duplicates() {
        let input = specs(&["./decorators", "./api", "./decorators"]);
        assert_eq!(detect_shared_wrappers(&input), specs(&["./decorators", "./decorators"]));
    }

    #[test]
    fn test_no_matches() {
        let input = specs(&["react", "./Button", "@acme/tokens"]);
        assert!(detect_shared_wrappers(&input).is_empty());
    }
}

use sprout::error::Error;
use sprout::exclude::{build_exclude_set, relative_for_matching};
use std::path::Path;

#[test]
fn test_empty_pattern_list_matches_nothing() {
    let glob_set = build_exclude_set(&[]).unwrap();
    assert!(!glob_set.is_match("atoms/Button/Button.tsx"));
}

#[test]
fn test_patterns_match_relative_paths() {
    let patterns = vec!["**/Input.stories.tsx".to_string()];
    let glob_set = build_exclude_set(&patterns).unwrap();

    assert!(glob_set.is_match("atoms/Input/Input.stories.tsx"));
    assert!(!glob_set.is_match("atoms/Input/Input.tsx"));
    assert!(!glob_set.is_match("atoms/Button/Button.stories.tsx"));
}

#[test]
fn test_invalid_pattern() {
    let patterns = vec!["a{b".to_string()];
    match build_exclude_set(&patterns) {
        Err(Error::ExcludePatternError(message)) => {
            assert!(message.contains("a{b"))
        }
        _ => panic!("Expected ExcludePatternError"),
    }
}

#[test]
fn test_relative_for_matching_strips_base_dir() {
    let base = Path::new("src/components");
    let path = Path::new("src/components/atoms/Button/Button.tsx");

    assert_eq!(relative_for_matching(path, base), "atoms/Button/Button.tsx");
}

#[test]
fn test_relative_for_matching_outside_base_dir() {
    let base = Path::new("src/components");
    let path = Path::new("elsewhere/Button.tsx");

    assert_eq!(relative_for_matching(path, base), "elsewhere/Button.tsx");
}

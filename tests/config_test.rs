use sprout::config::{load_config, parse_config};
use sprout::error::Error;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("components.yml");

    let result = load_config(&missing);
    match result {
        Err(Error::ConfigNotFoundError { path }) => {
            assert!(path.contains("components.yml"))
        }
        _ => panic!("Expected ConfigNotFoundError"),
    }
}

#[test]
fn test_load_config_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("components.yml");
    std::fs::write(&config_path, "atoms:\n  - Button\n").unwrap();

    let content = load_config(&config_path).unwrap();
    assert!(content.contains("Button"));
}

#[test]
fn test_bare_names_have_empty_metadata() {
    let content = "atoms:\n  - Button\n  - Input\n";
    let (targets, excludes) = parse_config(content, "src/components").unwrap();

    assert_eq!(targets.len(), 2);
    assert!(excludes.is_empty());
    for target in &targets {
        assert_eq!(target.category, "atoms");
        assert!(target.metadata.is_empty());
    }
    assert_eq!(targets[0].name, "Button");
    assert_eq!(targets[1].name, "Input");
}

#[test]
fn test_document_order_is_preserved() {
    let content = r#"
molecules:
  - Card
atoms:
  - Button
  - Input
"#;
    let (targets, _) = parse_config(content, "out").unwrap();

    let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Card", "Button", "Input"]);
    assert_eq!(targets[0].category, "molecules");
    assert_eq!(targets[1].category, "atoms");
}

#[test]
fn test_metadata_entries() {
    let content = r#"
atoms:
  - Button:
      - color: blue
      - size: large
"#;
    let (targets, _) = parse_config(content, "out").unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "Button");
    assert_eq!(targets[0].metadata.get("color"), Some(&"blue".to_string()));
    assert_eq!(targets[0].metadata.get("size"), Some(&"large".to_string()));
}

#[test]
fn test_duplicate_metadata_key_last_wins() {
    let content = r#"
atoms:
  - Button:
      - color: blue
      - color: red
"#;
    let (targets, _) = parse_config(content, "out").unwrap();

    assert_eq!(targets[0].metadata.len(), 1);
    assert_eq!(targets[0].metadata.get("color"), Some(&"red".to_string()));
}

#[test]
fn test_null_metadata_list_is_empty() {
    let content = "atoms:\n  - Button:\n";
    let (targets, _) = parse_config(content, "out").unwrap();

    assert_eq!(targets[0].name, "Button");
    assert!(targets[0].metadata.is_empty());
}

#[test]
fn test_scalar_metadata_values_are_stringified() {
    let content = r#"
atoms:
  - Button:
      - columns: 2
      - rounded: true
"#;
    let (targets, _) = parse_config(content, "out").unwrap();

    assert_eq!(targets[0].metadata.get("columns"), Some(&"2".to_string()));
    assert_eq!(targets[0].metadata.get("rounded"), Some(&"true".to_string()));
}

#[test]
fn test_invalid_entry_names_category() {
    let content = "atoms:\n  - [not, a, name]\n";
    let result = parse_config(content, "out");

    match result {
        Err(Error::ConfigFormatError(message)) => {
            assert!(message.contains("atoms"), "message was: {}", message)
        }
        _ => panic!("Expected ConfigFormatError"),
    }
}

#[test]
fn test_nested_metadata_value_is_rejected() {
    let content = r#"
atoms:
  - Button:
      - color:
          - blue
"#;
    assert!(matches!(
        parse_config(content, "out"),
        Err(Error::ConfigFormatError(_))
    ));
}

#[test]
fn test_top_level_must_be_mapping() {
    for content in ["- Button\n", "42\n", "just a string\n"] {
        assert!(matches!(
            parse_config(content, "out"),
            Err(Error::ConfigFormatError(_))
        ));
    }
}

#[test]
fn test_category_must_hold_sequence() {
    let content = "atoms: Button\n";
    match parse_config(content, "out") {
        Err(Error::ConfigFormatError(message)) => {
            assert!(message.contains("atoms"))
        }
        _ => panic!("Expected ConfigFormatError"),
    }
}

#[test]
fn test_empty_name_is_rejected() {
    let content = "atoms:\n  - ''\n";
    assert!(matches!(
        parse_config(content, "out"),
        Err(Error::ConfigFormatError(_))
    ));
}

#[test]
fn test_excludes_are_parsed() {
    let content = r#"
atoms:
  - Button
excludes:
  - "**/*.stories.tsx"
  - "**/Internal*"
"#;
    let (targets, excludes) = parse_config(content, "out").unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(excludes, vec!["**/*.stories.tsx", "**/Internal*"]);
}

#[test]
fn test_excludes_must_be_strings() {
    let content = "excludes:\n  - 42\n";
    assert!(matches!(
        parse_config(content, "out"),
        Err(Error::ConfigFormatError(_))
    ));
}

#[test]
fn test_targets_are_rooted_at_base_dir() {
    let content = "atoms:\n  - Button\n";
    let (targets, _) = parse_config(content, "custom/root").unwrap();

    assert_eq!(targets[0].base_dir, PathBuf::from("custom/root"));
    assert_eq!(
        targets[0].component_path(),
        PathBuf::from("custom/root/atoms/Button/Button.tsx")
    );
}

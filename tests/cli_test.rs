use clap::Parser;
use sprout::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("sprout")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let args = make_args(&["--config", "./components.yml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.command, None);
    assert_eq!(parsed.config, Some(PathBuf::from("./components.yml")));
    assert_eq!(parsed.base_dir, PathBuf::from("src/components"));
    assert!(!parsed.force);
    assert!(!parsed.dry_run);
    assert!(!parsed.yes);
    assert!(!parsed.verbose);
    assert_eq!(parsed.component_template, None);
    assert_eq!(parsed.story_template, None);
}

#[test]
fn test_generate_command() {
    let args = make_args(&["generate", "--config", "./components.yml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.command.as_deref(), Some("generate"));
}

#[test]
fn test_help_command_needs_no_config() {
    let args = make_args(&["help"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.command.as_deref(), Some("help"));
    assert_eq!(parsed.config, None);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--config",
        "./components.yml",
        "--base-dir",
        "./ui",
        "--force",
        "--dry-run",
        "--yes",
        "--verbose",
        "--component-template",
        "./custom.tsx.j2",
        "--story-template",
        "./custom.stories.tsx.j2",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.base_dir, PathBuf::from("./ui"));
    assert!(parsed.force);
    assert!(parsed.dry_run);
    assert!(parsed.yes);
    assert!(parsed.verbose);
    assert_eq!(parsed.component_template, Some(PathBuf::from("./custom.tsx.j2")));
    assert_eq!(
        parsed.story_template,
        Some(PathBuf::from("./custom.stories.tsx.j2"))
    );
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-f", "-y", "-v", "--config", "./components.yml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_option() {
    let args = make_args(&["--config", "./components.yml", "--frobnicate"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["generate", "extra", "--config", "./components.yml"]);
    assert!(Args::try_parse_from(args).is_err());
}

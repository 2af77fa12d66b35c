use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use theme_builder::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("theme-builder")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults_to_current_directory() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.root, PathBuf::from("."));
    assert!(!parsed.verbose);
}

#[test]
fn test_root_and_verbose() {
    let parsed = Args::try_parse_from(make_args(&["--verbose", "./theme"])).unwrap();

    assert_eq!(parsed.root, PathBuf::from("./theme"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./theme", "extra"])).is_err());
}

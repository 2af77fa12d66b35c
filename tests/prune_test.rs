use std::fs;

use tempfile::TempDir;
use theme_builder::answer::Decision;
use theme_builder::error::Error;
use theme_builder::prune::prune_or_keep;

#[test]
fn test_negative_deletes_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("gulpfile.js"), "gulp").unwrap();

    prune_or_keep(temp_dir.path(), "gulpfile.js", Decision::Negative).unwrap();
    assert!(!temp_dir.path().join("gulpfile.js").exists());
}

#[test]
fn test_negative_deletes_directory_recursively() {
    let temp_dir = TempDir::new().unwrap();
    let languages = temp_dir.path().join("languages");
    fs::create_dir_all(languages.join("nested")).unwrap();
    fs::write(languages.join("nested/theme.pot"), "msgid").unwrap();

    prune_or_keep(temp_dir.path(), "languages", Decision::Negative).unwrap();
    assert!(!languages.exists());
}

#[test]
fn test_affirmative_keeps_path() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("sass")).unwrap();

    prune_or_keep(temp_dir.path(), "sass", Decision::Affirmative).unwrap();
    assert!(temp_dir.path().join("sass").is_dir());
}

#[test]
fn test_second_deletion_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.rb"), "compass").unwrap();

    prune_or_keep(temp_dir.path(), "config.rb", Decision::Negative).unwrap();
    let result = prune_or_keep(temp_dir.path(), "config.rb", Decision::Negative);

    match result {
        Err(Error::MissingPath { path }) => assert_eq!(path, temp_dir.path().join("config.rb")),
        other => panic!("Expected MissingPath, got {other:?}"),
    }
}

#[test]
fn test_affirmative_on_missing_path_is_harmless() {
    let temp_dir = TempDir::new().unwrap();
    assert!(prune_or_keep(temp_dir.path(), "missing", Decision::Affirmative).is_ok());
}

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use theme_builder::config::{find_config, load_config, parse_config, BuilderConfig};
use theme_builder::constants::CONFIG_FILES;
use theme_builder::error::Error;

#[test]
fn test_defaults() {
    let config = BuilderConfig::default();

    assert_eq!(config.extensions, vec!["php", "css", "txt", "scss", "js", "json"]);
    assert_eq!(config.exclude, vec!["node_modules"]);
    assert_eq!(config.readme, PathBuf::from("README.md"));
    assert_eq!(config.post_types.include_marker, "{%= post_type_include %}");
}

#[test]
fn test_parse_json() {
    let config = parse_config(r#"{"extensions": ["php", "html"], "readme": "docs/README.md"}"#)
        .unwrap();

    assert_eq!(config.extensions, vec!["php", "html"]);
    assert_eq!(config.readme, PathBuf::from("docs/README.md"));
    assert_eq!(config.exclude, vec!["node_modules"]);
}

#[test]
fn test_parse_yaml() {
    let content = r#"
exclude:
  - node_modules
  - vendor
post_types:
  file_suffix: "-cpt.php"
"#;
    let config = parse_config(content).unwrap();

    assert_eq!(config.exclude, vec!["node_modules", "vendor"]);
    assert_eq!(config.post_types.file_suffix, "-cpt.php");
    assert_eq!(
        config.post_types.prototype,
        PathBuf::from("extensions/custom-post-types/custom-post-type.php")
    );
}

#[test]
fn test_parse_empty_is_default() {
    assert_eq!(parse_config("  \n").unwrap(), BuilderConfig::default());
}

#[test]
fn test_parse_invalid() {
    assert!(matches!(parse_config(r#"{"extensions": 5}"#), Err(Error::ConfigError(_))));
    assert!(matches!(parse_config("extensions: [php"), Err(Error::ConfigError(_))));
}

#[test]
fn test_load_config() {
    let temp_dir = TempDir::new().unwrap();

    let (config, manifest) = load_config(temp_dir.path()).unwrap();
    assert_eq!(config, BuilderConfig::default());
    assert!(manifest.is_none());

    fs::write(temp_dir.path().join("builder.yml"), "readme: GUIDE.md\n").unwrap();
    fs::write(temp_dir.path().join("builder.json"), r#"{"readme": "INDEX.md"}"#).unwrap();

    let (config, manifest) = load_config(temp_dir.path()).unwrap();
    assert_eq!(config.readme, PathBuf::from("INDEX.md"));
    assert_eq!(manifest, Some(temp_dir.path().join("builder.json")));
    assert_eq!(
        find_config(temp_dir.path(), &CONFIG_FILES[1..]),
        Some(temp_dir.path().join("builder.yml"))
    );
}

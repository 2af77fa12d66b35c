use std::fs;
use std::path::Path;

use tempfile::TempDir;
use theme_builder::answer::Decision;
use theme_builder::config::BuilderConfig;
use theme_builder::matcher::Tag;
use theme_builder::replace::FileSet;
use theme_builder::tags::{resolve_tag, BlockAction, Polarity};

const TEMPLATE: &str = "before\n{{{VIP}}}\nvip body\n{{{/VIP}}}\nafter\n";
const STRIPPED: &str = "before\n\nvip body\n\nafter\n";
const DELETED: &str = "before\n\nafter\n";

fn resolve(content: &str, tag: &str, decision: Decision, polarity: Polarity) -> (BlockAction, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("functions.php");
    fs::write(&path, content).unwrap();

    let files = FileSet::new(temp_dir.path(), &BuilderConfig::default()).unwrap();
    let action = resolve_tag(&files, &Tag::new(tag), decision, polarity).unwrap();
    (action, fs::read_to_string(&path).unwrap())
}

#[test]
fn test_normal_polarity_negative_strips_markers() {
    let (action, content) = resolve(TEMPLATE, "VIP", Decision::Negative, Polarity::Normal);
    assert_eq!(action, BlockAction::StripMarkers);
    assert_eq!(content, STRIPPED);
}

#[test]
fn test_normal_polarity_affirmative_deletes_block() {
    let (action, content) = resolve(TEMPLATE, "VIP", Decision::Affirmative, Polarity::Normal);
    assert_eq!(action, BlockAction::DeleteBlock);
    assert_eq!(content, DELETED);
}

#[test]
fn test_inverse_polarity_affirmative_strips_markers() {
    let (action, content) = resolve(TEMPLATE, "VIP", Decision::Affirmative, Polarity::Inverse);
    assert_eq!(action, BlockAction::StripMarkers);
    assert_eq!(content, STRIPPED);
}

#[test]
fn test_inverse_polarity_negative_deletes_block() {
    let (action, content) = resolve(TEMPLATE, "VIP", Decision::Negative, Polarity::Inverse);
    assert_eq!(action, BlockAction::DeleteBlock);
    assert_eq!(content, DELETED);
}

#[test]
fn test_repeated_blocks_are_deleted_independently() {
    let content = "a{{{LANG}}}one{{{/LANG}}}b{{{LANG}}}two\nthree{{{/LANG}}}c\n";
    let (_, content) = resolve(content, "LANG", Decision::Affirmative, Polarity::Normal);
    assert_eq!(content, "abc\n");
}

#[test]
fn test_deletion_ignores_marker_case() {
    let content = "x{{{gulp}}}task();{{{/Gulp}}}y\n";
    let (_, content) = resolve(content, "GULP", Decision::Negative, Polarity::Inverse);
    assert_eq!(content, "xy\n");
}

#[test]
fn test_other_tags_are_untouched() {
    let content = "{{{GULP}}}gulp();{{{/GULP}}}{{{NONGULP}}}plain();{{{/NONGULP}}}\n";
    let (_, content) = resolve(content, "NONGULP", Decision::Affirmative, Polarity::Normal);
    assert_eq!(content, "{{{GULP}}}gulp();{{{/GULP}}}\n");
}

#[test]
fn test_every_file_of_the_set_is_resolved() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("css")).unwrap();
    fs::write(root.join("functions.php"), "{{{LANG}}}php{{{/LANG}}}\n").unwrap();
    fs::write(root.join("css/styles.css"), "{{{LANG}}}css{{{/LANG}}}\n").unwrap();
    fs::write(root.join("notes.md"), "{{{LANG}}}md{{{/LANG}}}\n").unwrap();

    let files = FileSet::new(root, &BuilderConfig::default()).unwrap();
    resolve_tag(&files, &Tag::new("LANG"), Decision::Negative, Polarity::Normal).unwrap();

    let read = |relative: &str| fs::read_to_string(Path::new(root).join(relative)).unwrap();
    assert_eq!(read("functions.php"), "php\n");
    assert_eq!(read("css/styles.css"), "css\n");
    assert_eq!(read("notes.md"), "{{{LANG}}}md{{{/LANG}}}\n");
}

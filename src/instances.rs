//! Repeatable file generation.
//!
//! A prototype file is cloned once per requested instance, each clone gets
//! its own identifier substituted in, and the include marker is replaced by
//! one directive per generated file.

use log::debug;
use minijinja::{context, Environment};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::answer::{Identifier, Rule};
use crate::constants::tokens;
use crate::error::{Error, Result};
use crate::project::Project;
use crate::prompt::{Asker, Question};
use crate::replace::{apply_replacement, ReplacementRule};

static COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("count pattern is valid"));

/// A generated post type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostTypeSpec {
    pub name: Identifier,
    /// Root-relative path of the generated file
    pub generated_path: PathBuf,
}

/// Reads the leading integer of `raw`.
///
/// Anything without leading digits, and negative numbers, count as zero.
pub fn parse_count(raw: &str) -> usize {
    COUNT_REGEX
        .captures(raw)
        .filter(|captures| &captures[1] != "-")
        .and_then(|captures| captures[2].parse().ok())
        .unwrap_or(0)
}

/// Path of the file generated for `name`, next to the prototype.
pub fn instance_path(prototype: &Path, file_suffix: &str, name: &Identifier) -> PathBuf {
    let dir = prototype.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}{}", name.slug(), file_suffix))
}

/// Renders one include directive per path, newline separated, in order.
pub fn include_block(template: &str, paths: &[PathBuf]) -> Result<String> {
    let env = Environment::new();
    let mut block = String::new();

    for (index, path) in paths.iter().enumerate() {
        let directive = env.render_str(
            template,
            context! { path => to_slash(path), index => index + 1 },
        )?;
        if index > 0 {
            block.push('\n');
        }
        block.push_str(&directive);
    }
    Ok(block)
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Asks how many instances of `prototype` are needed and generates them.
///
/// A count of zero leaves the tree untouched. Otherwise the prototype is
/// deleted once every instance exists, and `include_marker` is replaced with
/// the include directives.
///
/// # Returns
/// * The generated post types in creation order
pub fn generate_instances(
    project: &Project,
    asker: &mut Asker<'_>,
    prototype: &Path,
    include_marker: &str,
) -> Result<Vec<PostTypeSpec>> {
    let post_types = &project.config().post_types;
    let raw = asker.read_raw(&Question::new("How many custom post types do you need?", Rule::Any))?;
    let count = parse_count(&raw);
    if count == 0 {
        debug!("No post types requested for {raw:?}");
        return Ok(Vec::new());
    }

    let source = project.path(prototype);
    let mut generated: Vec<PostTypeSpec> = Vec::new();

    for index in 1..=count {
        let question =
            Question::new(format!("What should the post type {index} be named?"), Rule::Identifier);
        let (name, generated_path) = loop {
            let name = asker.ask_identifier(&question)?;
            let path = instance_path(prototype, &post_types.file_suffix, &name);
            if generated.iter().any(|spec| spec.generated_path == path) {
                asker.notify_retry("Post type name already used");
                continue;
            }
            break (name, path);
        };

        project.files().interrupt().check()?;
        let target = project.path(&generated_path);
        fs::copy(&source, &target).map_err(Error::file(&target))?;

        let files = project.files();
        apply_replacement(
            files,
            &ReplacementRule::literal(tokens::POST_TYPE_NAME, name.as_str()),
            Some(prototype),
        )?;
        apply_replacement(
            files,
            &ReplacementRule::literal(tokens::POST_TYPE_NAME_CAPITALIZE, name.capitalized()),
            Some(prototype),
        )?;
        println!("\nCreated {}", generated_path.display());

        generated.push(PostTypeSpec { name, generated_path });
    }

    project.files().interrupt().check()?;
    fs::remove_file(&source).map_err(Error::file(&source))?;

    let paths: Vec<PathBuf> = generated.iter().map(|spec| spec.generated_path.clone()).collect();
    let block = include_block(&post_types.include_template, &paths)?;
    apply_replacement(project.files(), &ReplacementRule::literal(include_marker, block), None)?;

    Ok(generated)
}

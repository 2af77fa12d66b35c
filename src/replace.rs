//! Find and replace across the project tree.

use globset::{GlobBuilder, GlobMatcher};
use log::debug;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::BuilderConfig;
use crate::error::{Error, Result};
use crate::interrupt::Interrupt;

/// What a replacement rule looks for.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact substring
    Literal(String),
    /// Compiled regular expression, every match is replaced
    Regex(Regex),
}

/// A single find and replace operation.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub pattern: Pattern,
    /// Plain text, an empty replacement deletes the matches
    pub replacement: String,
}

impl ReplacementRule {
    pub fn literal<S: Into<String>, R: Into<String>>(original: S, replacement: R) -> Self {
        Self { pattern: Pattern::Literal(original.into()), replacement: replacement.into() }
    }

    pub fn regex<R: Into<String>>(pattern: Regex, replacement: R) -> Self {
        Self { pattern: Pattern::Regex(pattern), replacement: replacement.into() }
    }

    /// Applies the rule to `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Pattern::Literal(original) if original.is_empty() => Cow::Borrowed(text),
            Pattern::Literal(original) => Cow::Owned(text.replace(original, &self.replacement)),
            Pattern::Regex(regex) => regex.replace_all(text, regex::NoExpand(&self.replacement)),
        }
    }
}

/// The files eligible for substitution under a project root.
///
/// Membership is computed on every call to [`FileSet::files`], so files
/// created or deleted by earlier steps are always reflected.
#[derive(Debug, Clone)]
pub struct FileSet {
    root: PathBuf,
    matcher: GlobMatcher,
    exclude: Vec<String>,
    interrupt: Interrupt,
}

impl FileSet {
    /// Builds the file set from the allow-listed extensions and the exclusions of `config`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if no extension is configured
    /// * `Error::GlobError` if an extension produces an invalid glob
    pub fn new<P: AsRef<Path>>(root: P, config: &BuilderConfig) -> Result<Self> {
        if config.extensions.is_empty() {
            return Err(Error::ConfigError("at least one file extension is required".into()));
        }
        let glob = format!("**/*.{{{}}}", config.extensions.join(","));
        let matcher = GlobBuilder::new(&glob).literal_separator(true).build()?.compile_matcher();

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            matcher,
            exclude: config.exclude.iter().map(|e| e.to_lowercase()).collect(),
            interrupt: Interrupt::new(),
        })
    }

    /// Stops rewriting files once `interrupt` is raised.
    pub fn with_interrupt(mut self, interrupt: &Interrupt) -> Self {
        self.interrupt = interrupt.clone();
        self
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a root-relative path belongs to the set.
    pub fn contains<P: AsRef<Path>>(&self, relative: P) -> bool {
        let relative = relative.as_ref();
        let lowered = relative.to_string_lossy().to_lowercase();
        self.matcher.is_match(relative) && !self.exclude.iter().any(|e| lowered.contains(e))
    }

    /// Lists the member files as root-relative paths, in a stable order.
    ///
    /// # Arguments
    /// * `skip` - A file left out of the listing, root-relative or absolute
    pub fn files(&self, skip: Option<&Path>) -> Result<Vec<PathBuf>> {
        let skip = skip.map(|path| self.relative(path));
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
        for entry in walker {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = self.relative(entry.path());
            if skip.as_deref() == Some(relative.as_path()) {
                debug!("Skipping {}", relative.display());
                continue;
            }
            if self.contains(&relative) {
                files.push(relative);
            }
        }
        Ok(files)
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map(|name| name.starts_with('.')).unwrap_or(false)
}

/// Applies `rule` to every file of `files` except `skip`.
///
/// Every visited file is rewritten, even when nothing matched, and always
/// ends with a newline afterwards.
///
/// # Returns
/// * The root-relative paths of the rewritten files
///
/// # Errors
/// * `Error::FileError` for the first file that cannot be read or written
/// * `Error::Interrupted` before the next file once the interrupt is raised
pub fn apply_replacement(
    files: &FileSet,
    rule: &ReplacementRule,
    skip: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    debug!("Applying {:?}", rule.pattern);
    let targets = files.files(skip)?;

    for relative in &targets {
        files.interrupt().check()?;
        let path = files.root().join(relative);
        let text = fs::read_to_string(&path).map_err(Error::file(&path))?;
        let mut replaced = rule.apply(&text).into_owned();
        if !replaced.ends_with('\n') {
            replaced.push('\n');
        }
        fs::write(&path, replaced).map_err(Error::file(&path))?;
        println!("Updating {}", relative.display());
    }
    Ok(targets)
}

//! The template project being customized.

use std::path::{Path, PathBuf};

use crate::config::{load_config, BuilderConfig};
use crate::error::{Error, Result};
use crate::interrupt::Interrupt;
use crate::replace::FileSet;

/// A project root together with its builder configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: BuilderConfig,
    manifest: Option<PathBuf>,
    files: FileSet,
}

impl Project {
    /// Opens `root`, loading its builder manifest when it has one.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `root` is not a directory or the manifest is invalid
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::ConfigError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }
        let (config, manifest) = load_config(root)?;
        Self::with_config(root, config, manifest)
    }

    /// Builds a project from an explicit configuration.
    pub fn with_config<P: AsRef<Path>>(
        root: P,
        config: BuilderConfig,
        manifest: Option<PathBuf>,
    ) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let files = FileSet::new(&root, &config)?;
        Ok(Self { root, config, manifest, files })
    }

    /// Makes every file operation on this project stop once `interrupt` is raised.
    pub fn with_interrupt(mut self, interrupt: &Interrupt) -> Self {
        self.files = self.files.with_interrupt(interrupt);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The builder manifest this project was configured from, if any.
    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// Absolute form of a root-relative path.
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }
}

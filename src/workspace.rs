//! Restores the project tree to its last committed state.

use git2::{ObjectType, Repository, ResetType, StatusOptions};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Discards every change made to the project tree.
pub trait WorkspaceReset {
    fn reset(&self) -> Result<()>;
}

/// Resets a git work tree: hard reset to `HEAD`, then removal of untracked files.
#[derive(Debug, Clone)]
pub struct GitWorkspace {
    root: PathBuf,
}

impl GitWorkspace {
    /// Opens the work tree containing `root`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `root` is not inside a git work tree with at least one commit
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let repo = Repository::discover(root).map_err(|e| {
            Error::ConfigError(format!(
                "'{}' must be inside a git repository so answers can be reset: {}",
                root.display(),
                e.message()
            ))
        })?;
        if repo.workdir().is_none() || repo.head().is_err() {
            return Err(Error::ConfigError(format!(
                "the repository of '{}' needs a work tree and a commit to reset to",
                root.display()
            )));
        }
        Ok(Self { root: root.to_path_buf() })
    }
}

impl WorkspaceReset for GitWorkspace {
    fn reset(&self) -> Result<()> {
        let repo = Repository::discover(&self.root)?;
        let head = repo.head()?.peel(ObjectType::Commit)?;
        repo.reset(&head, ResetType::Hard, None)?;
        debug!("Reset work tree to {}", head.id());

        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::ConfigError("repository has no work tree".into()))?;

        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false).recurse_untracked_dirs(false);
        let untracked: Vec<PathBuf> = repo
            .statuses(Some(&mut options))?
            .iter()
            .filter(|entry| entry.status().is_wt_new())
            .filter_map(|entry| entry.path().map(str::to_owned))
            // untracked directories are reported with a trailing slash and left alone
            .filter(|path| !path.ends_with('/'))
            .map(|path| workdir.join(path))
            .collect();

        for path in untracked {
            debug!("Removing untracked {}", path.display());
            fs::remove_file(&path).map_err(Error::file(&path))?;
        }
        Ok(())
    }
}

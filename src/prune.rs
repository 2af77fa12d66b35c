//! Removal of optional files and directories.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::answer::Decision;
use crate::error::{Error, Result};
use crate::style::{paint, Style};

/// Deletes `path` (relative to `root`) on a negative decision, recursively for
/// directories. An affirmative decision leaves the tree untouched.
///
/// # Errors
/// * `Error::MissingPath` if a deletion is requested for a path that does not exist
/// * `Error::FileError` if the deletion fails
pub fn prune_or_keep<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    path: Q,
    decision: Decision,
) -> Result<()> {
    let relative = path.as_ref();
    let target = root.as_ref().join(relative);

    match decision {
        Decision::Affirmative => {
            debug!("Keeping {}", target.display());
            println!("\n{}", paint(format!("{} kept", relative.display()), Style::Info));
        }
        Decision::Negative => {
            let metadata = fs::symlink_metadata(&target).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::MissingPath { path: target.clone() },
                _ => Error::FileError { path: target.clone(), source: e },
            })?;
            if metadata.is_dir() {
                fs::remove_dir_all(&target).map_err(Error::file(&target))?;
            } else {
                fs::remove_file(&target).map_err(Error::file(&target))?;
            }
            println!("\n{}", paint(format!("{} deleted", relative.display()), Style::Error));
        }
    }
    Ok(())
}

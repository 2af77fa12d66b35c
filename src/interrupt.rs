//! Cancellation of a builder run.
//!
//! An interrupt discards everything the run changed: the current step stops
//! before its next write, the work tree is reset and the process exits.

use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::style::{paint, Style};
use crate::workspace::WorkspaceReset;

/// Exit status of an interrupted run
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Shared cancellation flag, checked between prompts and steps.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Fails with `Error::Interrupted` once the flag is raised.
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Routes SIGINT to a watcher thread that raises `interrupt`.
///
/// The watcher never touches the work tree. The main thread notices the flag
/// before its next file operation or prompt, fails with `Error::Interrupted`
/// and resets the workspace through [`abort_run`].
///
/// Must be called before any other thread is spawned so every thread inherits
/// the blocked signal mask.
#[cfg(unix)]
pub fn install(interrupt: &Interrupt) -> Result<()> {
    use nix::sys::signal::{SigSet, Signal};

    let mut signals = SigSet::empty();
    signals.add(Signal::SIGINT);
    signals.thread_block().map_err(|e| Error::IoError(e.into()))?;

    let interrupt = interrupt.clone();
    std::thread::spawn(move || {
        while signals.wait().is_ok() {
            warn!("Interrupt received");
            interrupt.raise();
        }
    });
    Ok(())
}

/// Without signal routing, Ctrl-C is only observed through interrupted reads.
#[cfg(not(unix))]
pub fn install(_interrupt: &Interrupt) -> Result<()> {
    Ok(())
}

/// Resets the workspace and terminates the process.
pub fn abort_run(workspace: &dyn WorkspaceReset) -> ! {
    println!("\n");
    if let Err(err) = workspace.reset() {
        warn!("Workspace reset failed: {err}");
        eprintln!("{}", paint(err, Style::Error));
    }
    eprintln!(
        "\n\n{}",
        paint("Theme generation exited and theme has been reset to its original state.", Style::Error)
    );
    std::process::exit(INTERRUPTED_EXIT_CODE);
}

//! theme-builder's main application entry point.
//! Opens the project, installs the interrupt handling and runs the questions.

use log::debug;
use theme_builder::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    flow::Flow,
    interrupt::{abort_run, install, Interrupt},
    logger::init_logger,
    project::Project,
    prompt::DialoguerPrompter,
    workspace::GitWorkspace,
};

const BANNER: &str = r"
  _____ _   _ _____ __  __ _____   ____  _   _ ___ _     ____  _____ ____
 |_   _| | | | ____|  \/  | ____| | __ )| | | |_ _| |   |  _ \| ____|  _ \
   | | | |_| |  _| | |\/| |  _|   |  _ \| | | || || |   | | | |  _| | |_) |
   | | |  _  | |___| |  | | |___  | |_) | |_| || || |___| |_| | |___|  _ <
   |_| |_| |_|_____|_|  |_|_____| |____/ \___/|___|_____|____/|_____|_| \_\
";

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Opens the project and its builder manifest
/// 2. Checks that the work tree can be reset
/// 3. Routes interrupts to a full workspace reset
/// 4. Asks the builder questions until the operator accepts the answers
fn run(args: Args) -> Result<()> {
    println!("{BANNER}");

    let interrupt = Interrupt::new();
    install(&interrupt)?;

    let project = Project::open(&args.root)?.with_interrupt(&interrupt);
    let workspace = GitWorkspace::open(project.root())?;

    let mut prompter = DialoguerPrompter::new();
    let mut flow = Flow::new(&project, &workspace, &mut prompter, &interrupt);

    match flow.run() {
        Ok(answers) => {
            if let Ok(json) = serde_json::to_string(&answers) {
                debug!("Accepted answers: {json}");
            }
            Ok(())
        }
        Err(Error::Interrupted) => abort_run(&workspace),
        Err(err) => Err(err),
    }
}

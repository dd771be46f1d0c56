//! Command execution.

mod generate;

pub use generate::{GenerateSummary, NEXT_STEPS, generate};

use crate::cli::{Args, OutputManager};
use crate::error::Result;
use crate::icons;

/// Execute a parsed command line, returning the process exit code.
pub fn execute_command(args: Args) -> Result<i32> {
    let locator = args.locator()?;
    log::debug!("Project root: {}", locator.root().display());

    let packager = icons::default_packager();
    let output = OutputManager::new();
    generate(&locator, packager.as_deref(), &output)?;
    Ok(0)
}

//! Command line argument parsing.
//!
//! The tool takes no arguments: every path follows from where the tool lives
//! in the source tree. A hidden `--root` lets tests point it at a scratch
//! project.

use crate::error::Result;
use crate::locator::Locator;
use clap::Parser;
use std::path::PathBuf;

/// Generate macOS and Windows application icons from the project logo
#[derive(Parser, Debug, Default)]
#[command(
    name = "clash_chain_icons",
    version,
    about = "Generate macOS and Windows application icons from the project logo",
    long_about = "Converts logo/clash-chain-patcher.png into logo/AppIcon.icns (macOS only, \
via iconutil; other hosts keep logo/AppIcon.iconset/) and logo/app.ico.

The project root is the directory above the tool's src/ directory."
)]
pub struct Args {
    /// Project root containing logo/
    #[arg(long, value_name = "DIR", env = "CLASH_ICONS_ROOT", hide = true, hide_env = true)]
    pub root: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the project layout for this run
    pub fn locator(&self) -> Result<Locator> {
        match &self.root {
            Some(root) => Locator::new(root),
            None => Locator::from_tool_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_valid() {
        assert!(Args::try_parse_from(["clash_chain_icons"]).is_ok());
    }

    #[test]
    fn test_no_arguments_resolves_crate_root() {
        let args = Args {
            root: None,
        };
        let locator = args.locator().unwrap();
        assert_eq!(locator.root(), std::path::Path::new(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_root_override() {
        let args = Args::try_parse_from(["clash_chain_icons", "--root", "/work/project"]).unwrap();
        let locator = args.locator().unwrap();
        assert_eq!(locator.root(), std::path::Path::new("/work/project"));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["clash_chain_icons", "logo.png"]).is_err());
    }
}

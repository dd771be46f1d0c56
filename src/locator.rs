//! Fixed path conventions of the project.
//!
//! All inputs and outputs hang off the project root:
//!
//! | Path | Role |
//! |------|------|
//! | `logo/clash-chain-patcher.png` | source logo (must exist) |
//! | `logo/AppIcon.icns` | macOS icon container |
//! | `logo/AppIcon.iconset/` | macOS staging directory |
//! | `logo/app.ico` | Windows icon file |

use crate::error::{ErrorExt, IconError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Directory under the project root holding the logo and generated icons
pub const LOGO_DIR: &str = "logo";

/// File name of the source logo
pub const SOURCE_FILE_NAME: &str = "clash-chain-patcher.png";

/// File name of the macOS icon container
pub const ICNS_FILE_NAME: &str = "AppIcon.icns";

/// File name of the Windows icon file
pub const ICO_FILE_NAME: &str = "app.ico";

/// Directory holding the tool's sources.
pub fn tool_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Resolves the project layout from the tool's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    root: PathBuf,
}

impl Locator {
    /// Use `root` as the project root.
    ///
    /// Relative roots are made absolute against the current directory so
    /// reported paths are unambiguous.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .absolutize()
            .fs_context("resolving project root", root)?
            .into_owned();
        Ok(Self { root })
    }

    /// The project root is one directory above the tool's install directory.
    pub fn from_install_dir(install_dir: &Path) -> Result<Self> {
        let root = install_dir.parent().ok_or_else(|| IconError::InstallDir {
            reason: format!("{} has no parent directory", install_dir.display()),
        })?;
        Self::new(root)
    }

    /// Derive the layout from where the tool lives in the source tree.
    ///
    /// The tool's directory is `src/` of this crate, so the project root is
    /// the crate root whatever `target/` directory the binary was built into.
    pub fn from_tool_dir() -> Result<Self> {
        let tool_dir = tool_dir();
        log::debug!("Tool directory: {}", tool_dir.display());
        Self::from_install_dir(&tool_dir)
    }

    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/logo`
    pub fn logo_dir(&self) -> PathBuf {
        self.root.join(LOGO_DIR)
    }

    /// Expected location of the source logo
    pub fn source_path(&self) -> PathBuf {
        self.logo_dir().join(SOURCE_FILE_NAME)
    }

    /// Destination of the macOS icon container
    pub fn icns_path(&self) -> PathBuf {
        self.logo_dir().join(ICNS_FILE_NAME)
    }

    /// Destination of the Windows icon file
    pub fn ico_path(&self) -> PathBuf {
        self.logo_dir().join(ICO_FILE_NAME)
    }

    /// Return the source logo path, failing if the file does not exist.
    pub fn locate_source(&self) -> Result<PathBuf> {
        let path = self.source_path();
        if !path.is_file() {
            return Err(IconError::SourceNotFound { path });
        }
        log::debug!("Found source logo at {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let locator = Locator::new("/work/project").unwrap();
        assert_eq!(
            locator.source_path(),
            PathBuf::from("/work/project/logo/clash-chain-patcher.png")
        );
        assert_eq!(
            locator.icns_path(),
            PathBuf::from("/work/project/logo/AppIcon.icns")
        );
        assert_eq!(locator.ico_path(), PathBuf::from("/work/project/logo/app.ico"));
    }

    #[test]
    fn test_root_is_parent_of_install_dir() {
        let locator = Locator::from_install_dir(Path::new("/work/project/scripts")).unwrap();
        assert_eq!(locator.root(), Path::new("/work/project"));
    }

    #[test]
    fn test_default_root_is_crate_root() {
        let locator = Locator::from_tool_dir().unwrap();
        assert_eq!(locator.root(), Path::new(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(
            locator.source_path(),
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("logo")
                .join("clash-chain-patcher.png")
        );
    }

    #[test]
    fn test_relative_root_is_absolutized() {
        let locator = Locator::new("some/project").unwrap();
        assert!(locator.root().is_absolute());
        assert!(locator.root().ends_with("some/project"));
    }

    #[test]
    fn test_missing_source_reports_attempted_path() {
        let dir = tempfile::tempdir().unwrap();
        let locator = Locator::new(dir.path()).unwrap();
        match locator.locate_source() {
            Err(IconError::SourceNotFound { path }) => {
                assert_eq!(path, dir.path().join("logo").join(SOURCE_FILE_NAME));
            }
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_source_is_located() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(LOGO_DIR)).unwrap();
        std::fs::write(dir.path().join(LOGO_DIR).join(SOURCE_FILE_NAME), b"png").unwrap();
        let locator = Locator::new(dir.path()).unwrap();
        assert_eq!(locator.locate_source().unwrap(), locator.source_path());
    }
}

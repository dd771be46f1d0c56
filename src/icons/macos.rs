//! ICNS icon creation for macOS applications.
//!
//! Frames are written as an `.iconset` directory and sealed into an `.icns`
//! by Apple's `iconutil`, which only exists on macOS. On every other host the
//! iconset is left on disk so it can be packaged on a Mac later.

use super::SourceImage;
use crate::error::{ErrorExt, IconError, Result};
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Edge length and iconset slot name for every frame of the bundle.
pub const ICONSET_TARGETS: [(u32, &str); 10] = [
    (16, "16x16"),
    (32, "16x16@2x"),
    (32, "32x32"),
    (64, "32x32@2x"),
    (128, "128x128"),
    (256, "128x128@2x"),
    (256, "256x256"),
    (512, "256x256@2x"),
    (512, "512x512"),
    (1024, "512x512@2x"),
];

/// One PNG written into the iconset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFrame {
    /// Edge length in pixels
    pub size: u32,
    /// Slot label, e.g. `32x32@2x`
    pub label: &'static str,
    /// File written
    pub path: PathBuf,
}

impl StagedFrame {
    /// File name for a slot label
    pub fn file_name(label: &str) -> String {
        format!("icon_{label}.png")
    }
}

/// What happened to the iconset after staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagingOutcome {
    /// `.icns` written and the iconset removed.
    Packaged {
        /// Sealed container
        icns: PathBuf,
    },
    /// The packager ran and failed; the iconset is kept for inspection.
    Failed {
        /// Text the packager printed
        diagnostic: String,
        /// Preserved staging directory
        iconset: PathBuf,
    },
    /// Host cannot package; the iconset is kept.
    Unsupported {
        /// Preserved staging directory
        iconset: PathBuf,
    },
}

/// Result of [`build_icns`].
#[derive(Debug, Clone)]
pub struct IconsetReport {
    /// Frames in the order they were written
    pub frames: Vec<StagedFrame>,
    /// Packaging result
    pub outcome: PackagingOutcome,
}

/// Turns an iconset directory into an `.icns` file.
pub trait IconPackager {
    /// Human readable name for progress output
    fn name(&self) -> &str;

    /// Whether the packaging program can be found
    fn is_available(&self) -> bool;

    /// Package `iconset` into `output`.
    ///
    /// `Err` carries the diagnostic text to show the user.
    fn package(&self, iconset: &Path, output: &Path) -> std::result::Result<(), String>;
}

/// Runs `iconutil -c icns <iconset> -o <output>`.
#[derive(Debug, Clone)]
pub struct IconutilPackager {
    program: PathBuf,
}

impl IconutilPackager {
    /// Packager using the given `iconutil` binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate `iconutil` on `PATH`, falling back to the bare name.
    pub fn discover() -> Self {
        match which::which("iconutil") {
            Ok(path) => {
                log::debug!("Found iconutil at: {}", path.display());
                Self::new(path)
            }
            Err(e) => {
                log::debug!("iconutil not found in PATH: {}", e);
                Self::new("iconutil")
            }
        }
    }
}

impl IconPackager for IconutilPackager {
    fn name(&self) -> &str {
        "iconutil"
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn package(&self, iconset: &Path, output: &Path) -> std::result::Result<(), String> {
        log::debug!(
            "Running {} -c icns {} -o {}",
            self.program.display(),
            iconset.display(),
            output.display()
        );

        let result = Command::new(&self.program)
            .arg("-c")
            .arg("icns")
            .arg(iconset)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|e| format!("failed to run {}: {}", self.program.display(), e))?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        let stdout = String::from_utf8_lossy(&result.stdout);
        let text = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        Err(if text.is_empty() {
            format!("iconutil exited with {}", result.status)
        } else {
            text.to_string()
        })
    }
}

/// Packager for the current host, `None` where `.icns` cannot be produced.
pub fn default_packager() -> Option<Box<dyn IconPackager>> {
    if cfg!(target_os = "macos") {
        Some(Box::new(IconutilPackager::discover()))
    } else {
        None
    }
}

/// Staging directory beside the destination: `AppIcon.icns` -> `AppIcon.iconset`.
pub fn iconset_dir_for(icns: &Path) -> PathBuf {
    icns.with_extension("iconset")
}

/// Write every iconset frame for `source` and package them into `output`.
///
/// Staging failures are fatal. A failing packager is not: its diagnostic is
/// returned in [`PackagingOutcome::Failed`] and the iconset stays on disk.
pub fn build_icns(
    source: &SourceImage,
    output: &Path,
    packager: Option<&dyn IconPackager>,
) -> Result<IconsetReport> {
    let iconset = iconset_dir_for(output);
    let frames = write_iconset(source, &iconset)?;

    let outcome = match packager {
        Some(packager) => match packager.package(&iconset, output) {
            Ok(()) => {
                fs::remove_dir_all(&iconset).fs_context("removing iconset", &iconset)?;
                log::info!("Created ICNS file: {}", output.display());
                PackagingOutcome::Packaged {
                    icns: output.to_path_buf(),
                }
            }
            Err(diagnostic) => {
                log::warn!("{} failed: {}", packager.name(), diagnostic);
                PackagingOutcome::Failed {
                    diagnostic,
                    iconset,
                }
            }
        },
        None => {
            log::info!("Skipping ICNS packaging on this host");
            PackagingOutcome::Unsupported { iconset }
        }
    };

    Ok(IconsetReport { frames, outcome })
}

/// Resize `source` into each slot and save the PNGs into `iconset`.
pub fn write_iconset(source: &SourceImage, iconset: &Path) -> Result<Vec<StagedFrame>> {
    fs::create_dir_all(iconset).fs_context("creating iconset directory", iconset)?;

    let mut frames = Vec::with_capacity(ICONSET_TARGETS.len());
    for (size, label) in ICONSET_TARGETS {
        let path = iconset.join(StagedFrame::file_name(label));
        log::debug!("Adding {} ({}x{}) from {}", label, size, size, source.path().display());

        source
            .resize_square(size)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Image {
                context: "writing iconset frame",
                path: path.clone(),
                source,
            })?;

        frames.push(StagedFrame { size, label, path });
    }

    Ok(frames)
}

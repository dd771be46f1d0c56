//! ICO icon file creation for Windows applications.
//!
//! Generates standard Windows icon sizes used in various contexts:
//! - 16x16: Small icons (window title bars)
//! - 24x24: Small toolbar icons
//! - 32x32: Standard icons (Windows Explorer)
//! - 48x48: Large icons (Windows Explorer large view)
//! - 64x64, 128x128: Extra large icons
//! - 256x256: Windows Vista+ high-res icons (the ICO maximum)

use super::SourceImage;
use crate::error::{ErrorExt, IconError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Frame sizes embedded in the ICO, in write order.
pub const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Result of [`build_ico`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoReport {
    /// File written
    pub path: PathBuf,
    /// Embedded frame sizes
    pub sizes: Vec<u32>,
    /// Size of the file on disk
    pub bytes: u64,
}

impl IcoReport {
    /// File size in KiB for display
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Resize `source` to every [`ICO_SIZES`] entry and write them as one ICO.
pub fn build_ico(source: &SourceImage, output: &Path) -> Result<IcoReport> {
    let frames: Vec<IconImage> = ICO_SIZES
        .iter()
        .map(|&size| {
            log::debug!("Prepared {}x{} from {}", size, size, source.path().display());
            IconImage::from_rgba_data(size, size, source.resize_square(size).into_raw())
        })
        .collect();

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for frame in &frames {
        let size = frame.width();
        let entry =
            IconDirEntry::encode(frame).map_err(|source| IconError::IcoFrame { size, source })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(output).fs_context("creating ICO output file", output)?;
    let mut writer = BufWriter::new(file);
    icon_dir
        .write(&mut writer)
        .fs_context("writing ICO data", output)?;
    writer.flush().fs_context("writing ICO data", output)?;

    let bytes = std::fs::metadata(output)
        .fs_context("reading ICO metadata", output)?
        .len();

    log::info!("Created ICO file: {}", output.display());
    Ok(IcoReport {
        path: output.to_path_buf(),
        sizes: icon_dir.entries().iter().map(IconDirEntry::width).collect(),
        bytes,
    })
}

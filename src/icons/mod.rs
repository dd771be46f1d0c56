//! Icon generation from a single source logo.
//!
//! Both builders share the same front half: decode the logo, normalize it to
//! 8-bit RGBA and resize the full image to exact squares with Lanczos3.
//!
//! | Platform | Output | Frames |
//! |----------|--------|--------|
//! | macOS | `AppIcon.icns` via `AppIcon.iconset/` | 16, 32, 64, 128, 256, 512, 1024 (ten slots) |
//! | Windows | `app.ico` | 16, 24, 32, 48, 64, 128, 256 |

pub mod macos;
pub mod windows;

pub use macos::{
    IconPackager, IconsetReport, PackagingOutcome, build_icns, default_packager,
};
pub use windows::{ICO_SIZES, IcoReport, build_ico};

use crate::error::{IconError, Result};
use image::{DynamicImage, ImageFormat, RgbaImage, imageops::FilterType};
use std::path::{Path, PathBuf};

/// Resampling filter used for every frame.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Source logo decoded and normalized to RGBA8.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    pixels: DynamicImage,
}

impl SourceImage {
    /// Decode `path` and convert it to RGBA8 if it has any other layout.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| IconError::Image {
            context: "loading source image",
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded {}x{} {:?} from {}",
            decoded.width(),
            decoded.height(),
            decoded.color(),
            path.display()
        );

        Ok(Self::from_image(path, decoded))
    }

    /// Wrap an already decoded image.
    pub fn from_image(path: &Path, image: DynamicImage) -> Self {
        let pixels = match image {
            rgba @ DynamicImage::ImageRgba8(_) => rgba,
            other => {
                log::debug!("Converting {:?} to Rgba8", other.color());
                DynamicImage::ImageRgba8(other.to_rgba8())
            }
        };
        Self {
            path: path.to_path_buf(),
            pixels,
        }
    }

    /// File the image was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width and height of the source
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }

    /// Resize the full image to an `edge` x `edge` square.
    ///
    /// Non-square sources are stretched, not cropped.
    pub fn resize_square(&self, edge: u32) -> RgbaImage {
        self.pixels.resize_exact(edge, edge, RESIZE_FILTER).to_rgba8()
    }
}

/// Confirm the PNG codec can both decode and encode.
///
/// The codec is a compile-time feature of `image`, so this only guards
/// against a build without it.
pub fn ensure_png_codec() -> Result<()> {
    let png = ImageFormat::Png;
    if !png.reading_enabled() || !png.writing_enabled() {
        return Err(IconError::CodecUnavailable("PNG"));
    }
    log::debug!("PNG codec available for reading and writing");
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use std::path::{Path, PathBuf};

    /// Gradient logo with a transparent border.
    pub fn rgba_logo(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let border = x < 4 || y < 4 || x >= width - 4 || y >= height - 4;
            let alpha = if border { 0 } else { 255 };
            Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 200, alpha])
        })
    }

    /// Opaque RGB logo without an alpha channel.
    pub fn rgb_logo(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 90])
        })
    }

    /// Write `image` as PNG into `dir` and return its path.
    pub fn write_png(dir: &Path, name: &str, image: DynamicImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }
}

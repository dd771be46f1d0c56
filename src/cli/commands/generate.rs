//! The icon generation pipeline.
//!
//! locate source -> preflight -> macOS iconset/icns -> Windows ico -> checklist

use crate::cli::OutputManager;
use crate::error::{ErrorExt, Result};
use crate::icons::{
    self, IcoReport, IconPackager, IconsetReport, PackagingOutcome, SourceImage,
};
use crate::locator::Locator;

/// Manual follow-up steps printed after a successful run
pub const NEXT_STEPS: [&str; 3] = [
    "macOS: The .icns will be bundled automatically with app bundle",
    "Windows: Add build.rs to embed .ico in executable",
    "GUI: Logo image can be embedded using makepad's image widget",
];

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// macOS builder result
    pub icns: IconsetReport,
    /// Windows builder result
    pub ico: IcoReport,
}

/// Run the whole pipeline against `locator`'s layout.
///
/// `packager` is `None` on hosts that cannot produce `.icns`.
pub fn generate(
    locator: &Locator,
    packager: Option<&dyn IconPackager>,
    output: &OutputManager,
) -> Result<GenerateSummary> {
    let source_path = locator.locate_source()?;
    let source_bytes = std::fs::metadata(&source_path)
        .fs_context("reading source metadata", &source_path)?
        .len();

    output.info(&format!("Source: {}", source_path.display()));
    output.info(&format!("Size: {:.1} KB", source_bytes as f64 / 1024.0));

    preflight(packager, output)?;

    output.section("Generating macOS .icns");
    let source = SourceImage::open(&source_path)?;
    let (width, height) = source.dimensions();
    log::debug!("Source dimensions: {}x{}", width, height);
    let icns = icons::build_icns(&source, &locator.icns_path(), packager)?;
    report_icns(&icns, output);

    output.section("Generating Windows .ico");
    let source = SourceImage::open(&source_path)?;
    let ico = icons::build_ico(&source, &locator.ico_path())?;
    report_ico(&ico, output);

    output.println("");
    output.success("Done!");
    output.println("");
    output.println("Next steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        output.indent(&format!("{}. {}", i + 1, step));
    }

    Ok(GenerateSummary { icns, ico })
}

fn preflight(packager: Option<&dyn IconPackager>, output: &OutputManager) -> Result<()> {
    icons::ensure_png_codec()?;
    output.progress("PNG codec available");

    match packager {
        Some(packager) if packager.is_available() => {
            output.progress(&format!("{} available", packager.name()))
        }
        Some(packager) => output.warn(&format!(
            "{} not found on PATH; .icns packaging will likely fail",
            packager.name()
        )),
        None => log::debug!("No icon packager for this host"),
    }

    Ok(())
}

fn report_icns(report: &IconsetReport, output: &OutputManager) {
    for frame in &report.frames {
        output.indent(&format!(
            "Created {} ({}x{})",
            frame.path.file_name().unwrap_or_default().to_string_lossy(),
            frame.size,
            frame.size
        ));
    }

    match &report.outcome {
        PackagingOutcome::Packaged { icns } => {
            output.success(&format!("Created {}", icns.display()));
        }
        PackagingOutcome::Failed {
            diagnostic,
            iconset,
        } => {
            output.warn(&format!("Error: {}", diagnostic));
            output.indent(&format!("Iconset kept at: {}", iconset.display()));
        }
        PackagingOutcome::Unsupported { iconset } => {
            output.warn("Note: .icns can only be generated on macOS");
            output.indent(&format!("Iconset created at: {}", iconset.display()));
        }
    }
}

fn report_ico(report: &IcoReport, output: &OutputManager) {
    for size in &report.sizes {
        output.indent(&format!("Prepared {}x{}", size, size));
    }
    output.success(&format!(
        "Created {} ({:.1} KB)",
        report.path.display(),
        report.kilobytes()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::locator::{LOGO_DIR, SOURCE_FILE_NAME};
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    struct FailingPackager;

    impl IconPackager for FailingPackager {
        fn name(&self) -> &str {
            "failing-packager"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn package(&self, _iconset: &Path, _output: &Path) -> std::result::Result<(), String> {
            Err("Failed to generate ICNS.".to_string())
        }
    }

    fn project_with_logo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(LOGO_DIR)).unwrap();
        RgbaImage::from_pixel(300, 300, Rgba([10, 120, 220, 255]))
            .save(dir.path().join(LOGO_DIR).join(SOURCE_FILE_NAME))
            .unwrap();
        dir
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let locator = Locator::new(dir.path()).unwrap();

        let err = generate(&locator, None, &OutputManager::new()).unwrap_err();
        assert!(matches!(err, IconError::SourceNotFound { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_packaging_failure_is_not_fatal() {
        let dir = project_with_logo();
        let locator = Locator::new(dir.path()).unwrap();

        let summary = generate(&locator, Some(&FailingPackager), &OutputManager::new()).unwrap();
        assert!(matches!(
            summary.icns.outcome,
            PackagingOutcome::Failed { .. }
        ));
        assert!(locator.ico_path().is_file());
        assert!(!locator.icns_path().exists());
    }

    #[test]
    fn test_full_run_without_packager() {
        let dir = project_with_logo();
        let locator = Locator::new(dir.path()).unwrap();

        let summary = generate(&locator, None, &OutputManager::new()).unwrap();
        assert_eq!(summary.icns.frames.len(), 10);
        assert_eq!(summary.ico.sizes, icons::ICO_SIZES.to_vec());
        assert!(dir.path().join("logo/AppIcon.iconset").is_dir());
    }
}

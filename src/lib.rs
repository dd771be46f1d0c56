//! # Clash Chain Icons
//!
//! Build-support tool that turns the Clash Chain Patcher logo into the
//! platform icon containers used when bundling the app.
//!
//! ## Outputs
//!
//! - `logo/AppIcon.icns`: ten-slot macOS icon, sealed with `iconutil` on macOS.
//!   Other hosts keep the `logo/AppIcon.iconset/` staging directory instead.
//! - `logo/app.ico`: Windows icon with 16, 24, 32, 48, 64, 128 and 256 px frames.
//!
//! ## Usage
//!
//! ```bash
//! clash_chain_icons   # reads and writes <crate root>/logo/
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod icons;
pub mod locator;

pub use error::{IconError, Result};

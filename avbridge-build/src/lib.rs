//! Shared build utilities for avbridge crates.
//!
//! This crate provides common functionality for:
//! - Locating an FFmpeg install (headers, libraries, source tree) from the environment
//! - Generating and compiling C reference code that reads header values back out
//! - Reading library versions from headers and checking them against the workspace pin
//!
//! # Usage
//!
//! In your `build.rs`:
//!
//! ```ignore
//! use avbridge_build::{CReference, FfmpegInstall};
//!
//! fn main() -> std::io::Result<()> {
//!     let install = FfmpegInstall::from_env();
//!     if let Some(include) = install.include_dir() {
//!         CReference::new("header_constants")
//!             .include_dir(include)
//!             .header("libavutil/error.h")
//!             .signed_constants("header_int_constant", &["AVERROR_EOF"])
//!             .compile()?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod ffmpeg;
mod reference;
mod version;

pub use ffmpeg::{ENV_FFMPEG_DIR, ENV_INCLUDE, ENV_LINK_SEARCH, ENV_SOURCE, FfmpegInstall};
pub use reference::CReference;
pub use version::{
    ENV_REPIN, LibVersion, PIN_KEY, PinCheck, VPCC_WITH_DATA_SINCE, check_pin, pinned_avutil,
    vpcc_takes_data,
};

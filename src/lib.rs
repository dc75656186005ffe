//! # avbridge
//!
//! The boundary layer between Rust, the parts of FFmpeg its public headers do
//! not expose, and the private corners of AVFoundation on tvOS.
//!
//! ## Features
//!
//! avbridge is modular. Enable only the pieces you need.
//!
//! - `error`: FFmpeg error-code translation and classification (default).
//! - `format`: `URLContext` layout mirror, channel layouts and option constants.
//! - `display`: `AVDisplayCriteria` construction and accessors.
//! - `capi`: export the error translator under its C symbol names.
//! - `link-internal`: link libavformat and expose the `ff_isom_write_*` helpers.
//!
//! Use the `full` feature to enable `error`, `format` and `display`.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! avbridge = { version = "0.1", features = ["format"] }
//! ```
//!
//! ```rust
//! use avbridge::error::{AVERROR_EAGAIN, AVERROR_EOF, AVERROR_INVALIDDATA, is_filter_end};
//!
//! assert!(is_filter_end(AVERROR_EOF));
//! assert!(is_filter_end(AVERROR_EAGAIN));
//! assert!(!is_filter_end(AVERROR_INVALIDDATA));
//! ```

#[cfg(feature = "error")]
pub use avbridge_error as error;

#[cfg(feature = "format")]
pub use avbridge_format as format;

#[cfg(feature = "display")]
pub use avbridge_display as display;

//! FFmpeg error-code translation.
//!
//! FFmpeg reports failures as negative `int`s. POSIX errors are returned as
//! `AVERROR(e) = -e`, and library specific conditions live in a reserved space
//! of negated four-character tags (`FFERRTAG`). This crate reproduces that
//! encoding bit-for-bit so callers on the other side of the boundary can switch
//! on the same values the native library produces.
//!
//! - [`code`]: the raw integer vocabulary (`const fn`s and constants).
//! - [`AvError`]: a typed view of a negative return for `?`-style propagation.
//!
//! ```
//! use avbridge_error::{convert_error, is_filter_end, AVERROR_EOF};
//!
//! let again = convert_error(libc::EAGAIN);
//! assert!(is_filter_end(again));
//! assert!(is_filter_end(AVERROR_EOF));
//! ```

#![warn(missing_docs)]

pub mod code;
mod error;

#[cfg(feature = "capi")]
pub mod capi;

pub use code::*;
pub use error::{AvError, HttpError, Result, check};

//! C symbols for callers that link against the translator directly.
//!
//! Names and signatures are those of the existing C helpers, so an existing
//! bridging header keeps working:
//!
//! ```c
//! int  AVERROR_CONVERT(int err);
//! int  AVUNERROR_CONVERT(int err);
//! bool IS_AVERROR_EOF(int err);
//! bool IS_AVERROR_EAGAIN(int err);
//! bool IS_AVERROR_INVALIDDATA(int err);
//! bool AVFILTER_EOF(int ret);
//! ```

#![allow(non_snake_case)]

use std::ffi::c_int;

use crate::code;

/// `AVERROR(err)`.
#[unsafe(no_mangle)]
pub extern "C" fn AVERROR_CONVERT(err: c_int) -> c_int {
    code::convert_error(err)
}

/// `AVUNERROR(err)`.
#[unsafe(no_mangle)]
pub extern "C" fn AVUNERROR_CONVERT(err: c_int) -> c_int {
    code::unconvert_error(err)
}

/// `err == AVERROR_EOF`.
#[unsafe(no_mangle)]
pub extern "C" fn IS_AVERROR_EOF(err: c_int) -> bool {
    code::is_eof(err)
}

/// `err == AVERROR(EAGAIN)`.
#[unsafe(no_mangle)]
pub extern "C" fn IS_AVERROR_EAGAIN(err: c_int) -> bool {
    code::is_eagain(err)
}

/// `err == AVERROR_INVALIDDATA`.
#[unsafe(no_mangle)]
pub extern "C" fn IS_AVERROR_INVALIDDATA(err: c_int) -> bool {
    code::is_invalid_data(err)
}

/// `ret == AVERROR(EAGAIN) || ret == AVERROR_EOF`.
#[unsafe(no_mangle)]
pub extern "C" fn AVFILTER_EOF(ret: c_int) -> bool {
    code::is_filter_end(ret)
}

//! Scalar constants from `libavutil/avutil.h` and `libavutil/opt.h`.

use std::ffi::c_int;

/// Undefined timestamp value (`INT64_C(0x8000000000000000)`).
pub const AV_NOPTS_VALUE: i64 = i64::MIN;

/// Internal time base in microseconds.
pub const AV_TIME_BASE: c_int = 1_000_000;

/// Search in possible children of the given object first.
pub const AV_OPT_SEARCH_CHILDREN: c_int = 1 << 0;

/// The object passed to `av_opt_find` is a fake `AVClass **` pointer.
pub const AV_OPT_SEARCH_FAKE_OBJ: c_int = 1 << 1;

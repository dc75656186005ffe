//! Codec configuration box writers.
//!
//! Thin wrappers over the `ff_isom_write_*` helpers: slice lengths are checked
//! before they are narrowed to `int`, and return codes go through
//! [`avbridge_error::check`].

use std::ffi::c_int;
#[cfg(vpcc_with_data)]
use std::ffi::c_void;
use std::ptr::NonNull;

use avbridge_error::{AvError, Result, check};

#[cfg(not(vpcc_with_data))]
use crate::AVFormatContext;
use crate::{AVCodecParameters, AVIOContext, ffi};

fn native_len(data: &[u8]) -> Result<c_int> {
    c_int::try_from(data.len()).map_err(|_| AvError::Errno(libc::EINVAL))
}

/// Write an `avcC` box.
///
/// # Safety
///
/// `pb` must be a live, writable `AVIOContext`.
///
/// # Errors
///
/// Any error the native writer reports, or `EINVAL` if `data` does not fit in an `int`.
pub unsafe fn write_avcc(pb: NonNull<AVIOContext>, data: &[u8]) -> Result<()> {
    let len = native_len(data)?;
    // SAFETY: `pb` is valid per the caller; `data` is valid for `len` bytes.
    check(unsafe { ffi::ff_isom_write_avcc(pb.as_ptr(), data.as_ptr(), len) }).map(drop)
}

/// Write an `hvcC` box. `ps_array_completeness` marks every parameter set array complete.
///
/// # Safety
///
/// `pb` must be a live, writable `AVIOContext`.
///
/// # Errors
///
/// Any error the native writer reports, or `EINVAL` if `data` does not fit in an `int`.
pub unsafe fn write_hvcc(
    pb: NonNull<AVIOContext>,
    data: &[u8],
    ps_array_completeness: bool,
) -> Result<()> {
    let size = native_len(data)?;
    // SAFETY: `pb` is valid per the caller; `data` is valid for `size` bytes.
    check(unsafe {
        ffi::ff_isom_write_hvcc(
            pb.as_ptr(),
            data.as_ptr(),
            size,
            c_int::from(ps_array_completeness),
        )
    })
    .map(drop)
}

/// Write an `av1C` box. `write_seq_header` appends the sequence header OBU.
///
/// # Safety
///
/// `pb` must be a live, writable `AVIOContext`.
///
/// # Errors
///
/// Any error the native writer reports, or `EINVAL` if `buf` does not fit in an `int`.
pub unsafe fn write_av1c(pb: NonNull<AVIOContext>, buf: &[u8], write_seq_header: bool) -> Result<()> {
    let size = native_len(buf)?;
    // SAFETY: `pb` is valid per the caller; `buf` is valid for `size` bytes.
    check(unsafe {
        ffi::ff_isom_write_av1c(pb.as_ptr(), buf.as_ptr(), size, c_int::from(write_seq_header))
    })
    .map(drop)
}

/// Write a `vpcC` box. `data` is a VP9 frame used to fill in what `par`
/// leaves unset; pass an empty slice to rely on `par` alone.
///
/// # Safety
///
/// `pb` must be a live, writable `AVIOContext` and `par` live codec
/// parameters. `logctx` is only used for logging and may be `None`.
///
/// # Errors
///
/// Any error the native writer reports, or `EINVAL` if `data` does not fit in an `int`.
#[cfg(vpcc_with_data)]
pub unsafe fn write_vpcc(
    logctx: Option<NonNull<c_void>>,
    pb: NonNull<AVIOContext>,
    data: &[u8],
    par: NonNull<AVCodecParameters>,
) -> Result<()> {
    let len = native_len(data)?;
    let logctx = logctx.map_or(std::ptr::null_mut(), NonNull::as_ptr);
    let data = if data.is_empty() {
        std::ptr::null()
    } else {
        data.as_ptr()
    };
    // SAFETY: forwarded to the caller; `data` is null or valid for `len` bytes.
    check(unsafe { ffi::ff_isom_write_vpcc(logctx, pb.as_ptr(), data, len, par.as_ptr()) })
        .map(drop)
}

/// Write a `vpcC` box.
///
/// # Safety
///
/// `pb` must be a live, writable `AVIOContext` and `par` live codec
/// parameters. `s` is only used for logging and may be `None`.
///
/// # Errors
///
/// Any error the native writer reports.
#[cfg(not(vpcc_with_data))]
pub unsafe fn write_vpcc(
    s: Option<NonNull<AVFormatContext>>,
    pb: NonNull<AVIOContext>,
    par: NonNull<AVCodecParameters>,
) -> Result<()> {
    let s = s.map_or(std::ptr::null_mut(), NonNull::as_ptr);
    // SAFETY: forwarded to the caller.
    check(unsafe { ffi::ff_isom_write_vpcc(s, pb.as_ptr(), par.as_ptr()) }).map(drop)
}

//! Internal libavformat symbols.
//!
//! These are not exported by FFmpeg's public headers; they resolve against a
//! static libavformat (or a shared one built with internal symbols visible).

#![allow(non_upper_case_globals)]

use std::ffi::c_int;
#[cfg(vpcc_with_data)]
use std::ffi::c_void;

#[cfg(not(vpcc_with_data))]
use crate::AVFormatContext;
use crate::{AVClass, AVCodecParameters, AVIOContext};

unsafe extern "C" {
    /// `AVClass` of every `URLContext`.
    pub static ffurl_context_class: AVClass;

    /// Write an `avcC` box from Annex B or avcC-formatted extradata.
    pub fn ff_isom_write_avcc(pb: *mut AVIOContext, data: *const u8, len: c_int) -> c_int;

    /// Write an `hvcC` box from HEVC extradata.
    pub fn ff_isom_write_hvcc(
        pb: *mut AVIOContext,
        data: *const u8,
        size: c_int,
        ps_array_completeness: c_int,
    ) -> c_int;

    /// Write an `av1C` box from an AV1 sequence header OBU.
    pub fn ff_isom_write_av1c(
        pb: *mut AVIOContext,
        buf: *const u8,
        size: c_int,
        write_seq_header: c_int,
    ) -> c_int;

    /// Write a `vpcC` box from stream parameters and optional VP9 frame data.
    #[cfg(vpcc_with_data)]
    pub fn ff_isom_write_vpcc(
        logctx: *mut c_void,
        pb: *mut AVIOContext,
        data: *const u8,
        len: c_int,
        par: *const AVCodecParameters,
    ) -> c_int;

    /// Write a `vpcC` box from stream parameters (libavformat before 60.16).
    #[cfg(not(vpcc_with_data))]
    pub fn ff_isom_write_vpcc(
        s: *mut AVFormatContext,
        pb: *mut AVIOContext,
        par: *mut AVCodecParameters,
    ) -> c_int;
}

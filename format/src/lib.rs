//! Layout mirrors and constants for FFmpeg internals.
//!
//! FFmpeg keeps some of the state a player needs behind private headers. This
//! crate re-declares just enough of it to be reachable from Rust:
//!
//! - [`url`]: the `URLContext` layout from `libavformat/url.h`, with a narrow
//!   accessor API over it.
//! - [`channel_layout`]: `AV_CH_*` bits and `AV_CH_LAYOUT_*` masks.
//! - [`avutil`]: `AV_NOPTS_VALUE` and the option search flags.
//! - [`isom`] (feature `link-internal`): the `ff_isom_write_*` helpers that
//!   write codec configuration boxes.
//!
//! Nothing here owns native memory. The layouts are pinned to the FFmpeg
//! version the workspace is checked against; `avbridge-abi-check` compares them
//! with a C compiler and, when available, FFmpeg's own headers.

#![warn(missing_docs)]

pub mod avutil;
pub mod channel_layout;
pub mod url;

#[cfg(feature = "link-internal")]
pub mod ffi;
#[cfg(feature = "link-internal")]
pub mod isom;

pub use url::{
    AVClass, AVIOInterruptCB, AvioFlags, FieldOffset, StructLayout, URL_CONTEXT_LAYOUT,
    URLContext, URLProtocol, UrlContextMut, UrlContextRef,
};

/// Opaque `AVIOContext`.
#[repr(C)]
#[derive(Debug)]
pub struct AVIOContext {
    _data: [u8; 0],
    _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
}

/// Opaque `AVFormatContext`.
#[repr(C)]
#[derive(Debug)]
pub struct AVFormatContext {
    _data: [u8; 0],
    _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
}

/// Opaque `AVCodecParameters`.
#[repr(C)]
#[derive(Debug)]
pub struct AVCodecParameters {
    _data: [u8; 0],
    _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
}

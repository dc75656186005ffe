//! ABI checks for avbridge.
//!
//! Links the C references compiled by the build script and exposes them as
//! plain Rust functions, plus [`compare_layout`] to diff a Rust layout mirror
//! against whatever the C compiler reports.

use std::ffi::{CString, c_char, c_int};

use avbridge_format::StructLayout;

mod sys {
    use std::ffi::{c_char, c_int};

    unsafe extern "C" {
        pub fn ref_urlcontext_size() -> usize;
        pub fn ref_urlcontext_align() -> usize;
        pub fn ref_urlcontext_offset(name: *const c_char, out: *mut usize) -> c_int;
        pub fn ref_interrupt_cb_size() -> usize;
        pub fn ref_errno_eagain() -> c_int;
        pub fn ref_averror_eagain() -> c_int;
    }

    #[cfg(has_ffmpeg_headers)]
    unsafe extern "C" {
        pub fn header_int_constant(name: *const c_char, out: *mut i64) -> c_int;
        pub fn header_mask_constant(name: *const c_char, out: *mut u64) -> c_int;
    }

    #[cfg(has_ffmpeg_source)]
    unsafe extern "C" {
        pub fn ffmpeg_urlcontext_size() -> usize;
        pub fn ffmpeg_urlcontext_align() -> usize;
        pub fn ffmpeg_urlcontext_offset(name: *const c_char, out: *mut usize) -> c_int;
    }
}

/// One disagreement between a Rust mirror and its C reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// `sizeof` differs.
    Size {
        /// Rust size.
        rust: usize,
        /// C size.
        c: usize,
    },
    /// `_Alignof` differs.
    Align {
        /// Rust alignment.
        rust: usize,
        /// C alignment.
        c: usize,
    },
    /// A field sits elsewhere, or C does not know it (`c: None`).
    Offset {
        /// Field name.
        field: &'static str,
        /// Rust offset.
        rust: usize,
        /// C offset.
        c: Option<usize>,
    },
}

/// What the C side reports about a struct.
pub trait CLayout {
    /// `sizeof`.
    fn size(&self) -> usize;
    /// `_Alignof`.
    fn align(&self) -> usize;
    /// `offsetof`, or `None` for an unknown field.
    fn offset(&self, field: &str) -> Option<usize>;
}

/// Every way `layout` disagrees with `c`. Empty means identical.
pub fn compare_layout(layout: &StructLayout, c: &impl CLayout) -> Vec<Mismatch> {
    let mut out = Vec::new();
    if layout.size != c.size() {
        out.push(Mismatch::Size {
            rust: layout.size,
            c: c.size(),
        });
    }
    if layout.align != c.align() {
        out.push(Mismatch::Align {
            rust: layout.align,
            c: c.align(),
        });
    }
    for field in layout.fields {
        let c_offset = c.offset(field.name);
        if c_offset != Some(field.offset) {
            out.push(Mismatch::Offset {
                field: field.name,
                rust: field.offset,
                c: c_offset,
            });
        }
    }
    out
}

fn lookup<T: Default>(
    name: &str,
    f: unsafe extern "C" fn(*const c_char, *mut T) -> c_int,
) -> Option<T> {
    let name = CString::new(name).ok()?;
    let mut out = T::default();
    // SAFETY: `name` is NUL-terminated and outlives the call; `out` is a valid slot.
    let found = unsafe { f(name.as_ptr(), &raw mut out) };
    (found != 0).then_some(out)
}

/// The transcribed `URLContext` compiled by the local C compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscribedUrlContext;

impl CLayout for TranscribedUrlContext {
    fn size(&self) -> usize {
        // SAFETY: pure function in the C reference.
        unsafe { sys::ref_urlcontext_size() }
    }

    fn align(&self) -> usize {
        // SAFETY: pure function in the C reference.
        unsafe { sys::ref_urlcontext_align() }
    }

    fn offset(&self, field: &str) -> Option<usize> {
        lookup(field, sys::ref_urlcontext_offset)
    }
}

/// `URLContext` straight from `libavformat/url.h`.
#[cfg(has_ffmpeg_source)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegUrlContext;

#[cfg(has_ffmpeg_source)]
impl CLayout for FfmpegUrlContext {
    fn size(&self) -> usize {
        // SAFETY: pure function in the C reference.
        unsafe { sys::ffmpeg_urlcontext_size() }
    }

    fn align(&self) -> usize {
        // SAFETY: pure function in the C reference.
        unsafe { sys::ffmpeg_urlcontext_align() }
    }

    fn offset(&self, field: &str) -> Option<usize> {
        lookup(field, sys::ffmpeg_urlcontext_offset)
    }
}

/// `sizeof(AVIOInterruptCB)` as transcribed.
#[must_use]
pub fn interrupt_cb_size() -> usize {
    // SAFETY: pure function in the C reference.
    unsafe { sys::ref_interrupt_cb_size() }
}

/// `EAGAIN` from the C library's `<errno.h>`.
#[must_use]
pub fn errno_eagain() -> c_int {
    // SAFETY: pure function in the C reference.
    unsafe { sys::ref_errno_eagain() }
}

/// `AVERROR(EAGAIN)` as the C compiler computes it.
#[must_use]
pub fn averror_eagain() -> c_int {
    // SAFETY: pure function in the C reference.
    unsafe { sys::ref_averror_eagain() }
}

/// Value of a signed header macro, `None` if the headers do not define it.
#[cfg(has_ffmpeg_headers)]
#[must_use]
pub fn header_int(name: &str) -> Option<i64> {
    lookup(name, sys::header_int_constant)
}

/// Value of a channel mask macro, `None` if the headers do not define it.
#[cfg(has_ffmpeg_headers)]
#[must_use]
pub fn header_mask(name: &str) -> Option<u64> {
    lookup(name, sys::header_mask_constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use avbridge_format::URL_CONTEXT_LAYOUT;

    struct Shifted;

    impl CLayout for Shifted {
        fn size(&self) -> usize {
            URL_CONTEXT_LAYOUT.size + 8
        }

        fn align(&self) -> usize {
            URL_CONTEXT_LAYOUT.align
        }

        fn offset(&self, field: &str) -> Option<usize> {
            match field {
                "min_packet_size" => None,
                "rw_timeout" => URL_CONTEXT_LAYOUT.offset_of(field).map(|o| o + 8),
                _ => URL_CONTEXT_LAYOUT.offset_of(field),
            }
        }
    }

    #[test]
    fn compare_reports_each_difference() {
        let rw = URL_CONTEXT_LAYOUT.offset_of("rw_timeout").unwrap();
        let min = URL_CONTEXT_LAYOUT.offset_of("min_packet_size").unwrap();
        assert_eq!(
            compare_layout(&URL_CONTEXT_LAYOUT, &Shifted),
            vec![
                Mismatch::Size {
                    rust: URL_CONTEXT_LAYOUT.size,
                    c: URL_CONTEXT_LAYOUT.size + 8,
                },
                Mismatch::Offset {
                    field: "rw_timeout",
                    rust: rw,
                    c: Some(rw + 8),
                },
                Mismatch::Offset {
                    field: "min_packet_size",
                    rust: min,
                    c: None,
                },
            ]
        );
    }

    #[test]
    fn unknown_field_is_none() {
        assert_eq!(TranscribedUrlContext.offset("no_such_field"), None);
        assert_eq!(TranscribedUrlContext.offset("nul\0inside"), None);
    }
}

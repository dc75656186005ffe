//! Mirror of `URLContext` (`libavformat/url.h`).
//!
//! `URLContext` is the handle FFmpeg's protocol layer (file, http, tcp, ...)
//! keeps per open resource. It is not part of the public headers, but it is
//! what `av_log` hands to a log callback for protocol messages, and its
//! `interrupt_callback.opaque` is how a player finds its way back to the item
//! that opened the stream.
//!
//! The struct below must match the native definition field for field. Go
//! through [`UrlContextRef`] / [`UrlContextMut`] instead of touching fields
//! directly so a layout change only has to be handled here.

use std::ffi::{CStr, c_char, c_int, c_void};
use std::marker::{PhantomData, PhantomPinned};
use std::mem::{align_of, offset_of, size_of};
use std::time::Duration;

/// Opaque `AVClass`.
#[repr(C)]
#[derive(Debug)]
pub struct AVClass {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Opaque `URLProtocol`.
#[repr(C)]
#[derive(Debug)]
pub struct URLProtocol {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Callback used by blocking functions to check whether they should abort.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AVIOInterruptCB {
    /// Returns non-zero to abort the blocking operation.
    pub callback: Option<unsafe extern "C" fn(opaque: *mut c_void) -> c_int>,
    /// Passed back to `callback`.
    pub opaque: *mut c_void,
}

impl Default for AVIOInterruptCB {
    fn default() -> Self {
        Self {
            callback: None,
            opaque: std::ptr::null_mut(),
        }
    }
}

/// `URLContext`, field for field.
#[repr(C)]
#[derive(Debug)]
#[allow(missing_docs)]
pub struct URLContext {
    /// Information for `av_log`. Set by `url_open`.
    pub av_class: *const AVClass,
    pub prot: *const URLProtocol,
    pub priv_data: *mut c_void,
    /// The URL that was opened.
    pub filename: *mut c_char,
    /// `AVIO_FLAG_*`.
    pub flags: c_int,
    /// If non-zero, the stream is packetized with this max packet size.
    pub max_packet_size: c_int,
    /// True if streamed (no seek possible).
    pub is_streamed: c_int,
    pub is_connected: c_int,
    pub interrupt_callback: AVIOInterruptCB,
    /// Maximum time to wait for a (network) read/write, in microseconds.
    pub rw_timeout: i64,
    pub protocol_whitelist: *const c_char,
    pub protocol_blacklist: *const c_char,
    /// If non-zero, the stream is packetized with this min packet size.
    pub min_packet_size: c_int,
}

bitflags::bitflags! {
    /// `AVIO_FLAG_*` values stored in [`URLContext::flags`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AvioFlags: c_int {
        /// Read-only.
        const READ = 1;
        /// Write-only.
        const WRITE = 2;
        /// Read-write.
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
        /// Use non-blocking mode.
        const NONBLOCK = 8;
        /// Avoid any buffering.
        const DIRECT = 0x8000;
    }
}

/// Offset of one field inside a mirrored struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffset {
    /// Field name as spelled in the C header.
    pub name: &'static str,
    /// Byte offset from the start of the struct.
    pub offset: usize,
}

/// Size, alignment and field offsets of a mirrored struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructLayout {
    /// C struct name.
    pub name: &'static str,
    /// `sizeof`.
    pub size: usize,
    /// `_Alignof`.
    pub align: usize,
    /// `offsetof` for every field, in declaration order.
    pub fields: &'static [FieldOffset],
}

impl StructLayout {
    /// Offset of the named field, if the struct has it.
    #[must_use]
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.offset)
    }
}

macro_rules! field {
    ($ty:ty, $field:ident) => {
        FieldOffset {
            name: stringify!($field),
            offset: offset_of!($ty, $field),
        }
    };
}

/// Layout of the Rust [`URLContext`], as the compiler laid it out.
pub const URL_CONTEXT_LAYOUT: StructLayout = StructLayout {
    name: "URLContext",
    size: size_of::<URLContext>(),
    align: align_of::<URLContext>(),
    fields: &[
        field!(URLContext, av_class),
        field!(URLContext, prot),
        field!(URLContext, priv_data),
        field!(URLContext, filename),
        field!(URLContext, flags),
        field!(URLContext, max_packet_size),
        field!(URLContext, is_streamed),
        field!(URLContext, is_connected),
        field!(URLContext, interrupt_callback),
        field!(URLContext, rw_timeout),
        field!(URLContext, protocol_whitelist),
        field!(URLContext, protocol_blacklist),
        field!(URLContext, min_packet_size),
    ],
};

// LP64 / LLP64 layout of libavformat/url.h.
#[cfg(target_pointer_width = "64")]
mod layout_64 {
    use super::{AVIOInterruptCB, URLContext};
    use static_assertions::const_assert_eq;
    use std::mem::{align_of, offset_of, size_of};

    const_assert_eq!(size_of::<AVIOInterruptCB>(), 16);
    const_assert_eq!(offset_of!(AVIOInterruptCB, opaque), 8);

    const_assert_eq!(size_of::<URLContext>(), 96);
    const_assert_eq!(align_of::<URLContext>(), 8);
    const_assert_eq!(offset_of!(URLContext, av_class), 0);
    const_assert_eq!(offset_of!(URLContext, prot), 8);
    const_assert_eq!(offset_of!(URLContext, priv_data), 16);
    const_assert_eq!(offset_of!(URLContext, filename), 24);
    const_assert_eq!(offset_of!(URLContext, flags), 32);
    const_assert_eq!(offset_of!(URLContext, max_packet_size), 36);
    const_assert_eq!(offset_of!(URLContext, is_streamed), 40);
    const_assert_eq!(offset_of!(URLContext, is_connected), 44);
    const_assert_eq!(offset_of!(URLContext, interrupt_callback), 48);
    const_assert_eq!(offset_of!(URLContext, rw_timeout), 64);
    const_assert_eq!(offset_of!(URLContext, protocol_whitelist), 72);
    const_assert_eq!(offset_of!(URLContext, protocol_blacklist), 80);
    const_assert_eq!(offset_of!(URLContext, min_packet_size), 88);
}

static_assertions::assert_not_impl_any!(URLContext: Send, Sync);

unsafe fn opt_cstr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null, and the caller vouches it is NUL-terminated for 'a.
        Some(unsafe { CStr::from_ptr(ptr) })
    }
}

/// Read access to a native `URLContext`.
///
/// Every getter reads the native memory at call time; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct UrlContextRef<'a> {
    ctx: &'a URLContext,
}

impl<'a> UrlContextRef<'a> {
    /// Wrap a pointer handed out by FFmpeg. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live `URLContext` of the FFmpeg version this crate
    /// mirrors, and it, along with the strings it points to, must stay valid
    /// and unmodified by other threads for `'a`.
    #[must_use]
    pub unsafe fn from_ptr(ptr: *const URLContext) -> Option<Self> {
        // SAFETY: forwarded to the caller.
        let ctx = unsafe { ptr.as_ref() };
        if ctx.is_none() {
            log::debug!("null URLContext pointer");
        }
        ctx.map(|ctx| Self { ctx })
    }

    /// Treat an `av_log` context pointer as a `URLContext` when it is one.
    ///
    /// FFmpeg passes the logging object as `void *` whose first field is its
    /// `AVClass *`; protocol contexts use `ffurl_context_class`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or the context pointer FFmpeg passed to a log
    /// callback, and the requirements of [`from_ptr`](Self::from_ptr) apply
    /// when it is a `URLContext`.
    #[cfg(feature = "link-internal")]
    #[must_use]
    pub unsafe fn from_log_context(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        // SAFETY: every object av_log accepts starts with a `const AVClass *`.
        let class = unsafe { *ptr.cast::<*const AVClass>() };
        let url_class = &raw const crate::ffi::ffurl_context_class;
        if std::ptr::eq(class, url_class) {
            // SAFETY: the class tag identifies the object as a URLContext.
            unsafe { Self::from_ptr(ptr.cast()) }
        } else {
            None
        }
    }

    /// The mirrored struct itself.
    #[must_use]
    pub const fn raw(&self) -> &'a URLContext {
        self.ctx
    }

    /// The `AVClass` tag.
    #[must_use]
    pub const fn class(&self) -> *const AVClass {
        self.ctx.av_class
    }

    /// The protocol implementation serving this context.
    #[must_use]
    pub const fn protocol(&self) -> *const URLProtocol {
        self.ctx.prot
    }

    /// Protocol private data.
    #[must_use]
    pub const fn priv_data(&self) -> *mut c_void {
        self.ctx.priv_data
    }

    /// The URL that was opened.
    #[must_use]
    pub fn filename(&self) -> Option<&'a CStr> {
        // SAFETY: covered by the `from_ptr` contract.
        unsafe { opt_cstr(self.ctx.filename) }
    }

    /// Open flags.
    #[must_use]
    pub const fn flags(&self) -> AvioFlags {
        AvioFlags::from_bits_retain(self.ctx.flags)
    }

    /// Max packet size hint, `None` when unset.
    #[must_use]
    pub const fn max_packet_size(&self) -> Option<c_int> {
        non_zero(self.ctx.max_packet_size)
    }

    /// Min packet size hint, `None` when unset.
    #[must_use]
    pub const fn min_packet_size(&self) -> Option<c_int> {
        non_zero(self.ctx.min_packet_size)
    }

    /// Whether the stream is not seekable.
    #[must_use]
    pub const fn is_streamed(&self) -> bool {
        self.ctx.is_streamed != 0
    }

    /// Whether the protocol finished connecting.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.ctx.is_connected != 0
    }

    /// Raw read/write timeout in microseconds.
    #[must_use]
    pub const fn rw_timeout(&self) -> i64 {
        self.ctx.rw_timeout
    }

    /// Read/write timeout, `None` when no timeout is set (`<= 0`).
    #[must_use]
    pub fn rw_timeout_duration(&self) -> Option<Duration> {
        u64::try_from(self.ctx.rw_timeout)
            .ok()
            .filter(|&us| us > 0)
            .map(Duration::from_micros)
    }

    /// The interrupt callback slot.
    #[must_use]
    pub const fn interrupt_callback(&self) -> AVIOInterruptCB {
        self.ctx.interrupt_callback
    }

    /// `interrupt_callback.opaque`, `None` when null.
    #[must_use]
    pub fn interrupt_opaque(&self) -> Option<std::ptr::NonNull<c_void>> {
        std::ptr::NonNull::new(self.ctx.interrupt_callback.opaque)
    }

    /// Comma separated list of allowed protocols.
    #[must_use]
    pub fn protocol_whitelist(&self) -> Option<&'a CStr> {
        // SAFETY: covered by the `from_ptr` contract.
        unsafe { opt_cstr(self.ctx.protocol_whitelist) }
    }

    /// Comma separated list of disallowed protocols.
    #[must_use]
    pub fn protocol_blacklist(&self) -> Option<&'a CStr> {
        // SAFETY: covered by the `from_ptr` contract.
        unsafe { opt_cstr(self.ctx.protocol_blacklist) }
    }
}

const fn non_zero(value: c_int) -> Option<c_int> {
    if value == 0 { None } else { Some(value) }
}

/// Read/write access to a native `URLContext`.
#[derive(Debug)]
pub struct UrlContextMut<'a> {
    ctx: &'a mut URLContext,
}

impl<'a> UrlContextMut<'a> {
    /// Wrap a pointer handed out by FFmpeg. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// As [`UrlContextRef::from_ptr`], and no other reference to the context
    /// may be used for `'a`.
    #[must_use]
    pub unsafe fn from_ptr(ptr: *mut URLContext) -> Option<Self> {
        // SAFETY: forwarded to the caller.
        unsafe { ptr.as_mut() }.map(|ctx| Self { ctx })
    }

    /// Read-only view.
    #[must_use]
    pub fn reader(&self) -> UrlContextRef<'_> {
        UrlContextRef { ctx: self.ctx }
    }

    /// Replace the open flags.
    pub fn set_flags(&mut self, flags: AvioFlags) {
        self.ctx.flags = flags.bits();
    }

    /// Set the read/write timeout in microseconds; `0` disables it.
    pub fn set_rw_timeout(&mut self, micros: i64) {
        self.ctx.rw_timeout = micros;
    }

    /// Mark the stream as (not) seekable.
    pub fn set_is_streamed(&mut self, streamed: bool) {
        self.ctx.is_streamed = c_int::from(streamed);
    }

    /// Replace the interrupt callback.
    pub fn set_interrupt_callback(&mut self, cb: AVIOInterruptCB) {
        self.ctx.interrupt_callback = cb;
    }

    /// Set the packet size hints; `None` clears one.
    pub fn set_packet_size_hints(&mut self, min: Option<c_int>, max: Option<c_int>) {
        self.ctx.min_packet_size = min.unwrap_or(0);
        self.ctx.max_packet_size = max.unwrap_or(0);
    }
}

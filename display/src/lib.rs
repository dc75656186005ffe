//! `AVDisplayCriteria` without the private header.
//!
//! On tvOS (and visionOS) an app asks the display to switch refresh rate and
//! dynamic range by handing an `AVDisplayCriteria` to `AVDisplayManager`. The
//! public SDK only builds one from a `CMFormatDescription`; the initializer
//! taking a refresh rate and a dynamic range, and the two matching getters, are
//! private. This crate reaches them through the Objective-C runtime and wraps
//! the result in [`DisplayCriteria`].
//!
//! No validation is done on the values passed in. What the platform accepts is
//! the platform's business.
//!
//! ```rust,ignore
//! use avbridge_display::{DisplayCriteria, DynamicRange};
//!
//! let criteria = DisplayCriteria::new(23.976, DynamicRange::DolbyVision)?;
//! assert_eq!(criteria.dynamic_range(), Some(DynamicRange::DolbyVision));
//! ```

#![warn(missing_docs)]

mod sys;

/// Errors from building or wrapping display criteria.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// The current platform has no display criteria.
    #[error("display criteria not supported on this platform")]
    Unsupported,
    /// `AVDisplayCriteria` is not registered with the runtime.
    #[error("AVDisplayCriteria class not available")]
    ClassUnavailable,
    /// The class no longer answers a private selector this crate relies on.
    #[error("AVDisplayCriteria does not respond to {0}")]
    SelectorUnavailable(&'static str),
    /// The platform initializer returned nil.
    #[error("AVDisplayCriteria initializer returned nil")]
    InitFailed,
}

/// Video dynamic range, using the platform's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum DynamicRange {
    /// Standard dynamic range.
    #[default]
    Sdr = 0,
    /// HDR10 (PQ).
    Hdr10 = 2,
    /// Hybrid log-gamma.
    Hlg = 3,
    /// Dolby Vision.
    DolbyVision = 5,
}

impl DynamicRange {
    /// Map a raw platform value. Unknown values give `None`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Sdr),
            2 => Some(Self::Hdr10),
            3 => Some(Self::Hlg),
            5 => Some(Self::DolbyVision),
            _ => None,
        }
    }

    /// The raw platform value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Anything brighter than SDR.
    #[must_use]
    pub const fn is_hdr(self) -> bool {
        !matches!(self, Self::Sdr)
    }
}

/// A platform `AVDisplayCriteria`.
///
/// Holds the platform object and nothing else; every getter asks it.
pub struct DisplayCriteria {
    inner: sys::Criteria,
}

impl DisplayCriteria {
    /// Build criteria for a refresh rate (Hz) and dynamic range.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] off tvOS/visionOS; otherwise whatever
    /// stops the private initializer from being reached or returning an object.
    pub fn new(refresh_rate: f32, dynamic_range: DynamicRange) -> Result<Self, DisplayError> {
        Self::with_raw_dynamic_range(refresh_rate, dynamic_range.raw())
    }

    /// Build criteria from a raw dynamic range value, passed through unchecked.
    ///
    /// # Errors
    ///
    /// As [`DisplayCriteria::new`].
    pub fn with_raw_dynamic_range(refresh_rate: f32, dynamic_range: i32) -> Result<Self, DisplayError> {
        let inner = sys::Criteria::new(refresh_rate, dynamic_range)?;
        log::debug!("created display criteria: {refresh_rate} Hz, dynamic range {dynamic_range}");
        Ok(Self { inner })
    }

    /// Refresh rate in Hz.
    #[must_use]
    pub fn refresh_rate(&self) -> f32 {
        self.inner.refresh_rate()
    }

    /// The raw dynamic range value held by the platform object.
    #[must_use]
    pub fn raw_dynamic_range(&self) -> i32 {
        self.inner.video_dynamic_range()
    }

    /// The dynamic range, if it is one this crate knows.
    #[must_use]
    pub fn dynamic_range(&self) -> Option<DynamicRange> {
        DynamicRange::from_raw(self.raw_dynamic_range())
    }
}

#[cfg(any(target_os = "tvos", target_os = "visionos"))]
impl DisplayCriteria {
    /// Wrap an existing `AVDisplayCriteria`, e.g. the one currently set on
    /// `AVDisplayManager.preferredDisplayCriteria`.
    ///
    /// # Errors
    ///
    /// [`DisplayError::SelectorUnavailable`] if the object lacks the getters.
    pub fn from_retained(
        object: objc2::rc::Retained<objc2::runtime::AnyObject>,
    ) -> Result<Self, DisplayError> {
        Ok(Self {
            inner: sys::Criteria::from_retained(object)?,
        })
    }

    /// The platform object, for handing to `AVDisplayManager`.
    #[must_use]
    pub fn as_object(&self) -> &objc2::runtime::AnyObject {
        self.inner.as_object()
    }

    /// Give up the wrapper and keep the platform object.
    #[must_use]
    pub fn into_retained(self) -> objc2::rc::Retained<objc2::runtime::AnyObject> {
        self.inner.into_retained()
    }
}

impl std::fmt::Debug for DisplayCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayCriteria")
            .field("refresh_rate", &self.refresh_rate())
            .field("dynamic_range", &self.raw_dynamic_range())
            .finish()
    }
}

/// Whether the private initializer can be reached on this device.
#[must_use]
pub fn is_available() -> bool {
    sys::is_available()
}

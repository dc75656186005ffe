//! tvOS / visionOS backend over the Objective-C runtime.

use std::ffi::{CStr, c_int};

use objc2::rc::{Allocated, Retained};
use objc2::runtime::{AnyClass, AnyObject, Sel};
use objc2::{msg_send, sel};

use crate::DisplayError;

#[link(name = "AVFoundation", kind = "framework")]
unsafe extern "C" {}

const CLASS_NAME: &CStr = c"AVDisplayCriteria";

fn criteria_class() -> Result<&'static AnyClass, DisplayError> {
    AnyClass::get(CLASS_NAME).ok_or_else(|| {
        log::warn!("AVDisplayCriteria is not registered with the runtime");
        DisplayError::ClassUnavailable
    })
}

fn require(class: &AnyClass, sel: Sel, name: &'static str) -> Result<(), DisplayError> {
    if class.responds_to(sel) {
        Ok(())
    } else {
        log::warn!("{} does not respond to {name}", class.name().to_string_lossy());
        Err(DisplayError::SelectorUnavailable(name))
    }
}

fn require_getters(class: &AnyClass) -> Result<(), DisplayError> {
    require(class, sel!(refreshRate), "refreshRate")?;
    require(class, sel!(videoDynamicRange), "videoDynamicRange")
}

pub(crate) struct Criteria {
    inner: Retained<AnyObject>,
}

impl Criteria {
    pub(crate) fn new(refresh_rate: f32, dynamic_range: i32) -> Result<Self, DisplayError> {
        let class = criteria_class()?;
        require(
            class,
            sel!(initWithRefreshRate:videoDynamicRange:),
            "initWithRefreshRate:videoDynamicRange:",
        )?;
        require_getters(class)?;

        // SAFETY: `alloc` on a class object returns an owned, uninitialized instance.
        let allocated: Allocated<AnyObject> = unsafe { msg_send![class, alloc] };
        let dynamic_range: c_int = dynamic_range;
        // SAFETY: the selector was checked above; it takes (float, int) and returns `instancetype`.
        let inner: Option<Retained<AnyObject>> = unsafe {
            msg_send![allocated, initWithRefreshRate: refresh_rate, videoDynamicRange: dynamic_range]
        };
        inner.map(|inner| Self { inner }).ok_or(DisplayError::InitFailed)
    }

    pub(crate) fn from_retained(inner: Retained<AnyObject>) -> Result<Self, DisplayError> {
        require_getters(inner.class())?;
        Ok(Self { inner })
    }

    pub(crate) fn refresh_rate(&self) -> f32 {
        // SAFETY: `refreshRate` is a `float` property, checked at construction.
        unsafe { msg_send![&*self.inner, refreshRate] }
    }

    pub(crate) fn video_dynamic_range(&self) -> i32 {
        // SAFETY: `videoDynamicRange` is an `int` property, checked at construction.
        let raw: c_int = unsafe { msg_send![&*self.inner, videoDynamicRange] };
        raw
    }

    pub(crate) fn as_object(&self) -> &AnyObject {
        &self.inner
    }

    pub(crate) fn into_retained(self) -> Retained<AnyObject> {
        self.inner
    }
}

pub(crate) fn is_available() -> bool {
    let Ok(class) = criteria_class() else {
        return false;
    };
    class.responds_to(sel!(initWithRefreshRate:videoDynamicRange:))
}

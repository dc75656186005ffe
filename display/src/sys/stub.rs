//! Fallback for platforms without `AVDisplayCriteria`.

use crate::DisplayError;

/// Uninhabited: no value can be built off tvOS.
pub(crate) enum Criteria {}

impl Criteria {
    pub(crate) const fn new(_refresh_rate: f32, _dynamic_range: i32) -> Result<Self, DisplayError> {
        Err(DisplayError::Unsupported)
    }

    pub(crate) const fn refresh_rate(&self) -> f32 {
        match *self {}
    }

    pub(crate) const fn video_dynamic_range(&self) -> i32 {
        match *self {}
    }
}

pub(crate) const fn is_available() -> bool {
    false
}

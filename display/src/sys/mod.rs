//! Platform-specific display criteria.

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "tvos", target_os = "visionos"))] {
        mod apple;
        pub(crate) use apple::{Criteria, is_available};
    } else {
        mod stub;
        pub(crate) use stub::{Criteria, is_available};
    }
}

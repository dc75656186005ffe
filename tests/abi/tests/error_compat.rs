//! Error translation against the C library's errno and the exported C symbols.

use std::ffi::c_int;

use avbridge_abi_check::{averror_eagain, errno_eagain};
use avbridge_error::{
    AVERROR_EAGAIN, AVERROR_EOF, AVERROR_INVALIDDATA, convert_error, is_eagain, is_filter_end,
};

unsafe extern "C" {
    fn AVERROR_CONVERT(e: c_int) -> c_int;
    fn IS_AVERROR_EOF(code: c_int) -> bool;
    fn IS_AVERROR_EAGAIN(code: c_int) -> bool;
    fn IS_AVERROR_INVALIDDATA(code: c_int) -> bool;
    fn AVFILTER_EOF(code: c_int) -> bool;
}

#[test]
fn eagain_matches_errno_h() {
    assert_eq!(errno_eagain(), libc::EAGAIN);
    assert_eq!(convert_error(errno_eagain()), averror_eagain());
    assert_eq!(AVERROR_EAGAIN, averror_eagain());
    assert!(is_eagain(averror_eagain()));
    assert!(is_filter_end(averror_eagain()));
}

#[test]
fn exported_symbols_agree() {
    // SAFETY: the exported functions are pure.
    unsafe {
        assert_eq!(AVERROR_CONVERT(libc::EAGAIN), averror_eagain());
        assert_eq!(AVERROR_CONVERT(0), 0);
        assert!(IS_AVERROR_EOF(AVERROR_EOF));
        assert!(!IS_AVERROR_EOF(AVERROR_INVALIDDATA));
        assert!(IS_AVERROR_EAGAIN(averror_eagain()));
        assert!(IS_AVERROR_INVALIDDATA(AVERROR_INVALIDDATA));
        assert!(AVFILTER_EOF(AVERROR_EOF));
        assert!(AVFILTER_EOF(averror_eagain()));
        assert!(!AVFILTER_EOF(0));
    }
}

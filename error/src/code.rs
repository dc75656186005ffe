//! The native error-code vocabulary.
//!
//! Every item here is a `const fn` or constant over plain integers. Values
//! match `libavutil/error.h` exactly.

use std::ffi::c_int;

/// A native FFmpeg return code. Negative values are errors.
pub type ErrorCode = c_int;

/// Pack four bytes into a little-endian tag, like FFmpeg's `MKTAG`.
#[must_use]
pub const fn mktag(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// Negated tag used for library specific errors, like FFmpeg's `FFERRTAG`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn fferrtag(a: u8, b: u8, c: u8, d: u8) -> ErrorCode {
    (mktag(a, b, c, d) as i32).wrapping_neg()
}

/// Encode a POSIX error number the way FFmpeg does (`AVERROR(e)`).
///
/// Total over `c_int`: `i32::MIN` maps to itself instead of overflowing.
#[must_use]
pub const fn convert_error(errnum: c_int) -> ErrorCode {
    errnum.wrapping_neg()
}

/// Recover the POSIX error number from an encoded error (`AVUNERROR(e)`).
#[must_use]
pub const fn unconvert_error(code: ErrorCode) -> c_int {
    code.wrapping_neg()
}

/// Bitstream filter not found.
pub const AVERROR_BSF_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'B', b'S', b'F');
/// Internal bug, also see [`AVERROR_BUG2`].
pub const AVERROR_BUG: ErrorCode = fferrtag(b'B', b'U', b'G', b'!');
/// Buffer too small.
pub const AVERROR_BUFFER_TOO_SMALL: ErrorCode = fferrtag(b'B', b'U', b'F', b'S');
/// Decoder not found.
pub const AVERROR_DECODER_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'D', b'E', b'C');
/// Demuxer not found.
pub const AVERROR_DEMUXER_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'D', b'E', b'M');
/// Encoder not found.
pub const AVERROR_ENCODER_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'E', b'N', b'C');
/// End of file.
pub const AVERROR_EOF: ErrorCode = fferrtag(b'E', b'O', b'F', b' ');
/// Immediate exit was requested; the called function should not be restarted.
pub const AVERROR_EXIT: ErrorCode = fferrtag(b'E', b'X', b'I', b'T');
/// Generic error in an external library.
pub const AVERROR_EXTERNAL: ErrorCode = fferrtag(b'E', b'X', b'T', b' ');
/// Filter not found.
pub const AVERROR_FILTER_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'F', b'I', b'L');
/// Invalid data found when processing input.
pub const AVERROR_INVALIDDATA: ErrorCode = fferrtag(b'I', b'N', b'D', b'A');
/// Muxer not found.
pub const AVERROR_MUXER_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'M', b'U', b'X');
/// Option not found.
pub const AVERROR_OPTION_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'O', b'P', b'T');
/// Not yet implemented in FFmpeg, patches welcome.
pub const AVERROR_PATCHWELCOME: ErrorCode = fferrtag(b'P', b'A', b'W', b'E');
/// Protocol not found.
pub const AVERROR_PROTOCOL_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'P', b'R', b'O');
/// Stream not found.
pub const AVERROR_STREAM_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'S', b'T', b'R');
/// Semantically identical to [`AVERROR_BUG`], introduced later with a different value.
pub const AVERROR_BUG2: ErrorCode = fferrtag(b'B', b'U', b'G', b' ');
/// Unknown error, typically from an external library.
pub const AVERROR_UNKNOWN: ErrorCode = fferrtag(b'U', b'N', b'K', b'N');
/// Requested feature is flagged experimental.
pub const AVERROR_EXPERIMENTAL: ErrorCode = -0x2bb2_afa8;
/// Input changed between calls. Reconfiguration is required.
pub const AVERROR_INPUT_CHANGED: ErrorCode = -0x636e_6701;
/// Output changed between calls. Reconfiguration is required.
pub const AVERROR_OUTPUT_CHANGED: ErrorCode = -0x636e_6702;

/// HTTP 400.
pub const AVERROR_HTTP_BAD_REQUEST: ErrorCode = fferrtag(0xF8, b'4', b'0', b'0');
/// HTTP 401.
pub const AVERROR_HTTP_UNAUTHORIZED: ErrorCode = fferrtag(0xF8, b'4', b'0', b'1');
/// HTTP 403.
pub const AVERROR_HTTP_FORBIDDEN: ErrorCode = fferrtag(0xF8, b'4', b'0', b'3');
/// HTTP 404.
pub const AVERROR_HTTP_NOT_FOUND: ErrorCode = fferrtag(0xF8, b'4', b'0', b'4');
/// Any other HTTP 4xx.
pub const AVERROR_HTTP_OTHER_4XX: ErrorCode = fferrtag(0xF8, b'4', b'X', b'X');
/// HTTP 5xx.
pub const AVERROR_HTTP_SERVER_ERROR: ErrorCode = fferrtag(0xF8, b'5', b'X', b'X');

/// `AVERROR(EAGAIN)` for the current target.
pub const AVERROR_EAGAIN: ErrorCode = convert_error(libc::EAGAIN);

/// True iff `code` is the end-of-file sentinel.
#[must_use]
pub const fn is_eof(code: ErrorCode) -> bool {
    code == AVERROR_EOF
}

/// True iff `code` is the invalid-data sentinel.
#[must_use]
pub const fn is_invalid_data(code: ErrorCode) -> bool {
    code == AVERROR_INVALIDDATA
}

/// True iff `code` is `AVERROR(EAGAIN)`: output is not available yet.
#[must_use]
pub const fn is_eagain(code: ErrorCode) -> bool {
    code == AVERROR_EAGAIN
}

/// True iff `code` is either "would block" or end of file.
///
/// Filtering and decoding loops use this to stop pulling without treating the
/// return as a failure. It does not tell the two conditions apart; use
/// [`is_eof`] afterwards when that matters.
#[must_use]
pub const fn is_filter_end(code: ErrorCode) -> bool {
    is_eagain(code) || is_eof(code)
}

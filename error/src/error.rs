use std::ffi::c_int;

use crate::code::{
    AVERROR_BSF_NOT_FOUND, AVERROR_BUFFER_TOO_SMALL, AVERROR_BUG, AVERROR_BUG2,
    AVERROR_DECODER_NOT_FOUND, AVERROR_DEMUXER_NOT_FOUND, AVERROR_ENCODER_NOT_FOUND, AVERROR_EOF,
    AVERROR_EXIT, AVERROR_EXPERIMENTAL, AVERROR_EXTERNAL, AVERROR_FILTER_NOT_FOUND,
    AVERROR_HTTP_BAD_REQUEST, AVERROR_HTTP_FORBIDDEN, AVERROR_HTTP_NOT_FOUND,
    AVERROR_HTTP_OTHER_4XX, AVERROR_HTTP_SERVER_ERROR, AVERROR_HTTP_UNAUTHORIZED,
    AVERROR_INPUT_CHANGED, AVERROR_INVALIDDATA, AVERROR_MUXER_NOT_FOUND, AVERROR_OPTION_NOT_FOUND,
    AVERROR_OUTPUT_CHANGED, AVERROR_PATCHWELCOME, AVERROR_PROTOCOL_NOT_FOUND,
    AVERROR_STREAM_NOT_FOUND, AVERROR_UNKNOWN, ErrorCode, convert_error,
};

/// Largest errno treated as a POSIX error when classifying a native code.
const MAX_ERRNO: c_int = 4095;

/// Result alias for calls that cross into the native library.
pub type Result<T> = std::result::Result<T, AvError>;

/// HTTP statuses FFmpeg maps into its error space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpError {
    /// 400 Bad Request.
    BadRequest,
    /// 401 Unauthorized.
    Unauthorized,
    /// 403 Forbidden.
    Forbidden,
    /// 404 Not Found.
    NotFound,
    /// Any other 4xx status.
    Other4xx,
    /// Any 5xx status.
    ServerError,
}

impl HttpError {
    const fn code(self) -> ErrorCode {
        match self {
            Self::BadRequest => AVERROR_HTTP_BAD_REQUEST,
            Self::Unauthorized => AVERROR_HTTP_UNAUTHORIZED,
            Self::Forbidden => AVERROR_HTTP_FORBIDDEN,
            Self::NotFound => AVERROR_HTTP_NOT_FOUND,
            Self::Other4xx => AVERROR_HTTP_OTHER_4XX,
            Self::ServerError => AVERROR_HTTP_SERVER_ERROR,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Server returned 400 Bad Request",
            Self::Unauthorized => "Server returned 401 Unauthorized (authorization failed)",
            Self::Forbidden => "Server returned 403 Forbidden (access denied)",
            Self::NotFound => "Server returned 404 Not Found",
            Self::Other4xx => "Server returned 4XX Client Error, but not one of 40{0,1,3,4}",
            Self::ServerError => "Server returned 5XX Server Error reply",
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A negative native return code, classified.
///
/// Messages follow `av_strerror`. [`AvError::code`] gives back the exact
/// integer the library returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AvError {
    /// `AVERROR_BSF_NOT_FOUND`.
    #[error("Bitstream filter not found")]
    BsfNotFound,
    /// `AVERROR_BUG`.
    #[error("Internal bug, should not have happened")]
    Bug,
    /// `AVERROR_BUG2`.
    #[error("Internal bug, should not have happened")]
    Bug2,
    /// `AVERROR_BUFFER_TOO_SMALL`.
    #[error("Buffer too small")]
    BufferTooSmall,
    /// `AVERROR_DECODER_NOT_FOUND`.
    #[error("Decoder not found")]
    DecoderNotFound,
    /// `AVERROR_DEMUXER_NOT_FOUND`.
    #[error("Demuxer not found")]
    DemuxerNotFound,
    /// `AVERROR_ENCODER_NOT_FOUND`.
    #[error("Encoder not found")]
    EncoderNotFound,
    /// `AVERROR_EOF`.
    #[error("End of file")]
    Eof,
    /// `AVERROR_EXIT`.
    #[error("Immediate exit requested")]
    Exit,
    /// `AVERROR_EXTERNAL`.
    #[error("Generic error in an external library")]
    External,
    /// `AVERROR_FILTER_NOT_FOUND`.
    #[error("Filter not found")]
    FilterNotFound,
    /// `AVERROR_INVALIDDATA`.
    #[error("Invalid data found when processing input")]
    InvalidData,
    /// `AVERROR_MUXER_NOT_FOUND`.
    #[error("Muxer not found")]
    MuxerNotFound,
    /// `AVERROR_OPTION_NOT_FOUND`.
    #[error("Option not found")]
    OptionNotFound,
    /// `AVERROR_PATCHWELCOME`.
    #[error("Not yet implemented in FFmpeg, patches welcome")]
    PatchWelcome,
    /// `AVERROR_PROTOCOL_NOT_FOUND`.
    #[error("Protocol not found")]
    ProtocolNotFound,
    /// `AVERROR_STREAM_NOT_FOUND`.
    #[error("Stream not found")]
    StreamNotFound,
    /// `AVERROR_UNKNOWN`.
    #[error("Unknown error occurred")]
    Unknown,
    /// `AVERROR_EXPERIMENTAL`.
    #[error("Experimental feature")]
    Experimental,
    /// `AVERROR_INPUT_CHANGED`.
    #[error("Input changed")]
    InputChanged,
    /// `AVERROR_OUTPUT_CHANGED`.
    #[error("Output changed")]
    OutputChanged,
    /// One of the `AVERROR_HTTP_*` codes.
    #[error("{0}")]
    Http(HttpError),
    /// A negated POSIX error number; holds the positive errno.
    #[error("{}", errno_message(.0))]
    Errno(c_int),
    /// Any other negative code; holds the raw value.
    #[error("Error number {0} occurred")]
    Other(ErrorCode),
}

/// `strerror` text, the way `av_strerror` renders a negated errno.
#[cfg(unix)]
fn errno_message(errnum: &c_int) -> String {
    let mut buf = [0u8; 256];
    // SAFETY: `buf` is writable for `buf.len()` bytes.
    let rc = unsafe { libc::strerror_r(*errnum, buf.as_mut_ptr().cast(), buf.len()) };
    match std::ffi::CStr::from_bytes_until_nul(&buf) {
        Ok(msg) if rc == 0 => msg.to_string_lossy().into_owned(),
        _ => format!("Error number {} occurred", convert_error(*errnum)),
    }
}

#[cfg(not(unix))]
fn errno_message(errnum: &c_int) -> String {
    let msg = std::io::Error::from_raw_os_error(*errnum).to_string();
    match msg.rfind(" (os error ") {
        Some(end) => msg[..end].to_owned(),
        None => msg,
    }
}

impl AvError {
    /// Classify a native return code. Returns `None` for `code >= 0`.
    #[must_use]
    pub const fn from_code(code: ErrorCode) -> Option<Self> {
        if code >= 0 {
            return None;
        }
        let err = match code {
            AVERROR_BSF_NOT_FOUND => Self::BsfNotFound,
            AVERROR_BUG => Self::Bug,
            AVERROR_BUG2 => Self::Bug2,
            AVERROR_BUFFER_TOO_SMALL => Self::BufferTooSmall,
            AVERROR_DECODER_NOT_FOUND => Self::DecoderNotFound,
            AVERROR_DEMUXER_NOT_FOUND => Self::DemuxerNotFound,
            AVERROR_ENCODER_NOT_FOUND => Self::EncoderNotFound,
            AVERROR_EOF => Self::Eof,
            AVERROR_EXIT => Self::Exit,
            AVERROR_EXTERNAL => Self::External,
            AVERROR_FILTER_NOT_FOUND => Self::FilterNotFound,
            AVERROR_INVALIDDATA => Self::InvalidData,
            AVERROR_MUXER_NOT_FOUND => Self::MuxerNotFound,
            AVERROR_OPTION_NOT_FOUND => Self::OptionNotFound,
            AVERROR_PATCHWELCOME => Self::PatchWelcome,
            AVERROR_PROTOCOL_NOT_FOUND => Self::ProtocolNotFound,
            AVERROR_STREAM_NOT_FOUND => Self::StreamNotFound,
            AVERROR_UNKNOWN => Self::Unknown,
            AVERROR_EXPERIMENTAL => Self::Experimental,
            AVERROR_INPUT_CHANGED => Self::InputChanged,
            AVERROR_OUTPUT_CHANGED => Self::OutputChanged,
            AVERROR_HTTP_BAD_REQUEST => Self::Http(HttpError::BadRequest),
            AVERROR_HTTP_UNAUTHORIZED => Self::Http(HttpError::Unauthorized),
            AVERROR_HTTP_FORBIDDEN => Self::Http(HttpError::Forbidden),
            AVERROR_HTTP_NOT_FOUND => Self::Http(HttpError::NotFound),
            AVERROR_HTTP_OTHER_4XX => Self::Http(HttpError::Other4xx),
            AVERROR_HTTP_SERVER_ERROR => Self::Http(HttpError::ServerError),
            c if c >= -MAX_ERRNO => Self::Errno(-c),
            c => Self::Other(c),
        };
        Some(err)
    }

    /// The native code this error was classified from.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::BsfNotFound => AVERROR_BSF_NOT_FOUND,
            Self::Bug => AVERROR_BUG,
            Self::Bug2 => AVERROR_BUG2,
            Self::BufferTooSmall => AVERROR_BUFFER_TOO_SMALL,
            Self::DecoderNotFound => AVERROR_DECODER_NOT_FOUND,
            Self::DemuxerNotFound => AVERROR_DEMUXER_NOT_FOUND,
            Self::EncoderNotFound => AVERROR_ENCODER_NOT_FOUND,
            Self::Eof => AVERROR_EOF,
            Self::Exit => AVERROR_EXIT,
            Self::External => AVERROR_EXTERNAL,
            Self::FilterNotFound => AVERROR_FILTER_NOT_FOUND,
            Self::InvalidData => AVERROR_INVALIDDATA,
            Self::MuxerNotFound => AVERROR_MUXER_NOT_FOUND,
            Self::OptionNotFound => AVERROR_OPTION_NOT_FOUND,
            Self::PatchWelcome => AVERROR_PATCHWELCOME,
            Self::ProtocolNotFound => AVERROR_PROTOCOL_NOT_FOUND,
            Self::StreamNotFound => AVERROR_STREAM_NOT_FOUND,
            Self::Unknown => AVERROR_UNKNOWN,
            Self::Experimental => AVERROR_EXPERIMENTAL,
            Self::InputChanged => AVERROR_INPUT_CHANGED,
            Self::OutputChanged => AVERROR_OUTPUT_CHANGED,
            Self::Http(http) => http.code(),
            Self::Errno(errnum) => convert_error(errnum),
            Self::Other(code) => code,
        }
    }

    /// Build the error FFmpeg would return for a POSIX error number.
    ///
    /// `None` unless `errnum` is in `1..=4095`, the range [`from_code`](Self::from_code)
    /// classifies as errno.
    #[must_use]
    pub const fn from_errno(errnum: c_int) -> Option<Self> {
        if errnum >= 1 && errnum <= MAX_ERRNO {
            Some(Self::Errno(errnum))
        } else {
            None
        }
    }

    /// End of stream.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// `EAGAIN`: no output yet, feed more input or retry.
    #[must_use]
    pub const fn is_again(self) -> bool {
        matches!(self, Self::Errno(libc::EAGAIN))
    }

    /// Either [`is_again`](Self::is_again) or [`is_eof`](Self::is_eof).
    #[must_use]
    pub const fn is_filter_end(self) -> bool {
        self.is_again() || self.is_eof()
    }
}

impl From<AvError> for std::io::Error {
    fn from(err: AvError) -> Self {
        match err {
            AvError::Errno(errnum) => Self::from_raw_os_error(errnum),
            AvError::Eof => Self::new(std::io::ErrorKind::UnexpectedEof, err),
            AvError::InvalidData => Self::new(std::io::ErrorKind::InvalidData, err),
            other => Self::other(other),
        }
    }
}

/// Turn a native return value into a `Result`.
///
/// Non-negative values pass through unchanged.
///
/// # Errors
///
/// Returns the classified [`AvError`] when `ret` is negative.
pub fn check(ret: c_int) -> Result<c_int> {
    match AvError::from_code(ret) {
        None => Ok(ret),
        Some(err) => {
            log::trace!("native call returned {ret}: {err}");
            Err(err)
        }
    }
}

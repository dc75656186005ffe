//! FFmpeg library versions, read from headers and from the workspace pin.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

use toml_edit::DocumentMut;

/// Set while re-pinning: a drifted pin warns instead of failing the build.
pub const ENV_REPIN: &str = "AVBRIDGE_REPIN";

/// Workspace metadata key holding the libavutil version the constants were checked against.
pub const PIN_KEY: &str = "verified-libavutil";

/// `major.minor.micro` of one FFmpeg library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibVersion {
    /// `LIB*_VERSION_MAJOR`.
    pub major: u32,
    /// `LIB*_VERSION_MINOR`.
    pub minor: u32,
    /// `LIB*_VERSION_MICRO`.
    pub micro: u32,
}

impl LibVersion {
    /// Build a version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Pull `LIB<NAME>_VERSION_{MAJOR,MINOR,MICRO}` out of header text.
    #[must_use]
    pub fn parse_defines(text: &str, lib: &str) -> Option<Self> {
        let prefix = format!("LIB{}_VERSION_", lib.to_ascii_uppercase());
        let define = |part: &str| {
            let name = format!("{prefix}{part}");
            text.lines().find_map(|line| {
                let mut words = line.split_whitespace();
                if words.next() != Some("#define") || words.next() != Some(name.as_str()) {
                    return None;
                }
                words.next()?.parse::<u32>().ok()
            })
        };
        Some(Self::new(define("MAJOR")?, define("MINOR")?, define("MICRO")?))
    }

    /// Read `<include>/lib<lib>/version.h` (plus `version_major.h` where the tree splits it).
    ///
    /// # Errors
    ///
    /// Fails if `version.h` cannot be read or carries no version defines.
    pub fn from_include(include: &Path, lib: &str) -> io::Result<Self> {
        let dir = include.join(format!("lib{lib}"));
        let mut text = fs::read_to_string(dir.join("version.h"))?;
        if let Ok(major) = fs::read_to_string(dir.join("version_major.h")) {
            text.push_str(&major);
        }
        Self::parse_defines(&text, lib).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("lib{lib}/version.h has no version defines"),
            )
        })
    }

    /// Same major and minor: the constants and layouts this workspace mirrors do not move
    /// within a micro release.
    #[must_use]
    pub const fn is_compatible_with(self, other: Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for LibVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for LibVersion {
    type Err = io::Error;

    fn from_str(s: &str) -> io::Result<Self> {
        let invalid = || io::Error::new(io::ErrorKind::InvalidData, format!("bad version {s:?}"));
        let mut parts = s.trim().split('.').map(str::parse::<u32>);
        let mut next = || parts.next().and_then(std::result::Result::ok).ok_or_else(invalid);
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

/// First libavformat whose `ff_isom_write_vpcc` takes `(logctx, pb, data, len, par)`.
pub const VPCC_WITH_DATA_SINCE: LibVersion = LibVersion::new(60, 16, 100);

/// Whether this libavformat declares the five-argument `ff_isom_write_vpcc`.
#[must_use]
pub fn vpcc_takes_data(avformat: LibVersion) -> bool {
    avformat >= VPCC_WITH_DATA_SINCE
}

/// `[workspace.metadata.avbridge] verified-libavutil` from a workspace manifest.
///
/// # Errors
///
/// Fails if the manifest is not TOML or the pinned value is not a version.
pub fn pinned_avutil(manifest: &str) -> io::Result<Option<LibVersion>> {
    let doc = manifest
        .parse::<DocumentMut>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    doc.get("workspace")
        .and_then(|w| w.get("metadata"))
        .and_then(|m| m.get("avbridge"))
        .and_then(|a| a.get(PIN_KEY))
        .and_then(toml_edit::Item::as_str)
        .map(str::parse)
        .transpose()
}

/// How headers on the build machine relate to the pinned version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCheck {
    /// Nothing pinned yet.
    Unpinned,
    /// Same major and minor as the pin.
    Matches,
    /// Headers are a different release than the one the constants were checked against.
    Drifted {
        /// Version in the workspace manifest.
        pinned: LibVersion,
        /// Version found in the headers.
        found: LibVersion,
    },
}

/// Compare the headers' libavutil against the workspace pin.
#[must_use]
pub fn check_pin(pinned: Option<LibVersion>, found: LibVersion) -> PinCheck {
    match pinned {
        None => PinCheck::Unpinned,
        Some(pinned) if pinned.is_compatible_with(found) => PinCheck::Matches,
        Some(pinned) => PinCheck::Drifted { pinned, found },
    }
}

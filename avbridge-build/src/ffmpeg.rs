//! FFmpeg install discovery.

use std::env;
use std::path::{Path, PathBuf};

/// Directory containing `libavutil/` and friends.
pub const ENV_INCLUDE: &str = "AVBRIDGE_FFMPEG_INCLUDE";
/// Root of an FFmpeg source tree (for internal headers such as `libavformat/url.h`).
pub const ENV_SOURCE: &str = "AVBRIDGE_FFMPEG_SOURCE";
/// Install prefix; `include/` and `lib/` are appended.
pub const ENV_FFMPEG_DIR: &str = "FFMPEG_DIR";
/// Extra library search path, tried before the prefix's `lib/`.
pub const ENV_LINK_SEARCH: &str = "AVBRIDGE_LINK_SEARCH";

const FALLBACK_INCLUDES: &[&str] = &["/usr/include", "/usr/local/include", "/opt/homebrew/include"];

/// Where FFmpeg lives on the build machine, as far as the environment says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FfmpegInstall {
    include_dir: Option<PathBuf>,
    source_dir: Option<PathBuf>,
    lib_dirs: Vec<PathBuf>,
}

impl FfmpegInstall {
    /// Read the environment and probe the usual include directories.
    ///
    /// Emits `cargo:rerun-if-env-changed` for every variable consulted.
    #[must_use]
    pub fn from_env() -> Self {
        for var in [ENV_INCLUDE, ENV_SOURCE, ENV_FFMPEG_DIR, ENV_LINK_SEARCH] {
            println!("cargo:rerun-if-env-changed={var}");
        }
        Self::from_lookup(|var| env::var_os(var).map(PathBuf::from), has_avutil)
    }

    fn from_lookup(
        var: impl Fn(&str) -> Option<PathBuf>,
        probe: impl Fn(&Path) -> bool,
    ) -> Self {
        let prefix = var(ENV_FFMPEG_DIR);

        let include_dir = var(ENV_INCLUDE)
            .or_else(|| prefix.as_ref().map(|p| p.join("include")))
            .filter(|dir| probe(dir))
            .or_else(|| {
                FALLBACK_INCLUDES
                    .iter()
                    .map(PathBuf::from)
                    .find(|dir| probe(dir))
            });

        let mut lib_dirs = Vec::new();
        lib_dirs.extend(var(ENV_LINK_SEARCH));
        lib_dirs.extend(prefix.map(|p| p.join("lib")));

        Self {
            include_dir,
            source_dir: var(ENV_SOURCE),
            lib_dirs,
        }
    }

    /// Directory holding the public FFmpeg headers, if any were found.
    #[must_use]
    pub fn include_dir(&self) -> Option<&Path> {
        self.include_dir.as_deref()
    }

    /// FFmpeg source tree, if one was configured.
    #[must_use]
    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Library search directories, in priority order.
    #[must_use]
    pub fn lib_dirs(&self) -> &[PathBuf] {
        &self.lib_dirs
    }

    /// Link `lib<name>` from this install.
    pub fn link(&self, name: &str) {
        for dir in &self.lib_dirs {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        println!("cargo:rustc-link-lib={name}");
    }
}

fn has_avutil(dir: &Path) -> bool {
    dir.join("libavutil").join("error.h").is_file()
}

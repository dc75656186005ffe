//! Build script for the ABI check.
//!
//! Always compiles the transcribed `URLContext` reference. With FFmpeg headers
//! on the machine it also compiles a lookup of every header macro the crates
//! re-export, and with a source tree the real `URLContext` layout. Header
//! libavutil is checked against the version pinned in the workspace manifest.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use avbridge_build::{
    CReference, ENV_REPIN, FfmpegInstall, LibVersion, PinCheck, check_pin, pinned_avutil,
};

const HEADERS: &[&str] = &[
    "libavutil/error.h",
    "libavutil/avutil.h",
    "libavutil/opt.h",
    "libavutil/channel_layout.h",
    "libavformat/avio.h",
];

const SIGNED: &[&str] = &[
    "AVERROR_BSF_NOT_FOUND",
    "AVERROR_BUG",
    "AVERROR_BUFFER_TOO_SMALL",
    "AVERROR_DECODER_NOT_FOUND",
    "AVERROR_DEMUXER_NOT_FOUND",
    "AVERROR_ENCODER_NOT_FOUND",
    "AVERROR_EOF",
    "AVERROR_EXIT",
    "AVERROR_EXTERNAL",
    "AVERROR_FILTER_NOT_FOUND",
    "AVERROR_INVALIDDATA",
    "AVERROR_MUXER_NOT_FOUND",
    "AVERROR_OPTION_NOT_FOUND",
    "AVERROR_PATCHWELCOME",
    "AVERROR_PROTOCOL_NOT_FOUND",
    "AVERROR_STREAM_NOT_FOUND",
    "AVERROR_BUG2",
    "AVERROR_UNKNOWN",
    "AVERROR_EXPERIMENTAL",
    "AVERROR_INPUT_CHANGED",
    "AVERROR_OUTPUT_CHANGED",
    "AVERROR_HTTP_BAD_REQUEST",
    "AVERROR_HTTP_UNAUTHORIZED",
    "AVERROR_HTTP_FORBIDDEN",
    "AVERROR_HTTP_NOT_FOUND",
    "AVERROR_HTTP_OTHER_4XX",
    "AVERROR_HTTP_SERVER_ERROR",
    "AV_NOPTS_VALUE",
    "AV_TIME_BASE",
    "AV_OPT_SEARCH_CHILDREN",
    "AV_OPT_SEARCH_FAKE_OBJ",
    "AVIO_FLAG_READ",
    "AVIO_FLAG_WRITE",
    "AVIO_FLAG_READ_WRITE",
    "AVIO_FLAG_NONBLOCK",
    "AVIO_FLAG_DIRECT",
];

const MASKS: &[&str] = &[
    "AV_CH_FRONT_LEFT",
    "AV_CH_FRONT_RIGHT",
    "AV_CH_FRONT_CENTER",
    "AV_CH_LOW_FREQUENCY",
    "AV_CH_BACK_LEFT",
    "AV_CH_BACK_RIGHT",
    "AV_CH_FRONT_LEFT_OF_CENTER",
    "AV_CH_FRONT_RIGHT_OF_CENTER",
    "AV_CH_BACK_CENTER",
    "AV_CH_SIDE_LEFT",
    "AV_CH_SIDE_RIGHT",
    "AV_CH_TOP_CENTER",
    "AV_CH_TOP_FRONT_LEFT",
    "AV_CH_TOP_FRONT_CENTER",
    "AV_CH_TOP_FRONT_RIGHT",
    "AV_CH_TOP_BACK_LEFT",
    "AV_CH_TOP_BACK_CENTER",
    "AV_CH_TOP_BACK_RIGHT",
    "AV_CH_STEREO_LEFT",
    "AV_CH_STEREO_RIGHT",
    "AV_CH_WIDE_LEFT",
    "AV_CH_WIDE_RIGHT",
    "AV_CH_SURROUND_DIRECT_LEFT",
    "AV_CH_SURROUND_DIRECT_RIGHT",
    "AV_CH_LOW_FREQUENCY_2",
    "AV_CH_TOP_SIDE_LEFT",
    "AV_CH_TOP_SIDE_RIGHT",
    "AV_CH_BOTTOM_FRONT_CENTER",
    "AV_CH_BOTTOM_FRONT_LEFT",
    "AV_CH_BOTTOM_FRONT_RIGHT",
    "AV_CH_LAYOUT_NATIVE",
    "AV_CH_LAYOUT_MONO",
    "AV_CH_LAYOUT_STEREO",
    "AV_CH_LAYOUT_2POINT1",
    "AV_CH_LAYOUT_2_1",
    "AV_CH_LAYOUT_SURROUND",
    "AV_CH_LAYOUT_3POINT1",
    "AV_CH_LAYOUT_4POINT0",
    "AV_CH_LAYOUT_4POINT1",
    "AV_CH_LAYOUT_2_2",
    "AV_CH_LAYOUT_QUAD",
    "AV_CH_LAYOUT_5POINT0",
    "AV_CH_LAYOUT_5POINT1",
    "AV_CH_LAYOUT_5POINT0_BACK",
    "AV_CH_LAYOUT_5POINT1_BACK",
    "AV_CH_LAYOUT_6POINT0",
    "AV_CH_LAYOUT_6POINT0_FRONT",
    "AV_CH_LAYOUT_HEXAGONAL",
    "AV_CH_LAYOUT_6POINT1",
    "AV_CH_LAYOUT_6POINT1_BACK",
    "AV_CH_LAYOUT_6POINT1_FRONT",
    "AV_CH_LAYOUT_7POINT0",
    "AV_CH_LAYOUT_7POINT0_FRONT",
    "AV_CH_LAYOUT_7POINT1",
    "AV_CH_LAYOUT_7POINT1_WIDE",
    "AV_CH_LAYOUT_7POINT1_WIDE_BACK",
    "AV_CH_LAYOUT_OCTAGONAL",
    "AV_CH_LAYOUT_HEXADECAGONAL",
    "AV_CH_LAYOUT_STEREO_DOWNMIX",
];

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(has_ffmpeg_headers)");
    println!("cargo:rustc-check-cfg=cfg(has_ffmpeg_source)");
    println!("cargo:rustc-check-cfg=cfg(avutil_pinned)");

    CReference::new("urlcontext_reference")
        .file("c/urlcontext.c")
        .compile()?;

    let install = FfmpegInstall::from_env();

    if let Some(include) = install.include_dir() {
        check_avutil_pin(include)?;

        let mut headers = CReference::new("header_reference").include_dir(include);
        for header in HEADERS {
            headers = headers.header(*header);
        }
        headers
            .signed_constants("header_int_constant", SIGNED)
            .unsigned_constants("header_mask_constant", MASKS)
            .compile()?;
        println!("cargo:rustc-cfg=has_ffmpeg_headers");
    } else {
        println!("cargo:warning=FFmpeg headers not found; constant checks skipped");
    }

    if let Some(source) = install.source_dir() {
        let mut real = CReference::new("ffmpeg_urlcontext").include_dir(source);
        if let Some(include) = install.include_dir() {
            real = real.include_dir(include);
        }
        real.file("c/ffmpeg_urlcontext.c").compile()?;
        println!("cargo:rustc-cfg=has_ffmpeg_source");
    }

    Ok(())
}

/// Refuse headers from a different libavutil than the one the constants were verified against.
fn check_avutil_pin(include: &Path) -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={ENV_REPIN}");
    let found = LibVersion::from_include(include, "avutil")?;
    println!("cargo:rustc-env=AVBRIDGE_FOUND_AVUTIL={found}");

    let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").map_err(io::Error::other)?)
        .join("../../Cargo.toml");
    println!("cargo:rerun-if-changed={}", manifest.display());
    let pinned = pinned_avutil(&fs::read_to_string(&manifest)?)?;

    match check_pin(pinned, found) {
        PinCheck::Unpinned => {
            println!("cargo:warning=no libavutil pin in the workspace manifest; found {found}");
        }
        PinCheck::Matches => println!("cargo:rustc-cfg=avutil_pinned"),
        PinCheck::Drifted { pinned, found } if env::var_os(ENV_REPIN).is_some() => {
            println!("cargo:warning=re-pinning: headers are libavutil {found}, pin was {pinned}");
        }
        PinCheck::Drifted { pinned, found } => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "headers are libavutil {found} but constants were verified against {pinned}; \
                     run `avbridge-test abi --pin` once the differences are reviewed"
                ),
            ));
        }
    }
    Ok(())
}

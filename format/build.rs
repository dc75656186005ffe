//! Build script for avbridge-format.

use std::{env, io};

use avbridge_build::{FfmpegInstall, LibVersion, vpcc_takes_data};

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(vpcc_with_data)");

    if env::var_os("CARGO_FEATURE_LINK_INTERNAL").is_none() {
        return Ok(());
    }

    let install = FfmpegInstall::from_env();
    // ff_isom_write_vpcc changed arity in libavformat 60.16; the declaration has to match.
    let include = install.include_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "link-internal needs FFmpeg headers to pick the ff_isom_write_vpcc signature; \
             set AVBRIDGE_FFMPEG_INCLUDE or FFMPEG_DIR",
        )
    })?;
    let avformat = LibVersion::from_include(include, "avformat")?;
    if vpcc_takes_data(avformat) {
        println!("cargo:rustc-cfg=vpcc_with_data");
    }

    install.link("avformat");
    install.link("avutil");
    Ok(())
}

use anyhow::{Context, Result};
use avbridge_build::{ENV_REPIN, LibVersion, PIN_KEY};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::Command;
use toml_edit::{DocumentMut, Item, Table, value};

#[derive(Parser)]
#[command(name = "avbridge-test")]
#[command(about = "CLI runner for avbridge ABI checks and device harnesses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check layouts and constants against an FFmpeg install
    Abi {
        /// Directory containing libavutil/ and libavformat/ headers
        #[arg(long)]
        include: Option<PathBuf>,
        /// FFmpeg source tree, to check URLContext against url.h itself
        #[arg(long)]
        source: Option<PathBuf>,
        /// Record the verified libavutil version in the workspace manifest
        #[arg(long)]
        pin: bool,
    },
    /// Build the display harness for tvOS
    Tvos {
        /// Build for the simulator instead of a device
        #[arg(long)]
        simulator: bool,
        /// Build with --release
        #[arg(long)]
        release: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Abi {
            include,
            source,
            pin,
        } => run_abi(include.as_deref(), source.as_deref(), pin),
        Commands::Tvos { simulator, release } => run_tvos(simulator, release),
    }
}

fn root_dir() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .context("Failed to locate workspace root")
}

fn run_abi(include: Option<&Path>, source: Option<&Path>, pin: bool) -> Result<()> {
    println!("{}", "🔍 Running ABI checks...".green().bold());

    let root_dir = root_dir()?;
    let mut cmd = Command::new("cargo");
    cmd.current_dir(&root_dir)
        .args(["test", "-p", "avbridge-abi-check"]);

    let include = include
        .map(|dir| std::fs::canonicalize(dir).context("Failed to find include directory"))
        .transpose()?;
    if let Some(dir) = &include {
        if !dir.join("libavutil/error.h").exists() {
            anyhow::bail!("No libavutil/error.h under {}", dir.display());
        }
        println!("Headers: {}", dir.display());
        cmd.env("AVBRIDGE_FFMPEG_INCLUDE", dir);
    } else {
        println!(
            "{}",
            "⚠️ No --include given; the build script will probe the usual locations.".yellow()
        );
    }

    if let Some(dir) = source {
        let dir = std::fs::canonicalize(dir).context("Failed to find source tree")?;
        if !dir.join("libavformat/url.h").exists() {
            anyhow::bail!("No libavformat/url.h under {}", dir.display());
        }
        println!("Source:  {}", dir.display());
        cmd.env("AVBRIDGE_FFMPEG_SOURCE", dir);
    }

    if pin {
        // The build script would otherwise refuse headers that moved past the old pin.
        cmd.env(ENV_REPIN, "1");
    }

    let status = cmd.status().context("Failed to run cargo test")?;
    if !status.success() {
        anyhow::bail!("ABI checks failed");
    }
    println!("{}", "✅ ABI checks passed.".green().bold());

    if pin {
        let dir = include.context("--pin needs --include")?;
        let version = LibVersion::from_include(&dir, "avutil")
            .context("Failed to read the libavutil version")?;
        pin_version(&root_dir.join("Cargo.toml"), &version.to_string())?;
        println!("Pinned libavutil {version}");
    }

    Ok(())
}

fn run_tvos(simulator: bool, release: bool) -> Result<()> {
    println!("{}", "🚀 Building tvOS display harness...".green().bold());

    let target = if simulator {
        "aarch64-apple-tvos-sim"
    } else {
        "aarch64-apple-tvos"
    };

    // tvOS is tier 3: needs nightly and build-std.
    let mut args = vec![
        "+nightly",
        "build",
        "-Z",
        "build-std",
        "--target",
        target,
        "-p",
        "avbridge-display-test",
    ];
    if release {
        args.push("--release");
    }

    let root_dir = root_dir()?;
    let status = Command::new("cargo")
        .current_dir(&root_dir)
        .args(&args)
        .status()
        .context("Failed to run cargo build")?;

    if !status.success() {
        anyhow::bail!("tvOS build failed");
    }

    let profile = if release { "release" } else { "debug" };
    let binary = root_dir
        .join("target")
        .join(target)
        .join(profile)
        .join("display-test");
    println!("{}", "✅ Harness built.".green().bold());
    println!("Binary: {}", binary.display());
    if simulator {
        println!("Run with: xcrun simctl spawn booted {}", binary.display());
    }

    Ok(())
}

/// Write `[workspace.metadata.avbridge] verified-libavutil = "<version>"`.
fn pin_version(manifest: &Path, version: &str) -> Result<()> {
    let text = std::fs::read_to_string(manifest).context("Failed to read workspace Cargo.toml")?;
    let mut doc = text
        .parse::<DocumentMut>()
        .context("Failed to parse workspace Cargo.toml")?;
    set_pin(&mut doc, version)?;
    std::fs::write(manifest, doc.to_string()).context("Failed to write workspace Cargo.toml")
}

fn set_pin(doc: &mut DocumentMut, version: &str) -> Result<()> {
    let workspace = doc
        .get_mut("workspace")
        .and_then(Item::as_table_mut)
        .context("Manifest has no [workspace] table")?;
    let mut implicit = Table::new();
    implicit.set_implicit(true);
    let metadata = workspace
        .entry("metadata")
        .or_insert(Item::Table(implicit))
        .as_table_mut()
        .context("workspace.metadata is not a table")?;
    let avbridge = metadata
        .entry("avbridge")
        .or_insert(Item::Table(Table::new()))
        .as_table_mut()
        .context("workspace.metadata.avbridge is not a table")?;
    avbridge[PIN_KEY] = value(version);
    Ok(())
}

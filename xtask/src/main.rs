//! Build automation tasks for Letter Runner
//!
//! Usage:
//!   cargo xtask build-web            # WASM build in dist/web
//!   cargo xtask package-itch         # dist/letter-runner-itch.zip for itch.io
//!   cargo xtask package-native       # Release binary + assets in dist/native/<os>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const GAME: &str = "letter-runner";
const MQ_JS_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Letter Runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM plus the page that hosts it
    BuildWeb {
        /// Debug build instead of release (faster to compile)
        #[arg(long)]
        debug: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a native release with the assets next to it
    PackageNative,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { debug } => build_web(debug),
        Commands::PackageItch => package_itch(),
        Commands::PackageNative => package_native(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively (missing source is fine, assets are optional)
fn copy_assets(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        println!("No {} directory, game will run with fallbacks", src.display());
        return Ok(());
    }
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_assets(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)
                .with_context(|| format!("Copying {}", src_path.display()))?;
        }
    }
    Ok(())
}

/// Start from an empty directory
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

fn build_web(debug: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");
    let profile = if debug { "debug" } else { "release" };

    println!("Building WASM ({})...", profile);
    let mut cargo = Command::new("cargo");
    cargo
        .current_dir(&root)
        .args(["build", "--target", "wasm32-unknown-unknown"]);
    if !debug {
        cargo.arg("--release");
    }
    run_cmd(&mut cargo)?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", GAME);
    std::fs::copy(
        root.join(format!("target/wasm32-unknown-unknown/{}/{}", profile, wasm)),
        dist.join(&wasm),
    )
    .context("WASM binary not found")?;

    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))
        .context("web/index.html not found")?;

    download_file(MQ_JS_BUNDLE, &dist.join("mq_js_bundle.js"))?;

    copy_assets(&root.join("assets"), &dist.join("assets"))?;

    println!("Web build complete: dist/web/");
    println!("Serve it with any static file server, e.g. `python3 -m http.server -d dist/web`");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", GAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", &format!("../{}", zip_name), "."]),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

fn package_native() -> Result<()> {
    let root = project_root()?;
    let os = std::env::consts::OS;
    let dist = root.join(format!("dist/native/{}", os));

    println!("Building native release for {}...", os);
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", GAME]),
    )?;

    fresh_dir(&dist)?;

    let binary = format!("{}{}", GAME, std::env::consts::EXE_SUFFIX);
    std::fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .context("Release binary not found")?;

    copy_assets(&root.join("assets"), &dist.join("assets"))?;

    println!("Native build complete: dist/native/{}/", os);
    Ok(())
}

//! Packaging tasks for rectrun
//!
//!   cargo xtask build-web [--dev]        wasm32 build staged in dist/web/
//!   cargo xtask package-native           release build staged in dist/native/<os>/
//!
//! Both stage `assets/` next to the binary, since config and levels are
//! read relative to it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN: &str = "rectrun";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
/// JS loader matching the macroquad version in Cargo.toml
const MQ_JS_BUNDLE_URL: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask", about = "Packaging tasks for rectrun")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build for the browser and stage dist/web
    BuildWeb {
        /// Prefix the page title with [DEV]
        #[arg(long)]
        dev: bool,
    },
    /// Build a native release and stage dist/native/<os>
    PackageNative {
        /// Folder name under dist/native (defaults to the host OS)
        #[arg(long)]
        os: Option<String>,
    },
}

fn main() -> Result<()> {
    let root = workspace_root()?;
    match Cli::parse().task {
        Task::BuildWeb { dev } => build_web(&root, dev),
        Task::PackageNative { os } => package_native(&root, os.as_deref().unwrap_or(std::env::consts::OS)),
    }
}

fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// `cargo build --release --bin rectrun` plus `extra` args, run from the root
fn cargo_release(root: &Path, extra: &[&str]) -> Result<()> {
    let status = Command::new(env!("CARGO"))
        .current_dir(root)
        .args(["build", "--release", "--bin", BIN])
        .args(extra)
        .status()
        .context("could not run cargo")?;
    if !status.success() {
        bail!("cargo build failed ({})", status);
    }
    Ok(())
}

/// Empty `dir`, creating it if needed
fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("clearing {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Mirror the `assets/` tree into `dest/assets`
fn stage_assets(root: &Path, dest: &Path) -> Result<()> {
    let mut pending = vec![PathBuf::from("assets")];
    while let Some(rel) = pending.pop() {
        fs::create_dir_all(dest.join(&rel))?;
        for entry in fs::read_dir(root.join(&rel))? {
            let entry = entry?;
            let child = rel.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                pending.push(child);
            } else {
                copy_file(&entry.path(), &dest.join(&child))?;
            }
        }
    }
    Ok(())
}

fn build_web(root: &Path, dev: bool) -> Result<()> {
    println!("Building {} for {}...", BIN, WASM_TARGET);
    cargo_release(root, &["--target", WASM_TARGET])?;

    let dist = root.join("dist/web");
    reset_dir(&dist)?;

    let wasm = format!("{}.wasm", BIN);
    copy_file(&root.join("target").join(WASM_TARGET).join("release").join(&wasm), &dist.join(&wasm))?;

    let mut page = fs::read_to_string(root.join("web/index.html")).context("reading web/index.html")?;
    if dev {
        page = page.replacen("<title>", "<title>[DEV] ", 1);
    }
    fs::write(dist.join("index.html"), page)?;

    println!("Fetching {}...", MQ_JS_BUNDLE_URL);
    let status = Command::new("curl")
        .args(["-fsSL", "-o"])
        .arg(dist.join("mq_js_bundle.js"))
        .arg(MQ_JS_BUNDLE_URL)
        .status()
        .context("could not run curl")?;
    if !status.success() {
        bail!("downloading mq_js_bundle.js failed ({})", status);
    }

    stage_assets(root, &dist)?;
    println!("Done: {}", dist.display());
    Ok(())
}

fn package_native(root: &Path, os: &str) -> Result<()> {
    println!("Building {} release for {}...", BIN, os);
    cargo_release(root, &[])?;

    let dist = root.join("dist/native").join(os);
    reset_dir(&dist)?;

    let exe = format!("{}{}", BIN, std::env::consts::EXE_SUFFIX);
    copy_file(&root.join("target/release").join(&exe), &dist.join(&exe))?;

    stage_assets(root, &dist)?;
    println!("Done: {}", dist.display());
    Ok(())
}

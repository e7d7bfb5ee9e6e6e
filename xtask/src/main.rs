//! Custom cargo commands for hubsearch.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask index     - Validate the shipped search index
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// The index the site ships.
const SHIPPED_INDEX: &str = "data/search-index.json";

/// Queries whose scores are part of the site's behavior, with the expected
/// score list for the shipped index.
const REFERENCE_QUERIES: &[(&str, &[u32])] = &[
    ("osmosis", &[200, 200]),
    ("cell", &[335, 290, 200, 200]),
    ("b2", &[80, 80, 80, 80, 80]),
    ("water", &[95, 50]),
    ("cell membrane", &[130, 100, 70, 70, 20]),
    ("xyz123notfound", &[]),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("index") => index()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + index)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  index     Validate the shipped index and its reference queries
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("hubsearch Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Shipped index
    println!("[4/4] Checking shipped index...");
    index()?;
    println!("✓ Index valid, reference scores unchanged\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Validate the shipped index, then check the reference queries still
/// score the way the live site does.
fn index() -> Result<()> {
    run_cargo(&["run", "--quiet", "--", "validate", SHIPPED_INDEX])?;

    for (query, expected) in REFERENCE_QUERIES {
        let json = cargo_output(&["run", "--quiet", "--", "search", SHIPPED_INDEX, query, "--json"])?;
        let scores = extract_scores(&json)
            .with_context(|| format!("parsing `search --json` output for {:?}", query))?;
        if scores != *expected {
            bail!(
                "query {:?}: expected scores {:?}, got {:?}",
                query,
                expected,
                scores
            );
        }
        println!("  ✓ {:<16} {:?}", query, scores);
    }

    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn cargo_output(args: &[&str]) -> Result<String> {
    let root = project_root()?;

    let output = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .output()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !output.status.success() {
        bail!(
            "cargo {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8(output.stdout).context("cargo output was not UTF-8")
}

/// The parts of `search --json` output the reference check reads.
#[derive(Deserialize)]
struct SearchOutput {
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    score: u32,
}

/// Scores from `search --json` output, in rank order.
fn extract_scores(json: &str) -> Result<Vec<u32>> {
    let output: SearchOutput = serde_json::from_str(json)?;
    Ok(output.results.into_iter().map(|hit| hit.score).collect())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

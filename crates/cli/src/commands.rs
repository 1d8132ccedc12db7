// FILE: crates/cli/src/commands.rs

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use podfeed_config::{write_atomic, ManifestManager};
use std::path::{Path, PathBuf};

/// Manifest file used by `init` when no path is given
pub const DEFAULT_MANIFEST: &str = "podcast.toml";

/// Where a built feed ended up
#[derive(Debug, PartialEq, Eq)]
pub enum FeedDestination {
    File(PathBuf),
    Stdout(String),
}

/// Render the feed for `build <MANIFEST> [-o FILE]`
pub fn build(matches: &ArgMatches) -> Result<()> {
    let manifest_path = required_path(matches, "manifest")?;
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    match build_feed(&manifest_path, output.as_deref())? {
        FeedDestination::File(path) => {
            eprintln!(
                "{} Feed written to {}",
                style("✓").green().bold(),
                path.display()
            );
        }
        FeedDestination::Stdout(feed) => print!("{}", feed),
    }

    Ok(())
}

/// Check a manifest for `validate <MANIFEST>`; fails when problems are found
pub fn validate(matches: &ArgMatches) -> Result<()> {
    let manifest_path = required_path(matches, "manifest")?;
    let problems = validate_manifest(&manifest_path)?;

    if problems.is_empty() {
        println!(
            "{} {} is valid",
            style("✓").green().bold(),
            manifest_path.display()
        );
        return Ok(());
    }

    println!(
        "\n{} Problems in {}",
        style(problems.len()).bold().red(),
        manifest_path.display()
    );
    println!("{}", "=".repeat(80));
    for problem in &problems {
        println!("  {} {}", style("✗").red(), problem);
    }

    bail!("{} has {} problem(s)", manifest_path.display(), problems.len())
}

/// Write a template manifest for `init [PATH]`
pub fn init(matches: &ArgMatches) -> Result<()> {
    let manifest_path = required_path(matches, "path")?;

    if init_manifest(&manifest_path)? {
        println!(
            "{} Created {}",
            style("✓").green().bold(),
            manifest_path.display()
        );
        println!("  Edit it, then run: podfeed build {}", manifest_path.display());
    } else {
        println!(
            "{} {} already exists, leaving it untouched",
            style("!").yellow().bold(),
            manifest_path.display()
        );
    }

    Ok(())
}

/// Renders the manifest's feed into `output`, the manifest's output path,
/// or returns it for stdout, in that order of preference
pub fn build_feed(manifest_path: &Path, output: Option<&Path>) -> Result<FeedDestination> {
    let manager = manager_for(manifest_path)?;
    let manifest = manager
        .load_with_env_overrides()
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    if let Err(errors) = manifest.validate() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Manifest is invalid: {}", messages.join("; "));
    }

    let feed = manager.render(&manifest).context("Failed to render feed")?;
    log::debug!(
        "Rendered {} episodes into {} bytes",
        manifest.episodes.len(),
        feed.len()
    );

    let destination = output
        .map(Path::to_path_buf)
        .or_else(|| manager.output_path(&manifest));

    match destination {
        Some(path) => {
            write_atomic(&path, &feed)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Feed written to {}", path.display());
            Ok(FeedDestination::File(path))
        }
        None => Ok(FeedDestination::Stdout(feed)),
    }
}

/// Returns every validation problem in the manifest
pub fn validate_manifest(manifest_path: &Path) -> Result<Vec<String>> {
    manager_for(manifest_path)?
        .validate()
        .with_context(|| format!("Failed to load {}", manifest_path.display()))
}

/// Writes the template manifest; false if the file already exists
pub fn init_manifest(manifest_path: &Path) -> Result<bool> {
    Ok(manager_for(manifest_path)?.initialize()?)
}

fn manager_for(manifest_path: &Path) -> Result<ManifestManager> {
    ManifestManager::new(manifest_path)
        .with_context(|| format!("Invalid manifest path {}", manifest_path.display()))
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    matches
        .get_one::<String>(name)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("{} is required", name))
}

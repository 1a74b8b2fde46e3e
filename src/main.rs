mod analyzer;
mod cli;
mod config;
mod error;
mod manifest;
mod node_modules;
mod package_manager;
mod registry;
mod render;
mod report;
mod theme;
mod utils;

#[cfg(test)]
mod tests;

use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;

use crate::analyzer::{AnalyzerOptions, FileScanner, UsageAnalyzer};
use crate::cli::Args;
use crate::package_manager::PackageManager;
use crate::registry::RegistryClient;
use crate::report::Report;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{} {err}", theme::error("Error running dep-mole:").bold());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let selection = args.selection()?;
    let root = args.path.as_path();

    let manifest = manifest::read_manifest(root)?;
    debug!(
        "declared: {} prod, {} dev, {} peer",
        manifest.dependencies.len(),
        manifest.dev_dependencies.len(),
        manifest.peer_dependencies.len()
    );

    let spinner = utils::create_spinner("Scanning source files...");
    let analysis = FileScanner.analyze(root, &AnalyzerOptions::default())?;
    spinner.finish_and_clear();
    debug!(
        "analysis: {} unused prod, {} unused dev, {} missing",
        analysis.unused_dependencies.len(),
        analysis.unused_dev_dependencies.len(),
        analysis.missing.len()
    );

    let mut candidates = manifest.declared_names();
    candidates.extend(analysis.missing.keys().cloned());
    let installed = node_modules::installed_packages(root, &candidates);

    let report = Report::build(manifest, &analysis, &installed);
    debug!("classified {} records", report.records().len());
    let package_manager = PackageManager::detect(root);
    debug!("detected package manager: {package_manager}");
    let view = report.select(&selection);
    render::print_report(&report, &view, root, package_manager);

    if args.verify {
        verify(&view.names())?;
    }

    Ok(())
}

/// Looks the displayed packages up on the registry, one by one, printing
/// a line per result. Lookup failures read as "not found" and never stop
/// the pass.
fn verify(names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    render::print_verify_header();
    let client = RegistryClient::new()?;
    let bar = utils::create_bar(names.len() as u64, "Checking the npm registry...");
    for name in names {
        let result = client.lookup(name);
        render::print_verification(&result);
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(())
}

//! update-translations: run the CMake `update_translations` target for a preset.

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use std::io::Write;
use std::path::Path;
use update_translations_core::{
    BuildCommand, DEFAULT_BUILD_TOOL, Invocation, Preset, ProcessRunner, RepositoryRoot,
    TranslationsConfig, update_translations,
};

/// This crate lives at `crates/update-translations-cli`, two levels under the
/// repository root.
const ANCHOR_DIR: &str = env!("CARGO_MANIFEST_DIR");

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let invocation = resolve(&cli)?;
    let output = update_translations(&invocation, &ProcessRunner)
        .with_context(|| format!("Updating translations for preset '{}' failed", cli.preset))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write build output")?;
    stdout.flush().context("Failed to write build output")?;
    Ok(())
}

fn resolve(cli: &Cli) -> anyhow::Result<Invocation> {
    let root = match &cli.root {
        Some(dir) => RepositoryRoot::from_path(dir)?,
        None => RepositoryRoot::from_anchor(Path::new(ANCHOR_DIR))?,
    };
    tracing::debug!(root = %root.path().display(), "resolved repository root");

    let config = load_config(cli, root.path())?;
    let program = cli
        .cmake
        .clone()
        .or(config.cmake)
        .unwrap_or_else(|| DEFAULT_BUILD_TOOL.to_string());

    let command = BuildCommand::new(program, Preset::new(cli.preset.clone()));
    tracing::debug!(%command, "resolved build command");
    Ok(Invocation::new(command, root))
}

fn load_config(cli: &Cli, root: &Path) -> anyhow::Result<TranslationsConfig> {
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loading config");
        return TranslationsConfig::load(path);
    }

    let discovered = TranslationsConfig::discover(root);
    if let Some(path) = &discovered {
        tracing::debug!(path = %path.display(), "loading config");
    }
    let (config, warning) = TranslationsConfig::load_or_default(discovered.as_deref());
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

//! Cross-crate integration tests for the contract between the CLI and
//! update-translations-core.
//!
//! These mirror how the `update-translations` binary drives the library:
//! resolve a root, layer the config, build the command, run it.

use std::path::{Path, PathBuf};
use update_translations_core::{
    BuildCommand, CONFIG_FILE_NAME, CommandRunner, DEFAULT_BUILD_TOOL, InvokeError, InvokeResult,
    Invocation, Preset, RepositoryRoot, TranslationsConfig, UPDATE_TRANSLATIONS_TARGET,
    update_translations,
};

#[derive(Debug)]
struct CannedRunner(&'static [u8]);

impl CommandRunner for CannedRunner {
    fn run(&self, command: &BuildCommand, cwd: &Path) -> InvokeResult<Vec<u8>> {
        assert!(cwd.is_absolute(), "root should be canonical: {}", cwd.display());
        assert_eq!(command.args()[4], UPDATE_TRANSLATIONS_TARGET);
        Ok(self.0.to_vec())
    }
}

#[test]
fn cli_default_anchor_resolves_to_workspace_root() {
    let root = env!("CARGO_MANIFEST_DIR");
    let anchor = PathBuf::from(root).join("crates").join("update-translations-cli");

    let resolved = RepositoryRoot::from_anchor(&anchor).unwrap();
    assert_eq!(resolved.path(), Path::new(root).canonicalize().unwrap());
}

#[test]
fn cli_config_layering_uses_root_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "cmake = \"cmake3\"\n").unwrap();

    let root = RepositoryRoot::from_path(dir.path()).unwrap();
    let discovered = TranslationsConfig::discover(root.path());
    let (config, warning) = TranslationsConfig::load_or_default(discovered.as_deref());
    assert!(warning.is_none());

    let program = config.cmake.unwrap_or_else(|| DEFAULT_BUILD_TOOL.to_string());
    let command = BuildCommand::new(program, Preset::new("dev"));
    assert_eq!(
        command.to_string(),
        "cmake3 --build --preset dev --target update_translations"
    );
}

#[test]
fn cli_update_returns_decoded_output() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = Invocation::new(
        BuildCommand::new(DEFAULT_BUILD_TOOL, Preset::new("dev")),
        RepositoryRoot::from_path(dir.path()).unwrap(),
    );

    let out = update_translations(&invocation, &CannedRunner(b"Updating 'en_GB.ts'...\n")).unwrap();
    assert_eq!(out, "Updating 'en_GB.ts'...\n");
}

#[test]
fn cli_update_rejects_non_ascii_output() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = Invocation::new(
        BuildCommand::new(DEFAULT_BUILD_TOOL, Preset::new("dev")),
        RepositoryRoot::from_path(dir.path()).unwrap(),
    );

    let err = update_translations(&invocation, &CannedRunner(b"\xff")).unwrap_err();
    assert!(matches!(err, InvokeError::Decode { offset: 0, byte: 0xff }));
}

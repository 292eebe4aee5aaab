//! # update-translations-core
//!
//! Regenerates the application's Qt translation files by running the CMake
//! `update_translations` target for a given build preset.
//!
//! One call to [`update_translations`]:
//! - builds `<cmake> --build --preset <preset> --target update_translations`
//! - runs it from the repository root and waits for it to exit
//! - decodes the captured standard output as strict ASCII

pub mod command;
pub mod config;
pub mod decode;
pub mod error;
pub mod root;
pub mod runner;

pub use command::{BuildCommand, DEFAULT_BUILD_TOOL, Preset, UPDATE_TRANSLATIONS_TARGET};
pub use config::{CONFIG_FILE_NAME, TranslationsConfig};
pub use decode::decode_ascii;
pub use error::{InvokeError, InvokeResult};
pub use root::RepositoryRoot;
pub use runner::{CommandRunner, ProcessRunner};

/// A fully resolved request: what to run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: BuildCommand,
    pub root: RepositoryRoot,
}

impl Invocation {
    pub fn new(command: BuildCommand, root: RepositoryRoot) -> Self {
        Self { command, root }
    }
}

/// Run the update and return the build tool's output as text.
///
/// Nothing is returned unless the child exited successfully and its whole
/// output decoded.
pub fn update_translations(
    invocation: &Invocation,
    runner: &dyn CommandRunner,
) -> InvokeResult<String> {
    tracing::debug!(
        preset = %invocation.command.preset(),
        root = %invocation.root.path().display(),
        "updating translations"
    );
    let stdout = runner.run(&invocation.command, invocation.root.path())?;
    decode_ascii(stdout)
}

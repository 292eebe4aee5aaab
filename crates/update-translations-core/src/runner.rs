//! Process execution abstraction.
//!
//! `CommandRunner` is the seam between building the command line and actually
//! spawning it, so the orchestration in [`crate::update_translations`] can be
//! tested without a CMake installation.
//!
//! Production code uses [`ProcessRunner`], which blocks until the child exits
//! and only then hands back the captured standard output.

use crate::command::BuildCommand;
use crate::error::{InvokeError, InvokeResult};
use std::path::Path;
use std::process::{Command, Stdio};

pub trait CommandRunner: std::fmt::Debug {
    /// Run `command` with `cwd` as its working directory and return its
    /// standard output once it has exited successfully.
    fn run(&self, command: &BuildCommand, cwd: &Path) -> InvokeResult<Vec<u8>>;
}

/// Spawns the build tool as a real child process.
///
/// Standard error is inherited, so whatever the build tool reports on failure
/// reaches the user unchanged. Standard output is captured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &BuildCommand, cwd: &Path) -> InvokeResult<Vec<u8>> {
        tracing::debug!(%command, cwd = %cwd.display(), "spawning build tool");

        let output = Command::new(command.program())
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| InvokeError::Launch {
                program: command.program().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(InvokeError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code(),
            });
        }

        tracing::info!(
            %command,
            bytes = output.stdout.len(),
            "build tool finished"
        );
        Ok(output.stdout)
    }
}

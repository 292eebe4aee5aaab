//! Failure union for a single translation update.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between resolving the root and printing output.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", describe_exit(.code))]
    NonZeroExit { command: String, code: Option<i32> },

    #[error("Build output is not valid ASCII: byte 0x{byte:02x} at offset {offset}")]
    Decode { offset: usize, byte: u8 },

    #[error("Cannot resolve repository root from {anchor}")]
    RepositoryRoot {
        anchor: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Repository root lies above the filesystem root: {anchor}")]
    RootOutOfRange { anchor: PathBuf },
}

pub type InvokeResult<T> = std::result::Result<T, InvokeError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

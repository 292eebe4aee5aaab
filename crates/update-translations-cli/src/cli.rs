use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "update-translations")]
#[command(version, about = "Update the Qt translation files.")]
pub struct Cli {
    #[arg(value_name = "PRESET", help = "The name of the CMake preset to use.")]
    pub preset: String,

    /// Build tool to run instead of `cmake` from PATH
    #[arg(long, value_name = "PROGRAM", env = "UPDATE_TRANSLATIONS_CMAKE")]
    pub cmake: Option<String>,

    /// Repository root to run the build from
    #[arg(long, value_name = "DIR", env = "UPDATE_TRANSLATIONS_ROOT")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to .update-translations.toml in the repository root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log what is being run to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

//! `.update-translations.toml` configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the repository root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".update-translations.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationsConfig {
    /// Build tool program, either a name resolved through `PATH` or a path.
    #[serde(default)]
    pub cmake: Option<String>,
}

impl TranslationsConfig {
    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load config or use default, returning any load warning
    ///
    /// A file that exists but cannot be read or parsed yields the default
    /// config together with a message describing the problem, so a typo is
    /// never silently ignored.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<String>) {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => (config, None),
                Err(e) => (
                    Self::default(),
                    Some(format!(
                        "Ignoring config file {}: {:#}",
                        p.display(),
                        e
                    )),
                ),
            },
            None => (Self::default(), None),
        }
    }

    /// The conventional config file under `root`, if present.
    pub fn discover(root: &Path) -> Option<PathBuf> {
        let candidate = root.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}

//! The fixed CMake command line that regenerates translation files.

use std::fmt;

/// CMake target that refreshes the `.ts` files from the sources.
pub const UPDATE_TRANSLATIONS_TARGET: &str = "update_translations";

/// Build tool launched when nothing overrides it.
pub const DEFAULT_BUILD_TOOL: &str = "cmake";

/// A CMake preset name, forwarded to the build tool exactly as given.
///
/// No check is made against the presets the project actually defines; an
/// unknown preset is reported by CMake itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset(String);

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<program> --build --preset <preset> --target update_translations`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    preset: Preset,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, preset: Preset) -> Self {
        Self {
            program: program.into(),
            preset,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Arguments passed after the program name, in order.
    pub fn args(&self) -> [&str; 5] {
        [
            "--build",
            "--preset",
            self.preset.as_str(),
            "--target",
            UPDATE_TRANSLATIONS_TARGET,
        ]
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

use halo_remap::{Argb, ReferencePair};

use crate::error::ConfigError;

/// Suffix appended to the input file stem when no override is given.
pub const DEFAULT_SUFFIX: &str = "_dark";

/// Environment variable overriding [`DEFAULT_SUFFIX`].
pub const SUFFIX_ENV: &str = "DARKTHEME_SUFFIX";

/// Settings for one batch run, assembled from CLI arguments and environment
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Light halo color and dark target color
    pub references: ReferencePair,

    /// Appended to the input file stem to name the output (`photo` -> `photo_dark.png`)
    pub suffix: String,

    /// Re-compress output PNGs with oxipng
    pub optimize: bool,

    /// Map pixels row-parallel on the rayon pool
    pub parallel: bool,
}

impl RunConfig {
    /// Config with default suffix, no optimization, parallel mapping.
    pub fn new(light: Argb, dark: Argb) -> Self {
        Self {
            references: ReferencePair::new(light, dark),
            suffix: DEFAULT_SUFFIX.to_string(),
            optimize: false,
            parallel: true,
        }
    }

    /// Pick the output suffix: CLI value first, then the environment value,
    /// then [`DEFAULT_SUFFIX`].
    ///
    /// An empty suffix would overwrite PNG inputs in place, and a separator
    /// would write outside the input's directory; both are rejected.
    pub fn resolve_suffix(
        cli: Option<String>,
        env: Option<String>,
    ) -> Result<String, ConfigError> {
        let suffix = cli
            .or(env)
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

        if suffix.is_empty() {
            return Err(ConfigError::EmptySuffix);
        }
        if suffix.contains(&['/', '\\'][..]) {
            return Err(ConfigError::InvalidSuffix(suffix));
        }
        Ok(suffix)
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use selene_rs::ImageFormat;
use serde::Deserialize;
use tracing::debug;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "selene.toml";

/// Top-level selene configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeleneConfig {
    /// Frame image settings.
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory holding `moon-{n}.{ext}` files.
    pub dir: Option<PathBuf>,
    /// One of `jpeg`, `png`, `webp`.
    pub format: Option<String>,
}

impl SeleneConfig {
    /// Load a config file. A missing file is only an error when the path
    /// was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Image format from the config, defaulting to JPEG.
    pub fn format(&self) -> Result<ImageFormat> {
        match &self.assets.format {
            Some(name) => Ok(name.parse()?),
            None => Ok(ImageFormat::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = SeleneConfig::parse("").unwrap();
        assert!(cfg.assets.dir.is_none());
        assert_eq!(cfg.format().unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn assets_section() {
        let cfg = SeleneConfig::parse("[assets]\ndir = \"frames\"\nformat = \"webp\"\n").unwrap();
        assert_eq!(cfg.assets.dir, Some(PathBuf::from("frames")));
        assert_eq!(cfg.format().unwrap(), ImageFormat::Webp);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(SeleneConfig::parse("[assets]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn bad_format_rejected() {
        let cfg = SeleneConfig::parse("[assets]\nformat = \"gif\"\n").unwrap();
        assert!(cfg.format().is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(SeleneConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selene.toml");
        std::fs::write(&path, "[assets]\nformat = \"png\"\n").unwrap();
        let cfg = SeleneConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.format().unwrap(), ImageFormat::Png);
    }
}

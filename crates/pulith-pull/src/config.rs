//! Declarative pull configuration.
//!
//! Every field is optional. An absent field contributes no modifier, so the
//! defaults of [`PullOptions`] hold for it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{PullOption, build};
use crate::data::PullOptions;
use crate::error::Result;

/// Pull parameters as read from a TOML document.
///
/// # Examples
///
/// ```
/// use pulith_pull::PullConfig;
///
/// let config = PullConfig::from_toml_str(r#"
///     architectures = ["x86_64", "arm64"]
///     version = "1.2.0"
///     checksum = true
/// "#).unwrap();
///
/// let options = config.build().unwrap();
/// assert_eq!(options.version(), "1.2.0");
/// assert!(options.calculate_checksum());
/// assert!(!options.use_cache());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PullConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub architectures: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
}

impl PullConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Modifiers equivalent to this configuration, in field order.
    pub fn into_modifiers(self) -> Vec<PullOption> {
        let mut modifiers = Vec::new();

        if !self.architectures.is_empty() {
            modifiers.push(PullOption::Architectures(self.architectures));
        }
        if !self.platforms.is_empty() {
            modifiers.push(PullOption::Platforms(self.platforms));
        }
        if let Some(version) = self.version {
            modifiers.push(PullOption::Version(version));
        }
        if let Some(checksum) = self.checksum {
            modifiers.push(PullOption::Checksum(checksum));
        }
        if let Some(cache) = self.cache {
            modifiers.push(PullOption::Cache(cache));
        }
        if let Some(workdir) = self.workdir {
            modifiers.push(PullOption::Workdir(workdir));
        }

        modifiers
    }

    pub fn build(self) -> Result<PullOptions> {
        build(self.into_modifiers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::path::Path;

    #[test]
    fn empty_document_is_default() {
        let config = PullConfig::from_toml_str("").unwrap();
        assert_eq!(config, PullConfig::default());
        assert!(config.into_modifiers().is_empty());
    }

    #[test]
    fn full_document() {
        let config = PullConfig::from_toml_str(
            r#"
            architectures = ["x86_64", "", "x86_64", "arm64"]
            platforms = ["linux"]
            version = "0.9.0"
            checksum = true
            cache = true
            workdir = "/tmp/pull"
            "#,
        )
        .unwrap();

        let options = config.build().unwrap();
        assert_eq!(options.architectures().as_slice(), ["x86_64", "arm64"]);
        assert_eq!(options.platforms().as_slice(), ["linux"]);
        assert_eq!(options.version(), "0.9.0");
        assert!(options.calculate_checksum());
        assert!(options.use_cache());
        assert_eq!(options.workdir(), Path::new("/tmp/pull"));
        assert!(!options.has_progress());
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = PullConfig::from_toml_str("retries = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = PullConfig::from_toml_str("checksum = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn modifiers_follow_field_order() {
        let config = PullConfig {
            version: Some("1.0.0".into()),
            cache: Some(false),
            platforms: vec!["kvm".into()],
            ..PullConfig::default()
        };

        let names: Vec<_> = config
            .into_modifiers()
            .iter()
            .map(|m| crate::core::Modifier::name(m))
            .collect();
        assert_eq!(names, vec!["platforms", "version", "cache"]);
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = PullConfig {
            architectures: vec!["arm64".into()],
            checksum: Some(true),
            ..PullConfig::default()
        };

        let rendered = toml::to_string(&config).unwrap();
        assert_eq!(PullConfig::from_toml_str(&rendered).unwrap(), config);
    }
}

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::defaults::ConfigurationDefaults;

/// Namespace the cookbook keeps its attributes under.
pub const ATTRIBUTE_NAMESPACE: &str = "instrumental";

/// Higher-precedence attribute values layered over the resolved defaults.
///
/// Every key is optional; a missing key keeps the default. The file may hold
/// the keys at top level or inside an `[instrumental]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeOverrides {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub curl_path: Option<String>,
    #[serde(default)]
    pub wget_path: Option<String>,
    #[serde(default)]
    pub dest_init_file: Option<String>,
    #[serde(default)]
    pub enable_scripts: Option<bool>,
    #[serde(default)]
    pub destination_dir: Option<String>,
    #[serde(default)]
    pub config_file: Option<String>,
    #[serde(default)]
    pub script_dir: Option<String>,
    #[serde(default)]
    pub pid_file: Option<String>,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub use_local: Option<bool>,
    #[serde(default)]
    pub local_path: Option<String>,
}

impl AttributeOverrides {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let raw = fs::read_to_string(path_ref)
            .with_context(|| format!("failed to read overrides from {}", path_ref.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse overrides from {}", path_ref.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(raw).context("invalid TOML")?;
        if table.len() == 1
            && matches!(table.get(ATTRIBUTE_NAMESPACE), Some(toml::Value::Table(_)))
        {
            if let Some(toml::Value::Table(inner)) = table.remove(ATTRIBUTE_NAMESPACE) {
                table = inner;
            }
        }
        Self::deserialize(toml::Value::Table(table)).context("unrecognised attribute")
    }

    /// Number of attributes this set overrides.
    pub fn len(&self) -> usize {
        let strings = [
            &self.api_key,
            &self.version,
            &self.repo,
            &self.curl_path,
            &self.wget_path,
            &self.dest_init_file,
            &self.destination_dir,
            &self.config_file,
            &self.script_dir,
            &self.pid_file,
            &self.log_file,
            &self.user,
            &self.local_path,
        ];
        let flags = [&self.enable_scripts, &self.use_local];
        strings.iter().filter(|value| value.is_some()).count()
            + flags.iter().filter(|value| value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConfigurationDefaults {
    /// Returns a new record with every present override applied.
    ///
    /// Overrides can set optional attributes but never clear them.
    pub fn with_overrides(self, overrides: AttributeOverrides) -> Self {
        tracing::debug!(count = overrides.len(), "applying attribute overrides");
        let AttributeOverrides {
            api_key,
            version,
            repo,
            curl_path,
            wget_path,
            dest_init_file,
            enable_scripts,
            destination_dir,
            config_file,
            script_dir,
            pid_file,
            log_file,
            user,
            use_local,
            local_path,
        } = overrides;

        Self {
            api_key: api_key.or(self.api_key),
            version: version.unwrap_or(self.version),
            repo: repo.unwrap_or(self.repo),
            curl_path: curl_path.unwrap_or(self.curl_path),
            wget_path: wget_path.unwrap_or(self.wget_path),
            dest_init_file: dest_init_file.unwrap_or(self.dest_init_file),
            enable_scripts: enable_scripts.unwrap_or(self.enable_scripts),
            destination_dir: destination_dir.unwrap_or(self.destination_dir),
            config_file: config_file.unwrap_or(self.config_file),
            script_dir: script_dir.unwrap_or(self.script_dir),
            pid_file: pid_file.or(self.pid_file),
            log_file: log_file.or(self.log_file),
            user: user.or(self.user),
            use_local: use_local.unwrap_or(self.use_local),
            local_path: local_path.or(self.local_path),
        }
    }
}

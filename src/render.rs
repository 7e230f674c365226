use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::str::FromStr;

use crate::config::ATTRIBUTE_NAMESPACE;
use crate::defaults::ConfigurationDefaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => bail!("unsupported output format '{raw}' (expected toml or json)"),
        }
    }
}

#[derive(Serialize)]
struct Namespaced<'a> {
    instrumental: &'a ConfigurationDefaults,
}

/// Renders the record under the `instrumental` attribute namespace.
pub fn render(defaults: &ConfigurationDefaults, format: OutputFormat) -> Result<String> {
    let document = Namespaced {
        instrumental: defaults,
    };
    match format {
        OutputFormat::Toml => toml::to_string_pretty(&document)
            .with_context(|| format!("failed to render {ATTRIBUTE_NAMESPACE} attributes as TOML")),
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .with_context(|| format!("failed to render {ATTRIBUTE_NAMESPACE} attributes as JSON")),
    }
}

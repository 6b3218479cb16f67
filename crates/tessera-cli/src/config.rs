//! # CLI Configuration
//!
//! Optional YAML settings, read from `--config <PATH>` or `./tessera.yaml`:
//!
//! ```yaml
//! format: json
//! aliases:
//!   DateList: list<date>
//!   Prices: map<float>
//! ```
//!
//! Aliases give names to type expressions. They are validated when the file
//! is loaded: an alias may not reuse a scalar name, and its target must parse.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::kinds::{Scalar, TypeExpr};

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tessera.yaml";

/// How reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `key: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default output format when `--format` is not given.
    pub format: Option<OutputFormat>,
    /// Named type expressions.
    pub aliases: BTreeMap<String, String>,
}

impl CliConfig {
    /// Parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config YAML: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            aliases = config.aliases.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load `explicit` if given, else `dir/tessera.yaml` if it exists, else
    /// defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            return Self::load(&implicit);
        }
        tracing::debug!("no configuration file; using defaults");
        Ok(Self::default())
    }

    /// Resolve a type name given on the command line: an alias, or a type
    /// expression.
    pub fn resolve(&self, name: &str) -> Result<TypeExpr> {
        match self.aliases.get(name.trim()) {
            Some(target) => TypeExpr::parse(target)
                .with_context(|| format!("alias {name:?} has an invalid target")),
            None => TypeExpr::parse(name),
        }
    }

    /// The effective output format: the flag, then the file, then text.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    fn validate(&self) -> Result<()> {
        for (name, target) in &self.aliases {
            if name.trim().is_empty() || name.contains(['<', '>']) {
                bail!("alias name {name:?} is not a plain identifier");
            }
            if Scalar::from_name(name).is_some() {
                bail!("alias {name:?} shadows a built-in type");
            }
            TypeExpr::parse(target)
                .with_context(|| format!("alias {name:?} has an invalid target {target:?}"))?;
        }
        Ok(())
    }
}

//! # Conversion Configuration
//!
//! Settings the caller supplies alongside the parsed tree. They steer the implicit
//! options the assembler synthesizes and a couple of converter switches.
//!
//! ## Sources
//!
//! Settings are layered, later sources winning:
//!
//! 1. Defaults ([`ConversionConfig::default`])
//! 2. A TOML file ([`ConversionConfig::from_toml_file`])
//! 3. Environment variables ([`ConversionConfig::apply_env_overrides`])
//! 4. CLI flags (see [`crate::cli`])
//!
//! ## Environment Variables
//!
//! | Variable | Key | Example |
//! |----------|-----|---------|
//! | `JDL_APPLICATION_TYPE` | `applicationType` | `microservice` |
//! | `JDL_APPLICATION_NAME` | `applicationName` | `store` |
//! | `JDL_DATABASE_TYPE` | `databaseType` | `neo4j` |
//! | `JDL_GENERATOR_VERSION` | `generatorVersion` | `7.9.3` |
//! | `JDL_ID_FIELDS` | `idFields` | `drop` or `keep` |
//!
//! ## Example File
//!
//! ```toml
//! applicationType = "microservice"
//! applicationName = "store"
//! databaseType = "sql"
//! idFields = "drop"
//! ```

use crate::convert::IdFieldPolicy;
use crate::model::ApplicationType;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Database type whose generators can't handle bidirectional defaults.
pub const GRAPH_DATABASE_TYPE: &str = "neo4j";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionConfig {
    /// Type of the application the document is converted for.
    pub application_type: Option<ApplicationType>,
    /// Base name of that application; values the synthesized microservice options.
    pub application_name: Option<String>,
    pub database_type: Option<String>,
    /// Copied into every application's `jhipsterVersion`.
    pub generator_version: Option<String>,
    /// What to do with fields literally named `id`.
    pub id_fields: IdFieldPolicy,
}

impl ConversionConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse conversion config")
    }

    /// Load a TOML config file.
    pub fn from_toml_file(config_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read conversion config: {}", config_path.display())
        })?;
        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse conversion config: {}", config_path.display())
        })
    }

    /// Layer `JDL_*` environment variables on top.
    pub fn apply_env_overrides(self) -> anyhow::Result<Self> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Layer overrides read through `lookup` (an environment, a map in tests).
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("JDL_APPLICATION_TYPE") {
            let application_type = value
                .parse::<ApplicationType>()
                .map_err(|v| anyhow!("JDL_APPLICATION_TYPE: unknown application type '{}'", v))?;
            self.application_type = Some(application_type);
        }
        if let Some(value) = lookup("JDL_APPLICATION_NAME") {
            self.application_name = Some(value);
        }
        if let Some(value) = lookup("JDL_DATABASE_TYPE") {
            self.database_type = Some(value);
        }
        if let Some(value) = lookup("JDL_GENERATOR_VERSION") {
            self.generator_version = Some(value);
        }
        if let Some(value) = lookup("JDL_ID_FIELDS") {
            self.id_fields = value
                .parse::<IdFieldPolicy>()
                .map_err(|v| anyhow!("JDL_ID_FIELDS: expected 'drop' or 'keep', got '{}'", v))?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_microservice(&self) -> bool {
        self.application_type == Some(ApplicationType::Microservice)
    }

    /// Graph stores forbid bidirectional defaults, so only one-to-many relationships
    /// get a default back-reference.
    #[must_use]
    pub fn uses_unidirectional_relationships(&self) -> bool {
        self.database_type.as_deref() == Some(GRAPH_DATABASE_TYPE)
    }
}

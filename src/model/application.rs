use super::option::JdlOption;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Prefix every blueprint package name carries.
pub const BLUEPRINT_PREFIX: &str = "generator-jhipster-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    #[default]
    Monolith,
    Microservice,
    Gateway,
}

impl ApplicationType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Monolith => "monolith",
            ApplicationType::Microservice => "microservice",
            ApplicationType::Gateway => "gateway",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monolith" => Ok(ApplicationType::Monolith),
            "microservice" => Ok(ApplicationType::Microservice),
            "gateway" => Ok(ApplicationType::Gateway),
            other => Err(other.to_string()),
        }
    }
}

/// Resolved `config { .. }` block of an application.
///
/// Known keys are typed and defaulted per application type; anything else is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    pub base_name: String,
    pub application_type: ApplicationType,
    pub package_name: String,
    pub package_folder: String,
    pub authentication_type: String,
    pub database_type: String,
    pub prod_database_type: String,
    pub dev_database_type: String,
    pub build_tool: String,
    pub client_framework: String,
    pub cache_provider: String,
    pub service_discovery_type: String,
    pub server_port: u16,
    pub enable_translation: bool,
    pub native_language: String,
    pub languages: Vec<String>,
    pub skip_client: bool,
    pub blueprints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jhipster_version: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ApplicationConfig {
    /// Defaults for an application of the given type.
    #[must_use]
    pub fn defaults_for(application_type: ApplicationType) -> Self {
        let package_name = "com.mycompany.myapp".to_string();
        let (server_port, client_framework, skip_client) = match application_type {
            ApplicationType::Microservice => (8081, "no", true),
            ApplicationType::Monolith | ApplicationType::Gateway => (8080, "angular", false),
        };
        let (cache_provider, service_discovery_type) = match application_type {
            ApplicationType::Monolith => ("ehcache", "no"),
            ApplicationType::Microservice | ApplicationType::Gateway => ("hazelcast", "eureka"),
        };
        ApplicationConfig {
            base_name: "jhipster".to_string(),
            application_type,
            package_folder: package_name.replace('.', "/"),
            package_name,
            authentication_type: "jwt".to_string(),
            database_type: "sql".to_string(),
            prod_database_type: "postgresql".to_string(),
            dev_database_type: "h2Disk".to_string(),
            build_tool: "maven".to_string(),
            client_framework: client_framework.to_string(),
            cache_provider: cache_provider.to_string(),
            service_discovery_type: service_discovery_type.to_string(),
            server_port,
            enable_translation: true,
            native_language: "en".to_string(),
            languages: vec!["en".to_string()],
            skip_client,
            blueprints: Vec::new(),
            jhipster_version: None,
            extra: IndexMap::new(),
        }
    }
}

/// An application block with its config, entity subset and scoped options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlApplication {
    pub config: ApplicationConfig,
    pub entity_names: IndexSet<String>,
    pub options: Vec<JdlOption>,
}

impl JdlApplication {
    #[must_use]
    pub fn new(config: ApplicationConfig) -> Self {
        JdlApplication {
            config,
            entity_names: IndexSet::new(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.config.base_name
    }

    pub fn add_entity_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_names.extend(names.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entity_names.contains(name)
    }

    pub fn add_option(&mut self, option: JdlOption) {
        self.options.push(option);
    }

    #[must_use]
    pub fn option_quantity(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn get_options_for_name(&self, name: &str) -> Vec<&JdlOption> {
        self.options.iter().filter(|o| o.name() == name).collect()
    }
}

use super::option::convert_options;
use super::values::ConfigValue;
use crate::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{
    ApplicationConfig, ApplicationType, JdlApplication, JdlOption, BLUEPRINT_PREFIX, WILDCARD,
};
use crate::parsed::{ParsedApplication, ParsedApplicationEntities};
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::debug;

const DEFAULT_BASE_NAME: &str = "jhipster";

/// Convert parsed application blocks.
///
/// Each application gets its entity list first, then its own options, each of which
/// must only reference entities of that list.
///
/// # Arguments
///
/// * `applications` - the parsed application blocks
/// * `config` - caller configuration; its generator version lands in every application
/// * `entity_names` - every entity declared in the document, used to expand `entities *`
///
/// # Errors
///
/// - [`ConversionError::MissingInput`] when `applications` is absent
/// - [`ConversionError::EntityNotInApplication`] when an option escapes its application
/// - [`ConversionError::InvalidConfigValue`] / [`ConversionError::UnknownApplicationType`]
///   for malformed config blocks
pub fn convert_applications(
    applications: Option<&[ParsedApplication]>,
    config: &ConversionConfig,
    entity_names: &[String],
) -> ConversionResult<Vec<JdlApplication>> {
    let applications = applications.ok_or_else(|| ConversionError::missing("Applications"))?;
    applications
        .iter()
        .map(|parsed| convert_application(parsed, config, entity_names))
        .collect()
}

fn convert_application(
    parsed: &ParsedApplication,
    config: &ConversionConfig,
    entity_names: &[String],
) -> ConversionResult<JdlApplication> {
    let application_config = convert_application_config(&parsed.config, config)?;
    let mut application = JdlApplication::new(application_config);
    application.add_entity_names(resolve_application_entities(&parsed.entities, entity_names));

    let options = convert_options(Some(&parsed.options), Some(parsed.use_options.as_slice()))?;
    for option in options {
        check_option_scope(&application, &option)?;
        application.add_option(option);
    }
    debug!(
        application = application.base_name(),
        entities = application.entity_names.len(),
        options = application.option_quantity(),
        "converted application"
    );
    Ok(application)
}

/// `entities A, B`, `entities *` and `entities * except C`, against the document's
/// entity names.
#[must_use]
pub fn resolve_application_entities(
    entities: &ParsedApplicationEntities,
    entity_names: &[String],
) -> IndexSet<String> {
    let listed = if entities.entity_list.iter().any(|name| name == WILDCARD) {
        entity_names
    } else {
        entities.entity_list.as_slice()
    };
    listed
        .iter()
        .filter(|name| !entities.excluded.contains(*name))
        .cloned()
        .collect()
}

fn check_option_scope(application: &JdlApplication, option: &JdlOption) -> ConversionResult<()> {
    let scope: Vec<&str> = application.entity_names.iter().map(String::as_str).collect();
    match option
        .resolve_entity_names(&scope)
        .into_iter()
        .find(|name| !application.has_entity(name))
    {
        Some(entity) => Err(ConversionError::EntityNotInApplication {
            entity,
            option: option.name().to_string(),
            application: application.base_name().to_string(),
        }),
        None => Ok(()),
    }
}

fn convert_application_config(
    raw: &IndexMap<String, Value>,
    config: &ConversionConfig,
) -> ConversionResult<ApplicationConfig> {
    let base_name = match raw.get("baseName") {
        Some(value) => ConfigValue::new("an application", "baseName", value).string()?,
        None => DEFAULT_BASE_NAME.to_string(),
    };
    let application_type = match raw.get("applicationType") {
        Some(value) => ConfigValue::new(&base_name, "applicationType", value)
            .string()?
            .parse::<ApplicationType>()
            .map_err(|value| ConversionError::UnknownApplicationType { value })?,
        None => ApplicationType::default(),
    };

    let mut application = ApplicationConfig::defaults_for(application_type);
    application.base_name = base_name.clone();
    let mut package_folder = None;
    let mut languages = None;

    for (key, value) in raw {
        let value_of = ConfigValue::new(&base_name, key, value);
        match key.as_str() {
            "baseName" | "applicationType" => {}
            "packageName" => application.package_name = value_of.string()?,
            "packageFolder" => package_folder = Some(value_of.string()?),
            "authenticationType" => application.authentication_type = value_of.string()?,
            "databaseType" => application.database_type = value_of.string()?,
            "prodDatabaseType" => application.prod_database_type = value_of.string()?,
            "devDatabaseType" => application.dev_database_type = value_of.string()?,
            "buildTool" => application.build_tool = value_of.string()?,
            "clientFramework" => application.client_framework = value_of.string()?,
            "cacheProvider" => application.cache_provider = value_of.string()?,
            "serviceDiscoveryType" => application.service_discovery_type = value_of.string()?,
            "serverPort" => application.server_port = value_of.port()?,
            "enableTranslation" => application.enable_translation = value_of.boolean()?,
            "nativeLanguage" => application.native_language = value_of.string()?,
            "languages" => languages = Some(value_of.string_list()?),
            "skipClient" => application.skip_client = value_of.boolean()?,
            "blueprints" => application.blueprints = value_of.string_list()?,
            "jhipsterVersion" => application.jhipster_version = Some(value_of.string()?),
            _ => {
                application.extra.insert(key.clone(), value.clone());
            }
        }
    }

    application.package_folder =
        package_folder.unwrap_or_else(|| application.package_name.replace('.', "/"));
    application.languages = match languages {
        Some(mut languages) => {
            if !languages.contains(&application.native_language) {
                languages.insert(0, application.native_language.clone());
            }
            languages
        }
        None => vec![application.native_language.clone()],
    };
    application.blueprints = application
        .blueprints
        .iter()
        .map(|name| prefix_blueprint(name))
        .collect();
    if let Some(version) = &config.generator_version {
        application.jhipster_version = Some(version.clone());
    }
    Ok(application)
}

/// `vuejs` → `generator-jhipster-vuejs`; already prefixed names are left alone.
#[must_use]
pub fn prefix_blueprint(name: &str) -> String {
    if name.starts_with(BLUEPRINT_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", BLUEPRINT_PREFIX, name)
    }
}

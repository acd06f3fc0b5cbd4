use super::application::JdlApplication;
use super::deployment::{DeploymentType, JdlDeployment};
use super::entity::JdlEntity;
use super::enums::JdlEnum;
use super::option::JdlOption;
use super::relationship::{JdlRelationship, JdlRelationships};
use indexmap::IndexMap;
use serde::Serialize;

/// Root of the lowered domain graph.
///
/// Built once by [`crate::convert::convert_parsed_jdl`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlObject {
    pub applications: IndexMap<String, JdlApplication>,
    pub deployments: IndexMap<DeploymentType, JdlDeployment>,
    pub entities: IndexMap<String, JdlEntity>,
    pub enums: IndexMap<String, JdlEnum>,
    pub relationships: JdlRelationships,
    pub options: Vec<JdlOption>,
    /// Entity name → base names of the applications declaring it.
    #[serde(skip)]
    applications_per_entity_name: IndexMap<String, Vec<String>>,
}

impl JdlObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyed by base name; a later application with the same base name replaces the earlier.
    ///
    /// Also records the application under each of its entity names. A replaced
    /// application is dropped from the entity index first.
    pub fn add_application(&mut self, application: JdlApplication) {
        let base_name = application.base_name().to_string();
        if self.applications.contains_key(&base_name) {
            self.applications_per_entity_name.retain(|_, owners| {
                owners.retain(|owner| owner != &base_name);
                !owners.is_empty()
            });
        }
        for entity_name in &application.entity_names {
            let owners = self
                .applications_per_entity_name
                .entry(entity_name.clone())
                .or_default();
            if !owners.contains(&base_name) {
                owners.push(base_name.clone());
            }
        }
        self.applications.insert(base_name, application);
    }

    pub fn add_deployment(&mut self, deployment: JdlDeployment) {
        self.deployments
            .insert(deployment.deployment_type, deployment);
    }

    pub fn add_entity(&mut self, entity: JdlEntity) {
        self.entities.insert(entity.name.clone(), entity);
    }

    pub fn add_enum(&mut self, jdl_enum: JdlEnum) {
        self.enums.insert(jdl_enum.name.clone(), jdl_enum);
    }

    pub fn add_relationship(&mut self, relationship: JdlRelationship) {
        self.relationships.add(relationship);
    }

    pub fn add_option(&mut self, option: JdlOption) {
        self.options.push(option);
    }

    #[must_use]
    pub fn get_application(&self, base_name: &str) -> Option<&JdlApplication> {
        self.applications.get(base_name)
    }

    /// Base names of the applications whose entity list contains `entity_name`.
    #[must_use]
    pub fn applications_for_entity(&self, entity_name: &str) -> &[String] {
        self.applications_per_entity_name
            .get(entity_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_deployment(&self, deployment_type: DeploymentType) -> Option<&JdlDeployment> {
        self.deployments.get(&deployment_type)
    }

    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&JdlEntity> {
        self.entities.get(name)
    }

    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&JdlEnum> {
        self.enums.get(name)
    }

    #[must_use]
    pub fn relationships(&self) -> &JdlRelationships {
        &self.relationships
    }

    #[must_use]
    pub fn get_options(&self) -> &[JdlOption] {
        &self.options
    }

    #[must_use]
    pub fn get_options_for_name(&self, name: &str) -> Vec<&JdlOption> {
        self.options.iter().filter(|o| o.name() == name).collect()
    }

    #[must_use]
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    #[must_use]
    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    #[must_use]
    pub fn entity_quantity(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn enum_quantity(&self) -> usize {
        self.enums.len()
    }

    #[must_use]
    pub fn relationship_quantity(&self) -> usize {
        self.relationships.len()
    }

    #[must_use]
    pub fn option_quantity(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn application_quantity(&self) -> usize {
        self.applications.len()
    }

    #[must_use]
    pub fn deployment_quantity(&self) -> usize {
        self.deployments.len()
    }
}

//! # Assembler
//!
//! Lowers a whole [`ParsedJdl`] into a [`JdlObject`] in one forward pass:
//!
//! 1. applications (plus the entity → applications index)
//! 2. deployments
//! 3. enums
//! 4. entities and their fields
//! 5. relationships
//! 6. options: synthesized microservice options, then declared ones, then the ones
//!    implied by entity annotations
//!
//! All state lives in an `Assembly` built per call, so concurrent conversions of
//! independent documents never share anything. Sub-converter errors are returned
//! unchanged and no partial object escapes.

use super::application::convert_applications;
use super::deployment::convert_deployments;
use super::entity::convert_entities;
use super::enums::convert_enums;
use super::field::convert_fields;
use super::option::{
    convert_annotations_to_option_map, convert_entity_annotations_to_options, convert_options,
};
use super::relationship::{convert_relationships, RelationshipConversionOptions};
use crate::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{BinaryOptionKind, JdlObject, JdlOption};
use crate::parsed::{ParsedEntity, ParsedJdl};
use tracing::{debug, info, warn};

/// Convert a parsed JDL document into its domain object graph.
///
/// # Arguments
///
/// * `parsed` - the tree produced by the grammar layer
/// * `config` - caller configuration (application type and name, database type, ...)
///
/// # Errors
///
/// The first error any converter raises, untouched. See [`ConversionError`].
///
/// # Example
///
/// ```rust
/// use jdl_converter::config::ConversionConfig;
/// use jdl_converter::convert::convert_parsed_jdl;
/// use jdl_converter::parsed::ParsedJdl;
///
/// let jdl_object = convert_parsed_jdl(&ParsedJdl::empty(), &ConversionConfig::default())?;
/// assert_eq!(jdl_object.entity_quantity(), 0);
/// # Ok::<(), jdl_converter::error::ConversionError>(())
/// ```
pub fn convert_parsed_jdl(parsed: &ParsedJdl, config: &ConversionConfig) -> ConversionResult<JdlObject> {
    let mut assembly = Assembly::new(parsed, config);
    assembly.fill_applications()?;
    assembly.fill_deployments()?;
    assembly.fill_enums()?;
    assembly.fill_entities()?;
    assembly.fill_relationships()?;
    assembly.fill_options()?;
    Ok(assembly.finish())
}

/// Call-scoped conversion state.
struct Assembly<'a> {
    parsed: &'a ParsedJdl,
    config: &'a ConversionConfig,
    jdl_object: JdlObject,
    entity_names: Vec<String>,
}

impl<'a> Assembly<'a> {
    fn new(parsed: &'a ParsedJdl, config: &'a ConversionConfig) -> Self {
        Assembly {
            parsed,
            config,
            jdl_object: JdlObject::new(),
            entity_names: parsed.entity_names(),
        }
    }

    fn fill_applications(&mut self) -> ConversionResult<()> {
        let applications = convert_applications(
            self.parsed.applications.as_deref(),
            self.config,
            &self.entity_names,
        )?;
        for application in applications {
            self.jdl_object.add_application(application);
        }
        debug!(count = self.jdl_object.application_quantity(), "filled applications");
        Ok(())
    }

    fn fill_deployments(&mut self) -> ConversionResult<()> {
        for deployment in convert_deployments(self.parsed.deployments.as_deref())? {
            self.jdl_object.add_deployment(deployment);
        }
        debug!(count = self.jdl_object.deployment_quantity(), "filled deployments");
        Ok(())
    }

    fn fill_enums(&mut self) -> ConversionResult<()> {
        for jdl_enum in convert_enums(self.parsed.enums.as_deref())? {
            self.jdl_object.add_enum(jdl_enum);
        }
        debug!(count = self.jdl_object.enum_quantity(), "filled enums");
        Ok(())
    }

    fn fill_entities(&mut self) -> ConversionResult<()> {
        let parsed = self.parsed;
        let id_fields = self.config.id_fields;
        let get_fields = |entity: &ParsedEntity| {
            let fields: Vec<_> = id_fields.filter(entity).into_iter().cloned().collect();
            if fields.len() < entity.body.len() {
                debug!(entity = %entity.name, "dropping declared id field");
            }
            convert_fields(&fields, |name: &str| {
                parsed.constants.get(name).map(ToString::to_string)
            })
        };
        for entity in convert_entities(parsed.entities.as_deref(), get_fields)? {
            self.jdl_object.add_entity(entity);
        }
        debug!(count = self.jdl_object.entity_quantity(), "filled entities");
        Ok(())
    }

    fn fill_relationships(&mut self) -> ConversionResult<()> {
        let options = RelationshipConversionOptions {
            unidirectional_relationships: self.config.uses_unidirectional_relationships(),
        };
        let relationships = convert_relationships(
            self.parsed.relationships.as_deref(),
            convert_annotations_to_option_map,
            options,
        )?;
        for relationship in relationships {
            self.jdl_object.add_relationship(relationship);
        }
        debug!(count = self.jdl_object.relationship_quantity(), "filled relationships");
        Ok(())
    }

    fn fill_options(&mut self) -> ConversionResult<()> {
        let parsed = self.parsed;
        let config = self.config;
        let declared = parsed
            .options
            .as_ref()
            .ok_or_else(|| ConversionError::missing("Options"))?;

        if config.is_microservice() {
            match config.application_name.as_deref() {
                Some(application_name) => {
                    if !declared.contains(BinaryOptionKind::Microservice.as_str()) {
                        self.add_global_option(BinaryOptionKind::Microservice, application_name);
                    }
                    self.add_global_option(BinaryOptionKind::ClientRootFolder, application_name);
                }
                None => warn!("microservice conversion without an application name, no implicit options added"),
            }
        }

        for option in convert_options(Some(declared), parsed.use_options.as_deref())? {
            self.jdl_object.add_option(option);
        }

        let annotated: Vec<JdlOption> = self
            .jdl_object
            .entities
            .values()
            .flat_map(|entity| convert_entity_annotations_to_options(&entity.name, &entity.annotations))
            .collect();
        for option in annotated {
            self.jdl_object.add_option(option);
        }
        debug!(count = self.jdl_object.option_quantity(), "filled options");
        Ok(())
    }

    /// A binary option covering every entity of the document.
    fn add_global_option(&mut self, kind: BinaryOptionKind, value: &str) {
        let no_exclusions: [&str; 0] = [];
        self.jdl_object.add_option(JdlOption::binary(
            kind,
            value,
            &self.entity_names,
            no_exclusions,
        ));
    }

    fn finish(self) -> JdlObject {
        info!(
            entities = self.jdl_object.entity_quantity(),
            relationships = self.jdl_object.relationship_quantity(),
            options = self.jdl_object.option_quantity(),
            applications = self.jdl_object.application_quantity(),
            "JDL object assembled"
        );
        self.jdl_object
    }
}

//! # Converters
//!
//! One converter per kind of declaration, leaves first, plus the assembler that runs
//! them in dependency order:
//!
//! ```text
//! field ─► entity ─┐
//! enum ────────────┤
//! option ──────────┤
//! relationship ────┼─► assemble ─► JdlObject
//! application ─────┤
//! deployment ──────┘
//! ```
//!
//! Converters are pure functions over borrowed parsed input. Each one rejects an
//! absent input collection with [`crate::error::ConversionError::MissingInput`]; an
//! empty collection converts to nothing.

mod application;
mod assemble;
mod deployment;
mod entity;
mod enums;
mod field;
mod format;
mod option;
mod relationship;
mod values;

pub use application::{convert_applications, prefix_blueprint, resolve_application_entities};
pub use assemble::convert_parsed_jdl;
pub use deployment::convert_deployments;
pub use entity::{convert_entities, IdFieldPolicy, ID_FIELD_NAME};
pub use enums::convert_enums;
pub use field::{convert_field, convert_fields, convert_validations, escape_pattern_quotes};
pub use format::{format_comment, lower_camel, lower_first, pascal};
pub use option::{
    convert_annotations_to_option_map, convert_entity_annotations_to_options, convert_options,
};
pub use relationship::{convert_relationships, RelationshipConversionOptions};

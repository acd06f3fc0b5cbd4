//! # Domain Model
//!
//! The lowered, cross-referenced JDL graph consumed by code generation. Every type is
//! `Serialize` so the graph can be handed to non-Rust tooling as JSON.
//!
//! - [`JdlObject`] - the root aggregate
//! - [`JdlEntity`], [`JdlField`], [`JdlValidation`] - entities and their columns
//! - [`JdlEnum`] - enumerations
//! - [`JdlRelationship`], [`JdlRelationships`] - associations keyed by composite key
//! - [`JdlOption`] with the closed [`UnaryOptionKind`] / [`BinaryOptionKind`] table
//! - [`JdlApplication`], [`ApplicationConfig`] - application blocks
//! - [`JdlDeployment`] - deployment descriptors

mod application;
mod deployment;
mod entity;
mod enums;
mod object;
mod option;
mod relationship;

pub use application::*;
pub use deployment::*;
pub use entity::*;
pub use enums::*;
pub use object::*;
pub use option::*;
pub use relationship::*;

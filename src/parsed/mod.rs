//! # Parsed JDL
//!
//! The contract with the grammar layer: a loosely structured syntax tree deserialized
//! from JSON or YAML. Nothing here is validated beyond shape; the converters in
//! [`crate::convert`] do the lowering.

mod load;
mod types;

pub use load::*;
pub use types::*;

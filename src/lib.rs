//! # JDL Converter
//!
//! **jdl-converter** lowers a parsed [JHipster Domain Language](https://www.jhipster.tech/jdl/)
//! tree into a validated, cross-referenced domain object graph: entities, fields,
//! enums, relationships, options, applications and deployments.
//!
//! ## Overview
//!
//! A grammar layer turns JDL source text into a loosely structured syntax tree and
//! writes it out as JSON or YAML. This crate is the pass after that: it resolves
//! identifiers, injects implicit defaults, expands wildcards and rejects documents
//! whose declarations contradict each other. Code generators consume the result.
//!
//! ## Architecture
//!
//! - **[`parsed`]** - The input contract: serde types for the parsed tree and loaders
//! - **[`model`]** - The output graph rooted at [`model::JdlObject`]
//! - **[`convert`]** - One converter per declaration kind plus the assembler
//! - **[`config`]** - Conversion settings (application type and name, database, id policy)
//! - **[`error`]** - [`error::ConversionError`], the structural violations conversion rejects
//! - **[`linter`]** - Consistency checks on a converted graph
//! - **[`logging`]** - `tracing-subscriber` setup for the binary
//! - **[`cli`]** - The `jdl-convert` command line
//!
//! ### Conversion Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(jdl-convert)
//!     participant Load as parsed::load_parsed
//!     participant Asm as convert::convert_parsed_jdl
//!     participant Conv as Converters
//!     participant Obj as JdlObject
//!
//!     User->>CLI: jdl-convert convert --input store.json
//!     CLI->>CLI: Layer config file, JDL_* env, flags
//!     CLI->>Load: load_parsed("store.json")
//!     Load-->>CLI: ParsedJdl
//!     CLI->>Asm: convert_parsed_jdl(&parsed, &config)
//!
//!     Asm->>Conv: convert_applications
//!     Conv-->>Asm: JdlApplication (entities resolved, options scoped)
//!     Asm->>Conv: convert_deployments
//!     Asm->>Conv: convert_enums
//!     Asm->>Conv: convert_entities + convert_fields
//!     Note over Conv: id policy applied,<br/>constants substituted
//!     Asm->>Conv: convert_relationships
//!     Note over Conv: default injected fields
//!     Asm->>Conv: convert_options
//!     Note over Asm: microservice / clientRootFolder<br/>synthesized first
//!
//!     alt Structural violation
//!         Conv-->>CLI: ConversionError
//!         CLI-->>User: ❌ error, no partial result
//!     end
//!
//!     Asm->>Obj: add_* in phase order
//!     Obj-->>CLI: JdlObject
//!     CLI-->>User: JSON on stdout
//! ```
//!
//! ### Key Patterns
//!
//! 1. **Pure converters**: each converter borrows parsed input and returns owned model values
//! 2. **All-or-nothing**: the first [`error::ConversionError`] aborts the whole conversion
//! 3. **Declaration order**: fields, validations, relationships and options keep source order
//! 4. **Closed option table**: option names and values resolve through [`model::UnaryOptionKind`]
//!    and [`model::BinaryOptionKind`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use jdl_converter::config::ConversionConfig;
//! use jdl_converter::convert::convert_parsed_jdl;
//! use jdl_converter::parsed::load_parsed;
//! use std::path::Path;
//!
//! let parsed = load_parsed(Path::new("store.json"))?;
//! let jdl_object = convert_parsed_jdl(&parsed, &ConversionConfig::default())?;
//! for name in jdl_object.entity_names() {
//!     println!("{name}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Command Line
//!
//! ```bash
//! cargo run --bin jdl-convert -- convert --input store.json --compact
//! cargo run --bin jdl-convert -- lint --input store.yaml --fail-on-error
//! cargo run --bin jdl-convert -- inspect --input store.yaml
//! ```
//!
//! ## Logging
//!
//! Converters log through `tracing` (skipped use-clause values at `debug`, relationship
//! keys at `trace`, a summary at `info`). The binary installs a subscriber from
//! `JDL_LOG_*` variables, see [`logging`].

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod linter;
pub mod logging;
pub mod model;
pub mod parsed;

pub use config::ConversionConfig;
pub use convert::convert_parsed_jdl;
pub use error::{ConversionError, ConversionResult};
pub use model::JdlObject;
pub use parsed::{load_parsed, ParsedJdl};

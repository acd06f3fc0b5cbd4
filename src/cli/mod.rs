//! # CLI Module
//!
//! Command-line interface behind the `jdl-convert` binary.
//!
//! ## Commands
//!
//! ### `convert`
//!
//! Lower a parsed JDL file and print the object graph as JSON:
//!
//! ```bash
//! jdl-convert convert --input store.json --application-type microservice --application-name store
//! ```
//!
//! Options:
//! - `--input <FILE>` - Parsed JDL, `.json`, `.yaml` or `.yml` (required)
//! - `--output <FILE>` - Write the JSON to a file instead of stdout
//! - `--compact` - Single-line JSON
//!
//! ### `lint`
//!
//! Convert, then report consistency problems:
//!
//! ```bash
//! jdl-convert lint --input store.json --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! Print counts, relationship keys and options of the converted graph:
//!
//! ```bash
//! jdl-convert inspect --input store.yaml
//! ```
//!
//! ## Configuration
//!
//! Every command accepts the same conversion settings, layered in this order:
//!
//! 1. `--config <FILE>` (or `JDL_CONFIG`), a TOML file
//! 2. `JDL_*` environment variables, see [`crate::config`]
//! 3. `--application-type`, `--application-name`, `--database-type`,
//!    `--generator-version`, `--keep-id-fields`
//!
//! ## Usage from Code
//!
//! ```rust,no_run
//! use clap::Parser;
//! use jdl_converter::cli::{run_cli, Cli};
//!
//! let cli = Cli::parse();
//! let _exit_code = run_cli(cli)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod commands;


pub use commands::{render_summary, run_cli, Cli, Commands, ConfigArgs};

use crate::config::ConversionConfig;
use crate::convert::{convert_parsed_jdl, IdFieldPolicy};
use crate::linter::{has_errors, lint_object, print_lint_issues, LintIssue, LintSeverity};
use crate::model::{ApplicationType, JdlObject};
use crate::parsed::load_parsed;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

/// Command-line interface for the JDL converter
///
/// Reads a parsed JDL tree (JSON or YAML, as written by the grammar layer) and lowers
/// it into the JDL object graph.
#[derive(Parser, Debug)]
#[command(name = "jdl-convert", version)]
#[command(about = "Lower parsed JDL into a JHipster domain object graph", long_about = None)]
pub struct Cli {
    /// Log at debug level unless JDL_LOG_LEVEL is already more verbose
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a parsed JDL file and print the object graph as JSON
    Convert {
        /// Path to the parsed JDL file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Lint a parsed JDL file
    ///
    /// Converts the document, then checks it for problems generators trip over:
    /// - relationships and options naming undeclared entities
    /// - field types that are neither JDL types nor declared enums
    /// - entity name casing
    /// - duplicate enum values
    /// - injected fields shadowing declared fields
    Lint {
        /// Path to the parsed JDL file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Print a summary of the converted object graph
    Inspect {
        /// Path to the parsed JDL file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Conversion settings shared by every command.
///
/// Flags win over `JDL_*` environment variables, which win over the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    /// TOML file with conversion settings
    #[arg(short, long, env = "JDL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application type the document is converted for (monolith, microservice, gateway)
    #[arg(long)]
    pub application_type: Option<ApplicationType>,

    /// Base name of the application; values synthesized microservice options
    #[arg(long)]
    pub application_name: Option<String>,

    /// Database type (neo4j keeps relationships unidirectional)
    #[arg(long)]
    pub database_type: Option<String>,

    /// Generator version stamped into every application
    #[arg(long)]
    pub generator_version: Option<String>,

    /// Keep fields named `id` instead of dropping them
    #[arg(long, default_value_t = false)]
    pub keep_id_fields: bool,
}

impl ConfigArgs {
    /// Resolve the effective configuration: file, then environment, then flags.
    pub fn resolve(&self) -> anyhow::Result<ConversionConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigArgs::resolve`], reading the environment through `lookup`.
    pub fn resolve_with<F>(&self, lookup: F) -> anyhow::Result<ConversionConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match &self.config {
            Some(path) => ConversionConfig::from_toml_file(path)?,
            None => ConversionConfig::default(),
        };
        let config = base.apply_overrides_from(lookup)?;
        Ok(self.apply_flags(config))
    }

    fn apply_flags(&self, mut config: ConversionConfig) -> ConversionConfig {
        if let Some(application_type) = self.application_type {
            config.application_type = Some(application_type);
        }
        if let Some(name) = &self.application_name {
            config.application_name = Some(name.clone());
        }
        if let Some(database_type) = &self.database_type {
            config.database_type = Some(database_type.clone());
        }
        if let Some(version) = &self.generator_version {
            config.generator_version = Some(version.clone());
        }
        if self.keep_id_fields {
            config.id_fields = IdFieldPolicy::Keep;
        }
        config
    }
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read or an override is invalid
/// - The parsed JDL file cannot be loaded
/// - Conversion fails
/// - The output file cannot be written
pub fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Convert {
            input,
            config,
            output,
            compact,
        } => {
            let jdl_object = convert_file(input, config)?;
            let json = if *compact {
                serde_json::to_string(&jdl_object)
            } else {
                serde_json::to_string_pretty(&jdl_object)
            }
            .context("Failed to serialize JDL object")?;

            match output {
                Some(path) => {
                    std::fs::write(path, json + "\n")
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(output = %path.display(), "Wrote JDL object");
                }
                None => println!("{}", json),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint {
            input,
            config,
            fail_on_error,
            errors_only,
        } => {
            let jdl_object = convert_file(input, config)?;
            let issues = lint_object(&jdl_object);

            let shown: Vec<LintIssue> = if *errors_only {
                issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect()
            } else {
                issues.clone()
            };
            print_lint_issues(&shown);

            if *fail_on_error && has_errors(&issues) {
                eprintln!("❌ Lint failed: {} has errors", input.display());
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Inspect { input, config } => {
            let jdl_object = convert_file(input, config)?;
            print!("{}", render_summary(&jdl_object));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn convert_file(input: &Path, args: &ConfigArgs) -> anyhow::Result<JdlObject> {
    let config = args.resolve()?;
    debug!(?config, "Resolved conversion config");
    let parsed = load_parsed(input)?;
    convert_parsed_jdl(&parsed, &config)
        .with_context(|| format!("Failed to convert {}", input.display()))
}

/// Human-readable counts plus relationship keys and application names.
#[must_use]
pub fn render_summary(jdl_object: &JdlObject) -> String {
    let mut lines = vec!["📦 JDL object".to_string()];
    let counts = [
        ("entities", jdl_object.entity_quantity()),
        ("enums", jdl_object.enum_quantity()),
        ("relationships", jdl_object.relationship_quantity()),
        ("options", jdl_object.option_quantity()),
        ("applications", jdl_object.application_quantity()),
        ("deployments", jdl_object.deployment_quantity()),
    ];
    for (label, count) in counts {
        lines.push(format!("   {:<14} {}", format!("{}:", label), count));
    }

    if !jdl_object.relationships().is_empty() {
        lines.push("\n🔗 Relationships:".to_string());
        lines.extend(jdl_object.relationships().keys().map(|key| format!("   {}", key)));
    }
    if !jdl_object.get_options().is_empty() {
        lines.push("\n⚙️  Options:".to_string());
        lines.extend(jdl_object.get_options().iter().map(|option| format!("   {}", option)));
    }
    if !jdl_object.applications.is_empty() {
        lines.push("\n🧩 Applications:".to_string());
        for application in jdl_object.applications.values() {
            lines.push(format!(
                "   {} ({}, {} entities)",
                application.base_name(),
                application.config.application_type,
                application.entity_names.len()
            ));
        }
    }
    if !jdl_object.deployments.is_empty() {
        lines.push("\n🚀 Deployments:".to_string());
        lines.extend(jdl_object.deployments.keys().map(|t| format!("   {}", t)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

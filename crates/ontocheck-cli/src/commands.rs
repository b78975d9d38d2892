//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use ontocheck_checker::{
    CheckConfig, ConformanceChecker, ConformanceReport, ConformanceValidator, ReservedPredicates,
};
use ontocheck_core::{EntityKind, IdentifierMinter, RESEARCH_NAMESPACE};
use ontocheck_loader::{
    write_ntriples, write_turtle, DefaultGraphLoader, GraphLoader, InputFormat, SchemaDocument,
};
use ontocheck_store::{research, RangeSpec, SchemaStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "ontocheck")]
#[command(about = "Schema conformance checker for RDF fact graphs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check a fact graph against a schema
    Check {
        /// Schema (TBox) file: .ttl, .nt or .json
        #[arg(long)]
        schema: PathBuf,

        /// Fact graph (ABox) file: .ttl, .nt or .json
        #[arg(long)]
        facts: PathBuf,

        /// Override the schema format guessed from the extension
        #[arg(long)]
        schema_format: Option<InputFormat>,

        /// Override the fact graph format guessed from the extension
        #[arg(long)]
        facts_format: Option<InputFormat>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Checker configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Predicates exempt from undeclared-property detection
        #[arg(long)]
        reserved: Option<ReservedPredicates>,

        /// Run the checks on the current thread only
        #[arg(long)]
        sequential: bool,
    },

    /// Summarize the declared vocabulary of a schema
    Schema {
        /// Schema (TBox) file
        #[arg(long)]
        schema: PathBuf,

        /// Override the schema format guessed from the extension
        #[arg(long)]
        schema_format: Option<InputFormat>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Mint an entity identifier from its natural key
    Mint {
        /// Entity kind (author, paper, venue, edition, proceedings, volume, city)
        #[arg(long)]
        kind: EntityKind,

        /// Natural key; repeat for composite keys
        #[arg(short = 'k', long = "key", required = true, num_args = 1..)]
        keys: Vec<String>,

        /// Namespace IRI ending in '/' or '#'
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Export the built-in research ontology
    ResearchSchema {
        /// Output format; turtle and n-triples include the subclass axioms
        #[arg(short, long, default_value = "json-pretty")]
        format: ExportFormat,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show system information
    Info,
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

/// Output formats of `research-schema`
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
    JsonPretty,
    Turtle,
    NTriples,
}

/// Command execution result
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Execute CLI commands
pub struct CommandExecutor {
    loader: DefaultGraphLoader,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            loader: DefaultGraphLoader,
        }
    }

    /// Execute a CLI command
    pub async fn execute(&self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Check {
                schema,
                facts,
                schema_format,
                facts_format,
                format,
                output,
                config,
                reserved,
                sequential,
            } => {
                let config = resolve_config(config.as_deref(), reserved, sequential)?;
                self.execute_check(
                    schema,
                    facts,
                    schema_format,
                    facts_format,
                    format,
                    output,
                    config,
                )
                .await
            }
            Commands::Schema {
                schema,
                schema_format,
                format,
            } => self.execute_schema(&schema, schema_format, format),
            Commands::Mint {
                kind,
                keys,
                namespace,
            } => self.execute_mint(kind, &keys, namespace.as_deref()),
            Commands::ResearchSchema { format, output } => {
                self.execute_research_schema(format, output.as_deref())
            }
            Commands::Info => self.execute_info(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn execute_check(
        &self,
        schema_path: PathBuf,
        facts_path: PathBuf,
        schema_format: Option<InputFormat>,
        facts_format: Option<InputFormat>,
        format: OutputFormat,
        output: Option<PathBuf>,
        config: CheckConfig,
    ) -> Result<CommandResult> {
        let loader = self.loader;
        let schema_task = {
            let path = schema_path.clone();
            tokio::task::spawn_blocking(move || loader.load_schema_file(&path, schema_format))
        };
        let facts_task = {
            let path = facts_path.clone();
            tokio::task::spawn_blocking(move || loader.load_facts_file(&path, facts_format))
        };

        // TBox と ABox を並行して読み込む
        let (schema, facts) = tokio::try_join!(schema_task, facts_task)?;
        let schema = schema
            .with_context(|| format!("failed to load schema from {}", schema_path.display()))?;
        let facts = facts
            .with_context(|| format!("failed to load facts from {}", facts_path.display()))?;

        debug!(?config, "running conformance check");
        let findings = ConformanceChecker::with_config(config).check(&schema, &facts);
        let report = ConformanceReport::new(findings);

        let rendered = match format {
            OutputFormat::Text => report.to_text(),
            OutputFormat::Json => report.to_json_string(false)?,
            OutputFormat::JsonPretty => report.to_json_string(true)?,
        };
        emit(output.as_deref(), &rendered)?;

        let summary = report.summary;
        info!(conforms = report.conforms, findings = summary.total(), "report written");

        Ok(CommandResult {
            success: report.conforms,
            message: if report.conforms {
                "Fact graph conforms to the schema".to_string()
            } else {
                format!("Fact graph does not conform: {} findings", summary.total())
            },
            data: Some(serde_json::json!({
                "conforms": report.conforms,
                "summary": summary,
                "statements": facts.len(),
            })),
        })
    }

    fn execute_schema(
        &self,
        path: &Path,
        schema_format: Option<InputFormat>,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let schema = self
            .loader
            .load_schema_file(path, schema_format)
            .with_context(|| format!("failed to load schema from {}", path.display()))?;
        let stats = schema.statistics();
        let message = format!(
            "Schema declares {} classes and {} properties",
            stats.class_count, stats.property_count
        );
        let data = serde_json::json!({
            "statistics": stats,
            "schema": SchemaDocument::from_store(&schema),
        });

        let rendered = match format {
            OutputFormat::Text => describe_schema(&schema),
            OutputFormat::Json => serde_json::to_string(&data)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&data)?,
        };
        emit(None, &rendered)?;

        Ok(CommandResult {
            success: true,
            message,
            data: Some(data),
        })
    }

    fn execute_mint(
        &self,
        kind: EntityKind,
        keys: &[String],
        namespace: Option<&str>,
    ) -> Result<CommandResult> {
        let minter = match namespace {
            Some(ns) => IdentifierMinter::new(ns)?,
            None => IdentifierMinter::research(),
        };

        let id = match keys {
            [key] => minter.mint(kind, key)?,
            parts => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                minter.mint_composite(kind, &parts)?
            }
        };
        println!("{}", id);

        Ok(CommandResult {
            success: true,
            message: format!("Minted {} identifier", kind),
            data: Some(serde_json::json!({
                "kind": kind,
                "keys": keys,
                "id": id,
            })),
        })
    }

    fn execute_research_schema(
        &self,
        format: ExportFormat,
        output: Option<&Path>,
    ) -> Result<CommandResult> {
        let schema = research::schema();
        let document = SchemaDocument::from_store(&schema);

        let rendered = match format {
            ExportFormat::Text => describe_schema(&schema),
            ExportFormat::Json => serde_json::to_string(&document)?,
            ExportFormat::JsonPretty => serde_json::to_string_pretty(&document)?,
            ExportFormat::Turtle => {
                write_turtle(&research::statements(), &[("ex", RESEARCH_NAMESPACE)])?
            }
            ExportFormat::NTriples => write_ntriples(&research::statements())?,
        };
        emit(output, &rendered)?;

        Ok(CommandResult {
            success: true,
            message: "Research ontology exported".to_string(),
            data: Some(serde_json::to_value(&document)?),
        })
    }

    fn execute_info(&self) -> Result<CommandResult> {
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "repository": env!("CARGO_PKG_REPOSITORY"),
            "input_formats": ["turtle", "n-triples", "json"],
            "entity_kinds": EntityKind::ALL,
        });

        let result = serde_json::to_string_pretty(&info)?;
        println!("{}", result);

        Ok(CommandResult {
            success: true,
            message: "System information".to_string(),
            data: Some(info),
        })
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Config file first, then command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    reserved: Option<ReservedPredicates>,
    sequential: bool,
) -> Result<CheckConfig> {
    let mut config = match path {
        Some(path) => {
            let src = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            CheckConfig::from_json(&src)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => CheckConfig::default(),
    };

    if let Some(reserved) = reserved {
        config.reserved_predicates = reserved;
    }
    if sequential {
        config.parallel = false;
    }
    Ok(config)
}

/// Human-readable vocabulary listing
pub fn describe_schema(schema: &SchemaStore) -> String {
    let stats = schema.statistics();
    let mut output = format!(
        "Schema: {} classes, {} properties\n\nClasses:\n",
        stats.class_count, stats.property_count
    );
    for class in schema.classes() {
        output.push_str(&format!("  - {}\n", class));
    }

    output.push_str("\nProperties:\n");
    for property in schema.properties() {
        let domain = if property.domain.is_empty() {
            "any".to_string()
        } else {
            property.domain.iter().join(" | ")
        };
        let range = match &property.range {
            Some(RangeSpec::Class(class)) => class.to_string(),
            Some(RangeSpec::Literal) => "literal".to_string(),
            None => "any".to_string(),
        };
        output.push_str(&format!(
            "  - {} (domain: {}, range: {})\n",
            property.id, domain, range
        ));
    }
    output
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

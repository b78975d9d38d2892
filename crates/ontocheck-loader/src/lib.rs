//! スキーマ / ファクトグラフ読み込み
//!
//! 外部パイプラインが生成したグラフを型付きのストアへ変換します:
//! - Turtle / N-Triples (sophia パーサー)
//! - JSON 交換形式 (SchemaDocument / FactDocument)
//! - TBox ステートメントからのスキーマ抽出
//! - Turtle / N-Triples への書き出し

pub mod json;
pub mod tbox;
pub mod turtle;
pub mod writer;

pub use json::{FactDocument, SchemaDocument};
pub use tbox::schema_from_statements;
pub use turtle::{parse_ntriples, parse_turtle};
pub use writer::{write_ntriples, write_turtle};

use ontocheck_core::model::Statement;
use ontocheck_core::CoreError;
use ontocheck_store::{FactStore, SchemaStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl LoadError {
    /// Prefix a malformed-input message with the statement position
    pub(crate) fn at(self, index: usize, position: &str) -> Self {
        match self {
            LoadError::MalformedInput(msg) => {
                LoadError::MalformedInput(format!("statement {} {}: {}", index, position, msg))
            }
            other => other,
        }
    }
}

impl From<CoreError> for LoadError {
    fn from(e: CoreError) -> Self {
        LoadError::MalformedInput(e.to_string())
    }
}

/// Serialization of a schema or fact graph source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    Turtle,
    NTriples,
    Json,
}

impl InputFormat {
    /// Guess the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("ttl") | Some("turtle") => Ok(InputFormat::Turtle),
            Some("nt") => Ok(InputFormat::NTriples),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Ok(InputFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(InputFormat::NTriples),
            "json" => Ok(InputFormat::Json),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Graph loader trait
pub trait GraphLoader {
    fn load_schema(&self, source: &str, format: InputFormat) -> Result<SchemaStore, LoadError>;
    fn load_facts(&self, source: &str, format: InputFormat) -> Result<FactStore, LoadError>;

    fn load_schema_file(
        &self,
        path: &Path,
        format: Option<InputFormat>,
    ) -> Result<SchemaStore, LoadError> {
        let format = resolve_format(path, format)?;
        let schema = self.load_schema(&read_source(path)?, format)?;
        let stats = schema.statistics();
        info!(
            path = %path.display(),
            classes = stats.class_count,
            properties = stats.property_count,
            "schema loaded"
        );
        Ok(schema)
    }

    fn load_facts_file(
        &self,
        path: &Path,
        format: Option<InputFormat>,
    ) -> Result<FactStore, LoadError> {
        let format = resolve_format(path, format)?;
        let facts = self.load_facts(&read_source(path)?, format)?;
        info!(path = %path.display(), statements = facts.len(), "fact graph loaded");
        Ok(facts)
    }
}

/// Default graph loader
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGraphLoader;

impl DefaultGraphLoader {
    fn statements(&self, source: &str, format: InputFormat) -> Result<Vec<Statement>, LoadError> {
        match format {
            InputFormat::Turtle => parse_turtle(source),
            InputFormat::NTriples => parse_ntriples(source),
            InputFormat::Json => FactDocument::from_json(source)?.into_statements(),
        }
    }
}

impl GraphLoader for DefaultGraphLoader {
    fn load_schema(&self, source: &str, format: InputFormat) -> Result<SchemaStore, LoadError> {
        match format {
            InputFormat::Json => SchemaDocument::from_json(source)?.into_store(),
            _ => schema_from_statements(&self.statements(source, format)?),
        }
    }

    fn load_facts(&self, source: &str, format: InputFormat) -> Result<FactStore, LoadError> {
        Ok(self.statements(source, format)?.into_iter().collect())
    }
}

fn resolve_format(path: &Path, format: Option<InputFormat>) -> Result<InputFormat, LoadError> {
    match format {
        Some(format) => Ok(format),
        None => InputFormat::from_path(path),
    }
}

pub fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

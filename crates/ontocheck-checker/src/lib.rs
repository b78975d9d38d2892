//! スキーマ適合性検証エンジン
//!
//! このクレートはファクトグラフのスキーマ適合性検証を提供します:
//! - 未宣言クラス・未宣言プロパティの検出 (Checker)
//! - domain / range / 型カテゴリ不一致の検出 (Checker)
//! - 検証レポート (Report)

pub mod checker;
pub mod config;
pub mod finding;
pub mod report;

// Re-exports
pub use checker::{ConformanceChecker, ConformanceValidator};
pub use config::{CheckConfig, ReservedPredicates};
pub use finding::{FindingSummary, Findings, MalformedTypeAssertion, Mismatch, MismatchKind};
pub use report::{ConformanceReport, ReportSection};

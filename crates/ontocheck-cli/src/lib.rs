//! # ontocheck CLI Library
//!
//! スキーマ適合性検証のコマンドラインインターフェース
//! TBox / ABox ファイルを読み込み、検証レポートを出力

pub mod commands;

pub use commands::*;

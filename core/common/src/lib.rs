//! greet 共通ライブラリ
//!
//! `greet`コマンドで使う機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// 補完ドライバーとプロバイダ
pub mod llm;

//! 環境変数による設定取得（adapter 層）
//!
//! app は環境変数に直接依存せず、ここを経由して取得する。

use common::llm::config::API_KEY_ENV;
use std::env;

/// 資格情報を環境変数 OPENAI_API_KEY から取得（未検証の生値）
///
/// 空文字の扱いは `resolve_api_key` 側で判定する。
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok()
}

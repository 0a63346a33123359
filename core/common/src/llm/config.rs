//! 固定のリクエスト設定
//!
//! greet は実行時入力を持たず、モデル・プロンプト・生成パラメータは
//! コンパイル時定数。資格情報だけを環境から受け取り、ここで検証して
//! `ApiKey` に包む。

use crate::domain::ApiKey;
use crate::error::Error;

/// 資格情報を読む環境変数名
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// モデル名
pub const MODEL: &str = "text-davinci-003";

/// 送信するプロンプト
pub const PROMPT: &str = "Say hello in a friendly way.";

/// 最大出力トークン数
pub const MAX_TOKENS: u32 = 20;

/// 温度パラメータ
pub const TEMPERATURE: f64 = 0.7;

/// 環境変数の生の値から ApiKey を解決する
///
/// 未設定または空（空白のみを含む）の場合は設定エラー。
/// ネットワークにはまだ触れていない段階で呼ぶこと。
pub fn resolve_api_key(value: Option<String>) -> Result<ApiKey, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(ApiKey::new(v)),
        _ => Err(Error::config(format!(
            "{} environment variable is not set",
            API_KEY_ENV
        ))),
    }
}

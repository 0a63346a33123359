//! 補完プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 補完リクエストのボディ（OpenAI /v1/completions）
///
/// 実行ごとに 1 つだけ生成され、送信後は破棄される。
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompletionRequest<'a> {
    /// モデル名
    pub model: &'a str,
    /// プロンプト
    pub prompt: &'a str,
    /// 最大出力トークン数
    pub max_tokens: u32,
    /// 温度（0.0〜2.0）
    pub temperature: f64,
}

/// 補完プロバイダのトレイト
///
/// リクエスト生成・HTTP 実行・レスポンス解析を分離し、テストでは
/// ネットワークに触れないスタブ実装に差し替えられるようにします。
pub trait CompletionProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// プロンプトからリクエストペイロードを生成
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - 生成失敗
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 接続・認証・ステータスの失敗
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから `choices[0].text` を抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（choices が空のときは None）
    /// * `Err(Error)` - レスポンスが不正
    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_serialize() {
        let request = CompletionRequest {
            model: "text-davinci-003",
            prompt: "Say hello in a friendly way.",
            max_tokens: 20,
            temperature: 0.7,
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["model"], "text-davinci-003");
        assert_eq!(v["prompt"], "Say hello in a friendly way.");
        assert_eq!(v["max_tokens"], 20);
        assert_eq!(v["temperature"], 0.7);
    }

    #[test]
    fn test_completion_request_has_exactly_four_fields() {
        let request = CompletionRequest {
            model: "m",
            prompt: "p",
            max_tokens: 1,
            temperature: 0.0,
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 4);
    }
}

//! Echoプロバイダの実装
//!
//! このプロバイダは実際に API を呼び出さず、プロンプトをそのまま
//! completions 形のレスポンスに包んで返します。デバッグやテスト用。

use crate::error::Error;
use crate::llm::provider::{CompletionProvider, CompletionRequest};
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        let request = CompletionRequest {
            model: "echo",
            prompt,
            max_tokens: 0,
            temperature: 0.0,
        };
        serde_json::to_value(&request)
            .map_err(|e| Error::json(format!("Failed to build request payload: {}", e)))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // リクエストからプロンプトを取り出し、ダミーのレスポンスに包む
        // （実際のAPI呼び出しは行わない）
        let request: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        let prompt = request["prompt"].as_str().unwrap_or("");
        let body = json!({
            "choices": [{"text": format!("[echo] {}", prompt)}]
        });
        Ok(body.to_string())
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["choices"][0]["text"].as_str().map(|s| s.to_string()))
    }
}

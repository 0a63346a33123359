//! OpenAI Completions (/v1/completions) プロバイダ

use crate::domain::ApiKey;
use crate::error::Error;
use crate::llm::config;
use crate::llm::provider::{CompletionProvider, CompletionRequest};
use serde_json::Value;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// OpenAIプロバイダ
///
/// 資格情報は呼び出し側で検証済みの `ApiKey` を受け取る。
/// 環境変数はここでは読まない。
pub struct OpenAiProvider {
    model: String,
    api_key: ApiKey,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiProvider {
    /// 固定のリクエスト設定でプロバイダを作成
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            model: config::MODEL.to_string(),
            api_key,
            max_tokens: config::MAX_TOKENS,
            temperature: config::TEMPERATURE,
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.as_str())
    }
}

impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        serde_json::to_value(&request)
            .map_err(|e| Error::json(format!("Failed to build request payload: {}", e)))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(COMPLETIONS_URL)
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("OpenAI API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // ボディにエラーが載ってくる場合がある
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("OpenAI API error: {}", error_msg)));
        }

        // choices[0].text 以外のフィールドは見ない
        let text = v["choices"][0]["text"].as_str().map(|s| s.to_string());

        Ok(text)
    }
}

//! 補完ドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。
//! リクエストとレスポンスは 1 対 1。リトライもページングも行いません。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;

/// 補完ドライバー
pub struct CompletionDriver<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 補完リクエストを 1 回実行してトリム済みテキストを取得
    ///
    /// # Arguments
    /// * `prompt` - 送信するプロンプト
    ///
    /// # Returns
    /// * `Ok(String)` - 前後の空白を除いた補完テキスト
    /// * `Err(Error)` - ペイロード生成・HTTP・解析のいずれかの失敗
    pub fn query(&self, prompt: &str) -> Result<String, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(prompt)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスからテキストを抽出
        let text = self
            .provider
            .parse_completion_text(&response_json)?
            .ok_or_else(|| Error::http("No completion text in response"))?;

        Ok(text.trim().to_string())
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

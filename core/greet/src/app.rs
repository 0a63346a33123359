//! アプリケーション本体
//!
//! 資格情報の解決 → プロバイダの組み立て → 1 回の補完リクエスト → 出力。

use crate::env;
use common::domain::ApiKey;
use common::error::Error;
use common::llm::config;
use common::llm::{CompletionDriver, CompletionProvider, OpenAiProvider};

/// 資格情報を検証してから補完を 1 回実行する
///
/// プロバイダはビルダーで注入し、テストではスタブに差し替える。
/// 資格情報が欠落している場合、ビルダーは呼ばれずネットワークにも触れない。
fn run_with_provider<P, F>(raw_key: Option<String>, build: F) -> Result<String, Error>
where
    P: CompletionProvider,
    F: FnOnce(ApiKey) -> P,
{
    let api_key = config::resolve_api_key(raw_key)?;
    let driver = CompletionDriver::new(build(api_key));
    driver.query(config::PROMPT)
}

/// エントリポイント
///
/// 成功時は補完テキストを 1 行出力して 0 を返す。
pub fn run() -> Result<i32, Error> {
    let text = run_with_provider(env::api_key_from_env(), OpenAiProvider::new)?;
    println!("{}", text);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::ErrorKind;
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::rc::Rc;

    // HTTP呼び出し回数を記録するスタブ
    struct StubProvider {
        http_calls: Rc<Cell<usize>>,
        response: Result<String, Error>,
    }

    impl StubProvider {
        fn with_response(http_calls: Rc<Cell<usize>>, body: &str) -> Self {
            Self {
                http_calls,
                response: Ok(body.to_string()),
            }
        }

        fn with_transport_error(http_calls: Rc<Cell<usize>>) -> Self {
            Self {
                http_calls,
                response: Err(Error::http("HTTP request failed: connection refused")),
            }
        }
    }

    impl CompletionProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
            Ok(json!({
                "model": config::MODEL,
                "prompt": prompt,
                "max_tokens": config::MAX_TOKENS,
                "temperature": config::TEMPERATURE
            }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            self.http_calls.set(self.http_calls.get() + 1);
            // ペイロードの固定パラメータ不変条件をここでも確認する
            let v: Value = serde_json::from_str(request_json).unwrap();
            assert_eq!(v["max_tokens"], 20);
            assert_eq!(v["temperature"], 0.7);
            self.response.clone()
        }

        fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            Ok(v["choices"][0]["text"].as_str().map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_missing_credential_makes_no_http_call() {
        let calls = Rc::new(Cell::new(0));
        let calls_in_stub = calls.clone();
        let err = run_with_provider(None, |_key| {
            StubProvider::with_response(calls_in_stub, r#"{"choices":[{"text":"hi"}]}"#)
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.exit_code(), 64);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_credential_makes_no_http_call() {
        let calls = Rc::new(Cell::new(0));
        let calls_in_stub = calls.clone();
        let err = run_with_provider(Some(String::new()), |_key| {
            StubProvider::with_response(calls_in_stub, r#"{"choices":[{"text":"hi"}]}"#)
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_success_prints_trimmed_text() {
        let calls = Rc::new(Cell::new(0));
        let calls_in_stub = calls.clone();
        let text = run_with_provider(Some("sk-test".to_string()), |_key| {
            StubProvider::with_response(calls_in_stub, r#"{"choices":[{"text":"  Hello there!  "}]}"#)
        })
        .unwrap();
        assert_eq!(text, "Hello there!");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_empty_choices_is_remote_error() {
        let calls = Rc::new(Cell::new(0));
        let err = run_with_provider(Some("sk-test".to_string()), |_key| {
            StubProvider::with_response(calls.clone(), r#"{"choices":[]}"#)
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_transport_error_propagates() {
        let calls = Rc::new(Cell::new(0));
        let err = run_with_provider(Some("sk-test".to_string()), |_key| {
            StubProvider::with_transport_error(calls.clone())
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert!(err.to_string().contains("connection refused"));
    }
}

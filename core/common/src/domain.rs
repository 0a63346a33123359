//! ドメイン型（Newtype）
//!
//! String を直接運ばず、意味のある型に包んで境界を明確にする。

/// APIキー（資格情報）
///
/// 環境変数から読んだ生の値は `llm::config::resolve_api_key` で検証してから包む。
/// 値がログや panic メッセージに漏れないよう、Debug は伏せ字で出力する。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ApiKey {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(****)")
    }
}

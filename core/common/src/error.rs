//! エラーハンドリング
//!
//! 終了コード付きの構造化エラー。コードは sysexits(3) の慣習に合わせる。
//! 失敗は全て致命的で、リトライは行わない。

/// エラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 設定エラー（資格情報の欠落など）。ネットワークに触れる前に検出する
    Config,
    /// リモート呼び出しの失敗（接続・認証・HTTP ステータス・choices の欠落）
    Http,
    /// JSON の生成・解析の失敗
    Json,
}

/// 終了コード付きエラー
///
/// `(メッセージ, 種別)`を保持し、main で `exit_code()` をそのまま
/// プロセスの終了コードに使う。
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// 設定エラーを作成
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            message: message.into(),
        }
    }

    /// リモート呼び出しエラーを作成
    pub fn http(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Http,
            message: message.into(),
        }
    }

    /// JSONエラーを作成
    pub fn json(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Json,
            message: message.into(),
        }
    }

    /// エラー種別を返す
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// sysexits(3) 互換の終了コード
    ///
    /// 設定エラーは 64（EX_USAGE）、リモート呼び出し関連は 74（EX_IOERR）
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Config => 64,
            ErrorKind::Http | ErrorKind::Json => 74,
        }
    }
}

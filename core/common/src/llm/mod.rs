//! 補完ドライバーとプロバイダの実装
//!
//! OpenAI への 1 回の補完リクエストに必要な共通処理を提供します。

pub mod config;
pub mod driver;
pub mod echo;
pub mod openai;
pub mod provider;

pub use driver::CompletionDriver;
pub use echo::EchoProvider;
pub use openai::OpenAiProvider;
pub use provider::{CompletionProvider, CompletionRequest};

//! # テスト用モックトランスポート
//!
//! ユースケーステストで使用するインメモリのメールトランスポート。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! greetflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use greetflow_domain::greeting::{GreetingMail, MailerError};

use super::MailTransport;

/// モックが返す確認応答
const MOCK_ACK: &str = "250 2.0.0 OK mock";

/// モックメール送信
///
/// 送信されたメールをメモリに記録する。[`MockMailer::failing`] で構築すると
/// 常に `MailerError::SendFailed` を返し、記録は行わない。
#[derive(Clone, Default)]
pub struct MockMailer {
    sent:      Arc<Mutex<Vec<GreetingMail>>>,
    fail_with: Option<String>,
}

impl MockMailer {
    /// 常に成功するモックを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に失敗するモックを作成する
    ///
    /// `detail` はトランスポートエラーの詳細として返される
    /// （クライアントに漏れないことの検証に使う）。
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            sent:      Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(detail.into()),
        }
    }

    /// 記録された送信メールのスナップショットを返す
    pub fn sent_mails(&self) -> Vec<GreetingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for MockMailer {
    async fn send(&self, mail: &GreetingMail) -> Result<String, MailerError> {
        if let Some(detail) = &self.fail_with {
            return Err(MailerError::SendFailed(detail.clone()));
        }

        self.sent.lock().unwrap().push(mail.clone());
        Ok(MOCK_ACK.to_string())
    }
}

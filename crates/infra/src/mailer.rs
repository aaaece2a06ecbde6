//! # メールトランスポート
//!
//! グリーティングメールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`MailTransport`] trait でメール送信を抽象化
//! - **3 つの実装**: SMTP（Gmail リレー、本番用）、Noop（資格情報なしの開発用）、
//!   Mock（テスト用、`test-utils` feature）
//! - **環境変数切替**: `MAILER_BACKEND` でランタイム選択（mail-api 側で解決）

mod noop;
mod smtp;

use async_trait::async_trait;
use greetflow_domain::greeting::{GreetingMail, MailerError};
pub use noop::NoopMailer;
pub use smtp::SmtpMailer;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

/// メール送信トレイト
///
/// メール送信の具体的な方法を抽象化する。送信は 1 回限りで、
/// リトライやタイムアウトはこの層では行わない（プロバイダ側の挙動に委ねる）。
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// メールを送信し、プロバイダの確認応答（不透明なメッセージ識別子）を返す
    ///
    /// 返り値はログ出力専用で、呼び出し側の成否判定には `Result` のみを使う。
    async fn send(&self, mail: &GreetingMail) -> Result<String, MailerError>;
}

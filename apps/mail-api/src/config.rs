//! # mail-api 設定
//!
//! 環境変数から mail-api サーバーの設定を読み込む。
//!
//! SMTP 資格情報（`EMAIL_USER` / `EMAIL_PASS`）は必須ではない。
//! 欠落していてもサーバーは起動し、送信リクエストに対して
//! 「サービス未設定」のエラーを返す（デプロイ事故をリクエスト単位の
//! エラーに閉じ込め、プロセスは落とさない）。

use std::env;

/// デフォルトのリッスンポート
const DEFAULT_PORT: u16 = 3001;

/// mail-api サーバーの設定
#[derive(Debug, Clone)]
pub struct MailApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// メールトランスポートの選択
    pub mailer_backend: MailerBackend,
    /// SMTP 資格情報（未設定の場合は None）
    pub smtp_credentials: Option<SmtpCredentials>,
}

/// メールトランスポートの選択
///
/// `MAILER_BACKEND` 環境変数で切り替える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailerBackend {
    /// Gmail SMTP リレー（本番用、デフォルト）
    #[default]
    Smtp,
    /// 送信せずログ出力のみ（開発用）
    Noop,
}

/// SMTP 資格情報
///
/// `EMAIL_USER` / `EMAIL_PASS` のペア。両方が非空のときのみ存在する。
#[derive(Clone)]
pub struct SmtpCredentials {
    /// Gmail アカウント
    pub user: String,
    /// アプリパスワード
    pub pass: String,
}

// パスワードをログに出さないため Debug は手動実装でマスクする
impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

impl MailApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            host,
            port,
            mailer_backend: backend_from(env::var("MAILER_BACKEND").ok().as_deref()),
            smtp_credentials: credentials_from(
                env::var("EMAIL_USER").ok(),
                env::var("EMAIL_PASS").ok(),
            ),
        }
    }
}

/// `MAILER_BACKEND` の値からトランスポート選択をパースする
///
/// 不正な値の場合は SMTP にフォールバックし、警告を出力する。
fn backend_from(value: Option<&str>) -> MailerBackend {
    match value {
        None | Some("smtp") => MailerBackend::Smtp,
        Some("noop") => MailerBackend::Noop,
        Some(other) => {
            tracing::warn!("不明な MAILER_BACKEND={other:?} のため smtp を使用します");
            MailerBackend::Smtp
        }
    }
}

/// `EMAIL_USER` / `EMAIL_PASS` から資格情報を組み立てる
///
/// どちらかが未設定または空文字列の場合は None（未設定状態）を返す。
fn credentials_from(user: Option<String>, pass: Option<String>) -> Option<SmtpCredentials> {
    let user = user.filter(|v| !v.is_empty())?;
    let pass = pass.filter(|v| !v.is_empty())?;
    Some(SmtpCredentials { user, pass })
}

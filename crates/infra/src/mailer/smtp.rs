//! SMTP メール送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用して Gmail リレー経由でメールを送信する。
//! 認証には Gmail アカウントとアプリパスワードを使用する。

use async_trait::async_trait;
use greetflow_domain::greeting::{GreetingMail, MailerError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Attachment, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::MailTransport;

/// Gmail の SMTP リレーホスト
const GMAIL_RELAY: &str = "smtp.gmail.com";

/// SMTP メール送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// Gmail リレー（submissions ポート、TLS）に接続する。
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Gmail リレー向けの SMTP 送信インスタンスを作成する
    ///
    /// # 引数
    ///
    /// - `user`: Gmail アカウント（SMTP AUTH のユーザー名）
    /// - `pass`: アプリパスワード
    ///
    /// # エラー
    ///
    /// リレー設定の構築に失敗した場合は `MailerError::SendFailed` を返す。
    /// 接続自体は遅延され、最初の送信時に確立される。
    pub fn gmail(user: &str, pass: &str) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(GMAIL_RELAY)
            .map_err(|e| MailerError::SendFailed(format!("SMTP リレー設定に失敗: {e}")))?
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .build();

        Ok(Self { transport })
    }

    /// ドメインモデルから lettre のメッセージを構築する
    ///
    /// HTML 本文と添付 1 件からなる multipart/mixed メッセージを組み立てる。
    fn build_message(mail: &GreetingMail) -> Result<Message, MailerError> {
        let content_type = ContentType::parse(&mail.attachment.content_type)
            .map_err(|e| MailerError::SendFailed(format!("添付の Content-Type が不正: {e}")))?;

        let attachment = Attachment::new(mail.attachment.filename.clone())
            .body(mail.attachment.bytes.clone(), content_type);

        Message::builder()
            .from(mail
                .from
                .parse()
                .map_err(|e| MailerError::SendFailed(format!("送信元アドレス不正: {e}")))?)
            .to(mail
                .to
                .as_str()
                .parse()
                .map_err(|e| MailerError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&mail.subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(mail.html_body.clone()),
                    )
                    .singlepart(attachment),
            )
            .map_err(|e| MailerError::SendFailed(format!("メッセージ構築失敗: {e}")))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &GreetingMail) -> Result<String, MailerError> {
        let message = Self::build_message(mail)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailerError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(response.first_line().unwrap_or_default().to_string())
    }
}

//! Noop メール送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! SMTP 資格情報なしでパイプライン全体を動かす開発環境向け。

use async_trait::async_trait;
use greetflow_domain::greeting::{GreetingMail, MailerError};

use super::MailTransport;

/// Noop メール送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopMailer;

#[async_trait]
impl MailTransport for NoopMailer {
    async fn send(&self, mail: &GreetingMail) -> Result<String, MailerError> {
        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            attachment = %mail.attachment.filename,
            "Noop: メール送信をスキップ"
        );
        Ok("noop".to_string())
    }
}

#[cfg(test)]
mod tests {
    use greetflow_domain::greeting::{GmailAddress, MailAttachment};

    use super::*;

    #[tokio::test]
    async fn sendがエラーを返さない() {
        let mailer = NoopMailer;
        let mail = GreetingMail {
            from:       "sender@gmail.com".to_string(),
            to:         GmailAddress::parse("test@gmail.com").unwrap(),
            subject:    "テスト件名".to_string(),
            html_body:  "<p>テスト</p>".to_string(),
            attachment: MailAttachment {
                filename:     "greeting.png".to_string(),
                content_type: "image/png".to_string(),
                bytes:        vec![0, 0, 0],
            },
        };

        let result = mailer.send(&mail).await;
        assert!(result.is_ok());
    }
}

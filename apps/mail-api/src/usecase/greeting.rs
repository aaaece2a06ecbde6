//! # グリーティングメール送信ユースケース
//!
//! 検証 → デコード → 資格情報確認 → メッセージ構築 → 送信の
//! 直線的なパイプラインを実装する。
//!
//! ## 検証順序（先に失敗したチェックが勝つ）
//!
//! 1. `email` / `imageBase64` の存在（欠落・空 → `MissingFields`）
//! 2. 宛先の Gmail アドレス検証（→ `InvalidRecipient`）
//! 3. 画像 data URL の検証とデコード（→ `InvalidImagePayload`）
//! 4. SMTP 資格情報の有無（→ `ServiceUnconfigured`、送信は試行しない）
//!
//! 資格情報チェックをペイロード検証の後に置くことで、クライアント起因の
//! 不正リクエストがサーバー設定不備より先に報告される。
//!
//! ## メッセージの固定部
//!
//! 差出人・件名・HTML 本文・添付ファイル名はすべて固定。
//! 本文にユーザー入力を差し込まないため、受信メールへの
//! コンテンツ注入は構造的に起こらない。

use std::sync::Arc;

use greetflow_domain::greeting::{GmailAddress, GreetingImage, GreetingMail, MailAttachment};
use greetflow_infra::MailTransport;
use greetflow_shared::{
    event_log::{error, event},
    log_business_event,
};

use crate::error::DispatchError;

/// 差出人メールアドレス（固定）
pub const SENDER_ADDRESS: &str = "rcewishweaver@gmail.com";

/// 件名（固定）
pub const MAIL_SUBJECT: &str = "Your RCE Welcome's 2026 Greeting 🎉";

/// 添付ファイル名（固定）
pub const ATTACHMENT_FILENAME: &str = "greeting-2026.png";

/// HTML 本文（固定、ユーザー入力は差し込まない）
const HTML_BODY: &str = r#"
        <div style="font-family:Arial,Helvetica,sans-serif;color:#222;">
          <p>Greetings from <strong>Ramachandra College of Engineering (Autonomous)</strong>,</p>
          <p>Wishing you a wonderful and successful 2026.</p>
          <p>Please find your personalized RCE New Year 2026 greeting attached.</p>
        </div>
      "#;

/// 送達結果
///
/// `acknowledgment` はプロバイダの確認応答（不透明なメッセージ識別子）。
/// ログに記録されるのみで、クライアントには返さない。
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub acknowledgment: String,
}

/// グリーティングメール送信サービス
///
/// トランスポートは起動時に注入される。資格情報が未設定の場合は `None` が
/// 渡され、送信リクエストは `ServiceUnconfigured` で終端する。
pub struct GreetingMailService {
    mailer: Option<Arc<dyn MailTransport>>,
}

impl GreetingMailService {
    pub fn new(mailer: Option<Arc<dyn MailTransport>>) -> Self {
        Self { mailer }
    }

    /// グリーティングメールを 1 件送信する
    ///
    /// リクエストごとに独立しており、リトライや中間状態の保存は行わない。
    /// 結果 1 件につきログを 1 行出力する。
    pub async fn dispatch(
        &self,
        email: Option<&str>,
        image_base64: Option<&str>,
    ) -> Result<DeliveryReceipt, DispatchError> {
        // 1. 必須フィールドの存在（欠落と空文字列は同義）
        let (Some(email), Some(image_base64)) = (
            email.filter(|v| !v.is_empty()),
            image_base64.filter(|v| !v.is_empty()),
        ) else {
            tracing::warn!(
                error.category = error::category::VALIDATION,
                "必須フィールド（email / imageBase64）が不足しています"
            );
            return Err(DispatchError::MissingFields);
        };

        // 2. 宛先の Gmail アドレス検証
        let recipient = GmailAddress::parse(email).map_err(|e| {
            tracing::warn!(
                error.category = error::category::VALIDATION,
                "宛先アドレスの検証に失敗: {}",
                e
            );
            DispatchError::InvalidRecipient
        })?;

        // 3. 画像 data URL の検証とデコード
        let image = GreetingImage::from_data_url(image_base64).map_err(|e| {
            tracing::warn!(
                error.category = error::category::VALIDATION,
                "画像ペイロードの検証に失敗: {}",
                e
            );
            DispatchError::InvalidImagePayload
        })?;

        // 4. 資格情報の有無（未設定なら送信は試行しない）
        let Some(mailer) = &self.mailer else {
            tracing::error!(
                error.category = error::category::CONFIGURATION,
                "SMTP 資格情報が未設定のため送信できません"
            );
            return Err(DispatchError::ServiceUnconfigured);
        };

        // 5. メッセージ構築（固定テンプレート + 添付 1 件）
        let mail = GreetingMail {
            from:       SENDER_ADDRESS.to_string(),
            to:         recipient,
            subject:    MAIL_SUBJECT.to_string(),
            html_body:  HTML_BODY.to_string(),
            attachment: MailAttachment {
                filename:     ATTACHMENT_FILENAME.to_string(),
                content_type: image.format.content_type().to_string(),
                bytes:        image.bytes,
            },
        };

        // 6. 送信（単一の待機ポイント、リトライなし）
        match mailer.send(&mail).await {
            Ok(acknowledgment) => {
                log_business_event!(
                    event.category = event::category::GREETING,
                    event.action = event::action::GREETING_SENT,
                    event.result = event::result::SUCCESS,
                    mail.recipient = %mail.to,
                    mail.acknowledgment = %acknowledgment,
                    "グリーティングメール送信成功"
                );
                Ok(DeliveryReceipt { acknowledgment })
            }
            Err(e) => {
                // トランスポートの詳細はログのみ。クライアントには汎用文言を返す
                log_business_event!(
                    event.category = event::category::GREETING,
                    event.action = event::action::GREETING_FAILED,
                    event.result = event::result::FAILURE,
                    mail.recipient = %mail.to,
                    error = %e,
                    "グリーティングメール送信失敗"
                );
                Err(DispatchError::DeliveryFailed)
            }
        }
    }
}

//! # mail-api エラーハンドリング
//!
//! 送信パイプラインのエラー定義と、axum レスポンスへの変換。
//!
//! ## 設計方針
//!
//! - エラー分類は 5 種類で全件終端（リトライなし）
//! - クライアントへ返す文言は API 契約で固定。内部詳細（スタックトレース、
//!   プロバイダ固有のエラー文字列）は決して含めない
//! - 4xx はクライアント起因、5xx はサーバー起因（設定不備・トランスポート失敗）

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use greetflow_shared::ErrorBody;
use thiserror::Error;

/// 送信パイプラインのエラー
///
/// 検証順序（先に失敗したものが勝つ）:
/// フィールド存在 → Gmail アドレス → data URL → 資格情報 → トランスポート。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// 必須フィールドの欠落（未指定または空文字列）
    #[error("必須フィールドが不足しています")]
    MissingFields,

    /// 宛先が Gmail アドレスのパターンを満たさない
    #[error("宛先が Gmail アドレスではありません")]
    InvalidRecipient,

    /// 画像ペイロードが data URL 形式を満たさない
    #[error("画像ペイロードが data URL 形式ではありません")]
    InvalidImagePayload,

    /// SMTP 資格情報が未設定（デプロイ不備）
    #[error("メール送信サービスが未設定です")]
    ServiceUnconfigured,

    /// トランスポートでの送信失敗（接続・認証・プロバイダ拒否）
    #[error("メール送信に失敗しました")]
    DeliveryFailed,
}

impl DispatchError {
    /// HTTP ステータスコードへのマッピング
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidRecipient | Self::InvalidImagePayload => {
                StatusCode::BAD_REQUEST
            }
            Self::ServiceUnconfigured | Self::DeliveryFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// クライアントへ返す固定メッセージ（API 契約）
    pub fn wire_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Missing required fields: email and imageBase64",
            Self::InvalidRecipient => "Please provide a valid Gmail address (example@gmail.com)",
            Self::InvalidImagePayload => {
                "imageBase64 must be a data URL with PNG or JPEG base64 data"
            }
            Self::ServiceUnconfigured => "Email service is not configured",
            Self::DeliveryFailed => "Failed to send email",
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorBody::new(self.wire_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn response_status_and_body(response: Response) -> (StatusCode, ErrorBody) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        (status, error)
    }

    #[tokio::test]
    async fn missing_fieldsは400と固定メッセージ() {
        let (status, body) = response_status_and_body(DispatchError::MissingFields.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required fields: email and imageBase64");
    }

    #[tokio::test]
    async fn invalid_recipientは400と固定メッセージ() {
        let (status, body) =
            response_status_and_body(DispatchError::InvalidRecipient.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error,
            "Please provide a valid Gmail address (example@gmail.com)"
        );
    }

    #[tokio::test]
    async fn invalid_image_payloadは400と固定メッセージ() {
        let (status, body) =
            response_status_and_body(DispatchError::InvalidImagePayload.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error,
            "imageBase64 must be a data URL with PNG or JPEG base64 data"
        );
    }

    #[tokio::test]
    async fn service_unconfiguredは500と汎用メッセージ() {
        let (status, body) =
            response_status_and_body(DispatchError::ServiceUnconfigured.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Email service is not configured");
    }

    #[tokio::test]
    async fn delivery_failedは500と汎用メッセージ() {
        let (status, body) =
            response_status_and_body(DispatchError::DeliveryFailed.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to send email");
    }

    #[test]
    fn レスポンスボディはerrorフィールドのみを持つ() {
        let json = serde_json::to_value(ErrorBody::new(
            DispatchError::DeliveryFailed.wire_message(),
        ))
        .unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Failed to send email" }));
    }
}

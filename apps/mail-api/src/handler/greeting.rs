//! # グリーティングメール送信ハンドラ
//!
//! `POST /api/send-greeting-email` を提供する。
//!
//! ハンドラは薄く保ち、検証と送信はユースケース層
//! （[`crate::usecase::GreetingMailService`]）に委譲する。
//! エラーからレスポンスへの変換は [`crate::error::DispatchError`] の
//! `IntoResponse` 実装が担う。

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{error::DispatchError, usecase::GreetingMailService};

// --- リクエスト/レスポンス型 ---

/// 送信リクエスト
///
/// フィールドの欠落はデシリアライズエラーにせず、ユースケース側で
/// `MissingFields` として報告する（欠落と空文字列を同じ扱いにするため）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendGreetingRequest {
    #[serde(default)]
    pub email:        Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

/// 送信成功レスポンス
///
/// API 契約により `{ "success": true }` の形で返す。
#[derive(Debug, Serialize)]
pub struct SendGreetingResponse {
    pub success: bool,
}

// --- ハンドラ ---

/// POST /api/send-greeting-email
///
/// 宛先と base64 画像を検証し、グリーティングメールを 1 件同期送信する。
pub async fn send_greeting(
    State(service): State<Arc<GreetingMailService>>,
    Json(request): Json<SendGreetingRequest>,
) -> Result<Json<SendGreetingResponse>, DispatchError> {
    service
        .dispatch(request.email.as_deref(), request.image_base64.as_deref())
        .await?;

    Ok(Json(SendGreetingResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use greetflow_infra::mailer::mock::MockMailer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::usecase::greeting::ATTACHMENT_FILENAME;

    fn make_state(mailer: MockMailer) -> State<Arc<GreetingMailService>> {
        State(Arc::new(GreetingMailService::new(Some(Arc::new(mailer)))))
    }

    fn make_request(email: Option<&str>, image_base64: Option<&str>) -> Json<SendGreetingRequest> {
        Json(SendGreetingRequest {
            email:        email.map(str::to_string),
            image_base64: image_base64.map(str::to_string),
        })
    }

    async fn status_and_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    // --- エンドツーエンドシナリオ ---

    #[tokio::test]
    async fn 正常リクエストで200とsuccess_trueを返す() {
        let mailer = MockMailer::new();
        let state = make_state(mailer.clone());
        let request = make_request(
            Some("student@gmail.com"),
            Some("data:image/png;base64,AAAA"),
        );

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "success": true }));

        // モックにはちょうど 1 件、固定ファイル名・デコード済みバイト列で届く
        let sent = mailer.sent_mails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to.as_str(), "student@gmail.com");
        assert_eq!(sent[0].attachment.filename, ATTACHMENT_FILENAME);
        assert_eq!(sent[0].attachment.bytes, vec![0, 0, 0]);
    }

    // --- エラーレスポンス ---

    #[tokio::test]
    async fn フィールド欠落で400とエラーボディを返す() {
        let state = make_state(MockMailer::new());
        let request = make_request(None, Some("data:image/png;base64,AAAA"));

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Missing required fields: email and imageBase64" })
        );
    }

    #[tokio::test]
    async fn gmail以外の宛先で400とエラーボディを返す() {
        let state = make_state(MockMailer::new());
        let request = make_request(Some("a@yahoo.com"), Some("data:image/png;base64,AAAA"));

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Please provide a valid Gmail address (example@gmail.com)" })
        );
    }

    #[tokio::test]
    async fn 不正な画像で400とエラーボディを返す() {
        let state = make_state(MockMailer::new());
        let request = make_request(Some("student@gmail.com"), Some("iVBORw0KGgo="));

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "error": "imageBase64 must be a data URL with PNG or JPEG base64 data" })
        );
    }

    #[tokio::test]
    async fn 資格情報未設定で500とエラーボディを返す() {
        let state = State(Arc::new(GreetingMailService::new(None)));
        let request = make_request(
            Some("student@gmail.com"),
            Some("data:image/png;base64,AAAA"),
        );

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Email service is not configured" })
        );
    }

    #[tokio::test]
    async fn 送信失敗で500と汎用メッセージを返す() {
        // トランスポートの詳細（認証拒否の文言）はレスポンスに漏れない
        let state = make_state(MockMailer::failing("534-5.7.9 Application-specific password required"));
        let request = make_request(
            Some("student@gmail.com"),
            Some("data:image/png;base64,AAAA"),
        );

        let response = send_greeting(state, request).await.into_response();
        let (status, json) = status_and_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Failed to send email" }));
    }

    // --- リクエスト型のデシリアライズ ---

    #[test]
    fn リクエストはcamel_caseのフィールド名を受け取る() {
        let json = r#"{"email": "a@gmail.com", "imageBase64": "data:image/png;base64,AAAA"}"#;
        let request: SendGreetingRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email.as_deref(), Some("a@gmail.com"));
        assert_eq!(
            request.image_base64.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn リクエストはフィールド欠落でもデシリアライズできる() {
        let request: SendGreetingRequest = serde_json::from_str("{}").unwrap();

        assert!(request.email.is_none());
        assert!(request.image_base64.is_none());
    }
}

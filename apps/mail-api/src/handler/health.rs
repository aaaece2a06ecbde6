//! # ヘルスチェックハンドラ
//!
//! mail-api の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//!
//! SMTP プロバイダへの疎通はリクエスト外で確認しない方針のため、
//! Readiness Check は提供しない。

use axum::Json;
use greetflow_shared::HealthResponse;

/// mail-api のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

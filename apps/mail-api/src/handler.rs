//! # HTTP ハンドラ
//!
//! mail-api のエンドポイントを提供する。
//!
//! - `POST /api/send-greeting-email` - グリーティングメール送信（[`greeting`]）
//! - `GET /health` - ヘルスチェック（[`health`]）

pub mod greeting;
pub mod health;

pub use greeting::send_greeting;
pub use health::health_check;

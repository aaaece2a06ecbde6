//! # ユースケース層
//!
//! mail-api のビジネスロジックを集約する。
//!
//! - [`greeting`] - グリーティングメールの検証・構築・送信パイプライン

pub mod greeting;

pub use greeting::GreetingMailService;

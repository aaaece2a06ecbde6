//! # GreetFlow ドメイン層
//!
//! グリーティングメール送信のビジネスルールを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 検証済みの値のみを型として存在させる（例:
//!   [`greeting::GmailAddress`] は構築に成功した時点でパターンを満たす）
//! - **I/O 非依存**: このクレートはネットワークにも環境変数にも触れない。
//!   トランスポートの実装はインフラ層の責務
//! - **ドメインエラー**: 検証失敗を列挙型で表現し、API 層でレスポンスに変換する
//!
//! ## 依存関係の方向
//!
//! ```text
//! mail-api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`greeting`] - 宛先アドレス、グリーティング画像、送信メールのモデル

pub mod error;
pub mod greeting;

pub use error::DomainError;

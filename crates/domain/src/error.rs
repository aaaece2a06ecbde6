//! # ドメイン層エラー定義
//!
//! グリーティングメールの入力検証で発生するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **詳細はログ専用**: 各バリアントが持つ文字列は内部ログ向けの詳細で、
//!   クライアントに返す文言は API 層が固定メッセージで別途持つ

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 入力検証の失敗を表現する。API 層でこのエラーを受け取り、
/// 固定のエラーレスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// 宛先が Gmail アドレスのパターンを満たさない
    ///
    /// # 例
    ///
    /// - ドメインが `gmail.com` 以外
    /// - ローカル部が空、または空白 / `@` を含む
    #[error("宛先メールアドレスが不正: {0}")]
    InvalidRecipient(String),

    /// 画像ペイロードが data URL 形式を満たさない
    ///
    /// # 例
    ///
    /// - `data:image/...;base64,...` の形をしていない
    /// - サブタイプが png / jpeg / jpg 以外
    /// - base64 部が空、またはデコード不能な文字を含む
    #[error("画像ペイロードが不正: {0}")]
    InvalidImagePayload(String),
}

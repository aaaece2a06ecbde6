//! # エラーレスポンスボディ
//!
//! 公開 API の統一エラーレスポンス形式 `{ "error": "<message>" }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorBody` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - メッセージ文字列はサービスの API 契約で固定されるため、ここでは持たない

use serde::{Deserialize, Serialize};

/// エラーレスポンスボディ
///
/// すべてのエラーレスポンスは `{ "error": "<message>" }` 形式で返す。
/// メッセージはクライアントにそのまま表示されることを想定した固定文言で、
/// 内部エラーの詳細（スタックトレース、プロバイダ固有コード）は含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// 新しいエラーボディを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

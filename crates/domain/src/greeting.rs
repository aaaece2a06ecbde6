//! # グリーティングメール
//!
//! グリーティングメール送信に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`GmailAddress`] | 宛先 Gmail アドレス | 正規化後に `local@gmail.com` パターンを満たす |
//! | [`ImageFormat`] | 画像サブタイプ | png / jpeg / jpg の 3 種類（大文字小文字を区別） |
//! | [`GreetingImage`] | デコード済みグリーティング画像 | data URL から導出される |
//! | [`GreetingMail`] | 送信メール | 固定の差出人・件名・本文 + 添付 1 件 |
//!
//! ## 設計方針
//!
//! - **構築時検証**: 値オブジェクトは構築に成功した時点で不変条件を満たす
//! - **正規表現は使わない**: パターンは明示的な構造チェックで表現する
//! - **Gmail 限定は業務ルール**: 送信フローが Gmail 前提のための制約であり、
//!   一般的なメールアドレス検証ではない。緩和する場合は
//!   [`GmailAddress::parse`] の 1 箇所を変更する

use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use thiserror::Error;

use crate::DomainError;

// =========================================================================
// GmailAddress（宛先 Gmail アドレス）
// =========================================================================

/// 宛先 Gmail アドレス（値オブジェクト）
///
/// 入力をトリム + 小文字化したうえで、
/// 「空白と `@` を含まない 1 文字以上のローカル部 + `@gmail.com`」
/// のパターンを満たすことを構築時に保証する。
///
/// # 使用例
///
/// ```
/// use greetflow_domain::greeting::GmailAddress;
///
/// let address = GmailAddress::parse(" Student@GMAIL.COM ").unwrap();
/// assert_eq!(address.as_str(), "student@gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmailAddress(String);

impl GmailAddress {
    /// 宛先ドメイン（固定）
    const DOMAIN_SUFFIX: &'static str = "@gmail.com";

    /// 入力文字列を正規化して Gmail アドレスとしてパースする
    ///
    /// # 正規化
    ///
    /// - 前後の空白をトリム
    /// - 小文字化
    ///
    /// # バリデーション
    ///
    /// - 正規化後の文字列が `@gmail.com` で終わる
    /// - ローカル部が 1 文字以上で、空白文字と `@` を含まない
    ///
    /// # エラー
    ///
    /// パターンを満たさない場合は `DomainError::InvalidRecipient` を返す。
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().to_lowercase();

        let Some(local) = normalized.strip_suffix(Self::DOMAIN_SUFFIX) else {
            return Err(DomainError::InvalidRecipient(format!(
                "ドメインが gmail.com ではありません: {normalized}"
            )));
        };

        if local.is_empty() {
            return Err(DomainError::InvalidRecipient(
                "ローカル部が空です".to_string(),
            ));
        }

        if local.chars().any(|c| c.is_whitespace() || c == '@') {
            return Err(DomainError::InvalidRecipient(
                "ローカル部に空白または @ が含まれています".to_string(),
            ));
        }

        Ok(Self(normalized))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for GmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// ImageFormat（画像サブタイプ）
// =========================================================================

/// 受け付ける画像サブタイプ
///
/// data URL の `data:image/<subtype>;base64,` に現れるサブタイプ。
/// 大文字小文字を区別する（`PNG` は不正）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Jpg,
}

impl ImageFormat {
    /// 添付ファイルに使用する MIME Content-Type を返す
    ///
    /// `jpg` は正式な MIME タイプではないため `image/jpeg` に正規化する。
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg | Self::Jpg => "image/jpeg",
        }
    }
}

// =========================================================================
// GreetingImage（デコード済みグリーティング画像）
// =========================================================================

/// data URL のプレフィックス（固定）
const DATA_URL_PREFIX: &str = "data:image/";

/// base64 セクションの区切り（固定）
const BASE64_MARKER: &str = ";base64,";

/// 寛容な base64 デコードエンジン
///
/// パディングの有無を問わず、末尾の余剰ビットも許容する。
/// 画像の完全性はこのサービスでは再検証しないため、
/// デコードできるものはそのまま受け入れる。
const TOLERANT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// デコード済みグリーティング画像（値オブジェクト）
///
/// `data:image/(png|jpeg|jpg);base64,<data>` 形式の data URL から導出される。
/// `bytes` は `<data>` の base64 デコード結果そのもの。
///
/// # 使用例
///
/// ```
/// use greetflow_domain::greeting::{GreetingImage, ImageFormat};
///
/// let image = GreetingImage::from_data_url("data:image/png;base64,AAAA").unwrap();
/// assert_eq!(image.format, ImageFormat::Png);
/// assert_eq!(image.bytes, vec![0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingImage {
    /// 画像サブタイプ
    pub format: ImageFormat,
    /// base64 デコード結果
    pub bytes:  Vec<u8>,
}

impl GreetingImage {
    /// data URL をパースして画像をデコードする
    ///
    /// # バリデーション
    ///
    /// - 先頭が `data:image/`
    /// - サブタイプが `png` / `jpeg` / `jpg`（大文字小文字を区別）
    /// - `;base64,` 区切りが存在し、データ部が 1 文字以上
    /// - データ部が base64 としてデコード可能（パディング省略は許容）
    ///
    /// # エラー
    ///
    /// 形式を満たさない場合は `DomainError::InvalidImagePayload` を返す。
    pub fn from_data_url(input: &str) -> Result<Self, DomainError> {
        let Some(rest) = input.strip_prefix(DATA_URL_PREFIX) else {
            return Err(DomainError::InvalidImagePayload(
                "data:image/ で始まっていません".to_string(),
            ));
        };

        let Some((subtype, data)) = rest.split_once(BASE64_MARKER) else {
            return Err(DomainError::InvalidImagePayload(
                ";base64, 区切りがありません".to_string(),
            ));
        };

        let format = subtype.parse::<ImageFormat>().map_err(|_| {
            DomainError::InvalidImagePayload(format!("未対応のサブタイプ: {subtype}"))
        })?;

        if data.is_empty() {
            return Err(DomainError::InvalidImagePayload(
                "base64 データ部が空です".to_string(),
            ));
        }

        let bytes = TOLERANT_BASE64.decode(data).map_err(|e| {
            DomainError::InvalidImagePayload(format!("base64 デコードに失敗: {e}"))
        })?;

        Ok(Self { format, bytes })
    }
}

// =========================================================================
// GreetingMail（送信メール）
// =========================================================================

/// メール添付
///
/// グリーティングメールは常にちょうど 1 件の添付を持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    /// 添付ファイル名（固定値が渡される）
    pub filename:     String,
    /// MIME Content-Type（例: `image/png`）
    pub content_type: String,
    /// 添付の生バイト列
    pub bytes:        Vec<u8>,
}

/// 送信メール
///
/// 検証済みの宛先と固定のテンプレートから構成される送信メッセージ。
/// 本文にはユーザー入力を一切含めない（受信者の入力値が本文に現れることはない）。
/// トランスポート実装（インフラ層）に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingMail {
    /// 差出人メールアドレス
    pub from:       String,
    /// 宛先（検証済み Gmail アドレス）
    pub to:         GmailAddress,
    /// 件名
    pub subject:    String,
    /// HTML 本文
    pub html_body:  String,
    /// 添付（ちょうど 1 件）
    pub attachment: MailAttachment,
}

// =========================================================================
// MailerError（トランスポートエラー）
// =========================================================================

/// メール送信エラー
///
/// トランスポート実装が返すエラー。詳細文字列はサーバー側ログ専用で、
/// クライアントにはそのまま返さない。
#[derive(Debug, Error)]
pub enum MailerError {
    /// メール送信に失敗（接続失敗、認証拒否、プロバイダ側の拒否など）
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

// =========================================================================
// テスト
// =========================================================================

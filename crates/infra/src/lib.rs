//! # GreetFlow インフラ層
//!
//! 外部システム（SMTP プロバイダ）との通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはメール送信を [`mailer::MailTransport`] トレイトで抽象化し、
//! その具体実装を提供する。外部システムの詳細をカプセル化し、
//! ドメイン層とユースケースをトランスポートの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! mail-api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。ドメイン層はインフラ層に依存しない
//! （依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`mailer`] - メールトランスポートの抽象化と実装（SMTP / Noop / Mock）

pub mod mailer;

pub use mailer::{MailTransport, NoopMailer, SmtpMailer};

//! # mail-api サーバー
//!
//! グリーティング画像をメール添付で送信する API サーバー。
//!
//! ## 役割
//!
//! フロントエンドで生成されたグリーティング画像（base64 data URL）を受け取り、
//! 検証したうえで Gmail SMTP リレー経由で宛先に送信する:
//!
//! - **入力検証**: 宛先は Gmail アドレス限定、画像は PNG / JPEG の data URL 限定
//! - **同期送信**: リクエストごとに 1 件、キューもリトライも持たない
//! - **エラーの封じ込め**: 送信失敗・設定不備はリクエスト単位の 5xx で終端し、
//!   プロセスは落とさない
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│   mail-api   │────▶│ smtp.gmail.com   │
//! │  (greeting)  │     │  port: 3001  │     │  (SMTP relay)    │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `EMAIL_USER` | No | 送信元 Gmail アカウント（未設定なら送信時に 500） |
//! | `EMAIL_PASS` | No | アプリパスワード（未設定なら送信時に 500） |
//! | `MAILER_BACKEND` | No | `smtp`（デフォルト）または `noop`（開発用） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p greetflow-mail-api
//!
//! # 本番環境（環境変数を直接指定）
//! PORT=3001 EMAIL_USER=... EMAIL_PASS=... cargo run -p greetflow-mail-api --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use config::{MailApiConfig, MailerBackend};
use greetflow_infra::{MailTransport, NoopMailer, SmtpMailer};
use greetflow_shared::observability::LogFormat;
use handler::{health_check, send_greeting};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use usecase::GreetingMailService;

/// リクエストボディの上限（base64 画像を含むため 10 MB）
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// mail-api サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. メールトランスポートの構築
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    greetflow_shared::observability::init_tracing(LogFormat::from_env());
    let _tracing_guard = tracing::info_span!("app", service = "mail-api").entered();

    // 設定読み込み
    let config = MailApiConfig::from_env();

    tracing::info!(
        "mail-api サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // メールトランスポートの構築
    // 資格情報が未設定でも起動は続行し、送信リクエストに 500 を返す
    let mailer: Option<Arc<dyn MailTransport>> = match config.mailer_backend {
        MailerBackend::Noop => {
            tracing::warn!("MAILER_BACKEND=noop のためメールは送信されません");
            Some(Arc::new(NoopMailer))
        }
        MailerBackend::Smtp => match &config.smtp_credentials {
            Some(credentials) => {
                let smtp = SmtpMailer::gmail(&credentials.user, &credentials.pass)?;
                Some(Arc::new(smtp))
            }
            None => {
                tracing::warn!(
                    "EMAIL_USER / EMAIL_PASS が未設定のため、送信リクエストはエラーになります"
                );
                None
            }
        },
    };

    let service = Arc::new(GreetingMailService::new(mailer));

    // ルーター構築
    // CORS はフロントエンドの配信元を限定しない（公開グリーティングフロー）
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/send-greeting-email", post(send_greeting))
        .with_state(service)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("mail-api サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}

//! # lessonhub 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. Supabase 클라이언트 생성 (프로세스당 한 번)
//! 5. 라우터 구성
//! 6. HTTP 서버 시작 (Ctrl+C / SIGTERM 시 정상 종료)

use std::time::Duration;

use anyhow::Result;
use lessonhub::{config::Config, provider::SupabaseClient, AppState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅 초기화 ──
    // RUST_LOG가 없으면 lessonhub, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lessonhub=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // SUPABASE_URL, SUPABASE_ANON_KEY가 없으면 여기서 종료됩니다.
    let config = Config::from_env()?;
    tracing::info!("Starting lessonhub server on {}:{}", config.host, config.port);
    tracing::info!("Using identity/data provider at {}", config.supabase_url);

    // ── 4단계: 공유 상태 생성 ──
    // reqwest::Client는 내부적으로 연결 풀을 Arc로 공유하므로
    // AppState를 clone해도 연결이 복제되지 않습니다.
    // 호출자의 Bearer 토큰은 요청마다 SupabaseClient::scoped()로 붙입니다.
    let provider = SupabaseClient::new(
        &config.supabase_url,
        &config.supabase_anon_key,
        &config.lesson_plans_table,
        Duration::from_secs(config.provider_timeout_secs),
    )?;
    let state = AppState { provider };

    // ── 5단계: 라우터 구성 ──
    let app = lessonhub::app(state);

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ctrl+C 또는 SIGTERM을 기다립니다.
///
/// 신호가 오면 axum이 새 연결 수락을 멈추고 처리 중인 요청을 마무리합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}

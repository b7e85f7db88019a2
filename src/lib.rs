//! # lessonhub 라이브러리
//!
//! 인증 라우터와 교안(lesson plan) 라우터를 하나의 axum 애플리케이션으로 묶습니다.
//! `main.rs`는 설정 로딩과 서버 시작만 담당하고, 라우터 구성은 여기서 합니다.
//! 통합 테스트(`tests/`)도 같은 [`app`] 함수로 라우터를 만들어 사용합니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 기반 설정
//! - `cors`: 모든 응답에 붙는 CORS 헤더와 preflight 처리
//! - `error`: 핸들러 공통 에러 타입과 HTTP 응답 변환
//! - `middleware`: 호출자 인증(AuthUser 추출기)
//! - `models`: 요청 모델과 라우팅 판별 타입
//! - `provider`: 외부 인증/데이터 백엔드(Supabase) 클라이언트
//! - `routes`: HTTP 핸들러

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod models;
pub mod provider;
pub mod routes;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// 전체 라우터를 구성합니다.
///
/// CORS 레이어가 가장 바깥에 있으므로 OPTIONS 요청은 라우터에 도달하기 전에
/// 200 응답으로 끝납니다. 어느 라우트에도 맞지 않는 요청은 `route_not_found`가
/// `{ "error": "route not found: METHOD path" }` 404로 응답합니다.
pub fn app(state: AppState) -> Router {
    Router::new()
        // 인증: `/auth` 아래 모든 경로에서 동작은 x-function-route 헤더로 선택
        .route("/auth", any(routes::auth::handle))
        .route("/auth/", any(routes::auth::handle))
        .route("/auth/{*rest}", any(routes::auth::handle))
        // 교안: 메서드별 분기는 핸들러 내부에서 수행
        .route("/lesson-plans", any(routes::lesson_plans::handle))
        .route("/lesson-plans/", any(routes::lesson_plans::handle))
        .route("/lesson-plans/{id}", any(routes::lesson_plans::handle))
        .route("/health", get(routes::health_check))
        .fallback(routes::route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors::layer())
}

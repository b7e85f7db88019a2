//! # 라우트 핸들러 모듈
//!
//! 각 하위 모듈:
//! - `auth`: 회원가입/로그인 (`x-function-route` 헤더로 선택)
//! - `lesson_plans`: 교안 CRUD (메서드로 선택, 호출자 인증 필수)
//! - `health`: 서버 상태 확인

pub mod auth;
pub mod health;
pub mod lesson_plans;

pub use health::*;

use axum::http::{Method, Uri};

use crate::{error::AppError, provider::SupabaseClient};

/// 애플리케이션 공유 상태
///
/// 요청 간에 공유되는 가변 상태는 없습니다. 클라이언트 설정과 연결 풀만 담고,
/// 호출자별 자격증명은 요청마다 `provider.scoped()`로 붙입니다.
#[derive(Clone)]
pub struct AppState {
    pub provider: SupabaseClient,
}

/// 라우터 폴백: 등록되지 않은 경로는 모두 JSON 404
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

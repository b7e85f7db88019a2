//! # 에러 처리 모듈
//!
//! 핸들러에서 발생하는 모든 에러를 하나의 `AppError`로 모으고,
//! 단일 지점(`IntoResponse`)에서 `{ "error": message }` JSON 응답으로 변환합니다.
//!
//! 상태 코드 규칙:
//! - 라우트 불일치 → 404
//! - 지원하지 않는 메서드 → 405
//! - 그 외 모든 기능적 실패(검증, 인증, 백엔드 거부, 단건 조회 실패) → 400
//!
//! 인증 실패와 검증 실패, not-found가 같은 400으로 합쳐지므로
//! 클라이언트는 메시지 본문으로만 원인을 구분할 수 있습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

/// 핸들러 공통 에러
///
/// Display 메시지가 그대로 응답 본문의 `error` 값이 됩니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 필드 누락 등 요청 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 요청 본문이 올바른 JSON이 아님
    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Bearer 토큰으로 사용자를 확인할 수 없음
    #[error("{0}")]
    Unauthenticated(String),

    /// 회원가입은 성공했지만 사용자 객체가 돌아오지 않음
    #[error("{0}")]
    Registration(String),

    /// 외부 인증/데이터 백엔드가 보고한 실패 (RLS 거부, 0건/다건 조회 포함)
    /// 백엔드 메시지를 변경 없이 노출합니다.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// 라우트/메서드 조합이 없음 (HTTP 404)
    #[error("route not found: {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// 교안 라우터가 처리하지 않는 메서드 (HTTP 405)
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_)
            | AppError::InvalidBody(_)
            | AppError::Unauthenticated(_)
            | AppError::Registration(_)
            | AppError::Provider(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        tracing::warn!(status = status.as_u16(), error = %message, "request failed");

        // 결과: { "error": "..." }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

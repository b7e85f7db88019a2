use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, routes::AppState};

pub const UNAUTHENTICATED: &str = "user is not authenticated";

/// 백엔드가 Bearer 토큰으로 확인해 준 호출자
///
/// 핸들러 인자에 두면 핸들러 본문(및 모든 테이블 호출) 전에 인증이 끝납니다.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    /// 데이터 호출에 그대로 전달할 원본 `Authorization` 헤더
    pub authorization: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Unauthenticated(UNAUTHENTICATED.to_string()))?;

        let user = state
            .provider
            .scoped(Some(authorization))
            .get_user()
            .await?
            .ok_or_else(|| AppError::Unauthenticated(UNAUTHENTICATED.to_string()))?;

        tracing::debug!(user_id = %user.id, email = ?user.email, "caller authenticated");

        Ok(AuthUser {
            user_id: user.id,
            authorization: authorization.to_string(),
        })
    }
}

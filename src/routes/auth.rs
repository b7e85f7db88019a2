//! # 인증 라우트 핸들러
//!
//! `/auth`와 그 아래 모든 경로에서 `x-function-route` 헤더로 동작을 고릅니다.
//! 경로 자체는 동작 선택에 쓰이지 않습니다.
//! - `signup`: 이메일/비밀번호/사용자명/역할로 회원가입
//! - `signin`: 이메일/비밀번호 로그인
//!
//! 그 외 조합은 404 `route not found: METHOD path`.
//! 백엔드 결과(세션 포함)는 가공 없이 200으로 돌려줍니다.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Method, Uri},
    Json,
};
use serde_json::Value;

use crate::{
    cors::FUNCTION_ROUTE_HEADER,
    error::AppError,
    models::auth::{AuthRoute, SignInRequest, SignUpRequest},
    provider::{AuthPayload, ScopedClient},
    routes::AppState,
};

const NO_USER_CREATED: &str = "registration failed: no user was created";

pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AuthPayload>, AppError> {
    let route = headers
        .get(FUNCTION_ROUTE_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(route) = AuthRoute::resolve(route, method.as_str()) else {
        return Err(AppError::RouteNotFound {
            method: method.to_string(),
            path: uri.path().to_string(),
        });
    };

    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let client = state.provider.scoped(authorization);

    let payload = match route {
        AuthRoute::SignUp => sign_up(&client, &body).await?,
        AuthRoute::SignIn => sign_in(&client, &body).await?,
    };

    Ok(Json(payload))
}

async fn sign_up(client: &ScopedClient<'_>, body: &[u8]) -> Result<AuthPayload, AppError> {
    let request = SignUpRequest::from_json(&parse_body(body, "signup")?);
    tracing::debug!(?request, "signup request received");

    let missing = request.missing_fields();
    let signup = request.validate().inspect_err(
        |e| tracing::warn!(error = %e, ?missing, "signup validation failed"),
    )?;

    let payload = client
        .sign_up(&signup)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "provider signup failed"))?;

    // Registration can succeed at the provider yet hand back no user
    if payload.user.is_none() {
        return Err(AppError::Registration(NO_USER_CREATED.to_string()));
    }

    tracing::info!(email = %signup.email, role = %signup.role, "user registered");
    Ok(payload)
}

async fn sign_in(client: &ScopedClient<'_>, body: &[u8]) -> Result<AuthPayload, AppError> {
    let request = SignInRequest::from_json(&parse_body(body, "signin")?);
    tracing::debug!(?request, "signin request received");

    let missing = request.missing_fields();
    let signin = request.validate().inspect_err(
        |e| tracing::warn!(error = %e, ?missing, "signin validation failed"),
    )?;

    let payload = client
        .sign_in_with_password(&signin)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "provider signin failed"))?;

    Ok(payload)
}

/// A malformed body is logged by size only, never verbatim.
fn parse_body(body: &[u8], route: &'static str) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(route, bytes = body.len(), error = %e, "request body is not valid JSON");
        AppError::InvalidBody(e)
    })
}

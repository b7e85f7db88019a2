//! # 교안(Lesson Plan) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /lesson-plans`     → 목록 (생성일 내림차순)
//! - `GET    /lesson-plans/:id` → 단건 (정확히 1건이 아니면 에러)
//! - `POST   /lesson-plans`     → 생성, `user_id`는 호출자로 고정 (201)
//! - `PUT    /lesson-plans/:id` → 수정
//! - `DELETE /lesson-plans/:id` → 삭제, `{ "message": ... }`
//! - 그 외 메서드 → 405
//!
//! 모든 요청은 `AuthUser` 추출기로 먼저 인증됩니다. 어떤 레코드가 보이고
//! 수정/삭제 가능한지는 백엔드의 RLS 정책이 결정합니다.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    models::lesson_plan::{stamp_owner, LessonPlanOp, Target},
    routes::AppState,
};

const DELETED: &str = "lesson plan deleted";

pub async fn handle(
    State(state): State<AppState>,
    user: AuthUser,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, AppError> {
    let target = Target::from_path(uri.path());
    let op = LessonPlanOp::from_request(method.as_str(), target, &body)?;

    // 호출자의 토큰을 그대로 실어 RLS가 호출자 기준으로 적용되게 합니다.
    let client = state.provider.scoped(Some(&user.authorization));

    let response = match op {
        LessonPlanOp::List => Json(client.list().await?).into_response(),
        LessonPlanOp::Get(id) => Json(client.get(&id).await?).into_response(),
        LessonPlanOp::Create(record) => {
            let record = stamp_owner(record, &user.user_id);
            let created = client.insert(&record).await?;
            (StatusCode::CREATED, Json(created)).into_response()
        }
        LessonPlanOp::Update(id, changes) => {
            Json(client.update(&id, &changes).await?).into_response()
        }
        LessonPlanOp::Delete(id) => {
            client.delete(&id).await?;
            Json(json!({ "message": DELETED })).into_response()
        }
    };

    Ok(response)
}

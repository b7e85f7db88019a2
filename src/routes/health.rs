//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /health` → `{ "status": "ok" }`
//!
//! 백엔드를 호출하지 않으므로 프로세스가 살아 있는지만 확인합니다.

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

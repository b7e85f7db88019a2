//! # 교안(Lesson Plan) 요청 판별
//!
//! 교안 레코드 자체는 백엔드 테이블이 소유하며, 이 서비스는 스키마를 강제하지 않고
//! JSON 객체를 그대로 전달합니다. 관례적인 컬럼은 `id`, `user_id`, `title`, `grade`,
//! `module`, `knowledge_point`, `duration`, `objectives`, `key_points`,
//! `difficult_points`, `resources`, `teaching_process`, `evaluation`, `extension`,
//! `created_at`, `updated_at`입니다.
//!
//! 여기서는 (HTTP 메서드, 경로)를 [`LessonPlanOp`] 하나로 바꾸는 일만 합니다.

use serde_json::{Map, Value};

use crate::error::AppError;

/// 컬렉션 경로의 마지막 세그먼트
pub const COLLECTION: &str = "lesson-plans";

/// 소유자 필드. 생성 시 호출자 ID로 덮어씁니다.
pub const OWNER_FIELD: &str = "user_id";

pub const ID_REQUIRED: &str = "a lesson plan id is required";
pub const OBJECT_REQUIRED: &str = "lesson plan body must be a JSON object";

/// 요청 대상: 컬렉션 전체 또는 단일 레코드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Collection,
    Record(String),
}

impl Target {
    /// 마지막 경로 세그먼트가 `lesson-plans`이면 컬렉션, 아니면 레코드 ID입니다.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('/').next().unwrap_or_default() {
            COLLECTION => Target::Collection,
            id => Target::Record(id.to_string()),
        }
    }
}

/// 교안 라우터가 수행하는 다섯 가지 작업
#[derive(Debug, Clone, PartialEq)]
pub enum LessonPlanOp {
    List,
    Get(String),
    Create(Map<String, Value>),
    Update(String, Map<String, Value>),
    Delete(String),
}

impl LessonPlanOp {
    /// 메서드와 대상으로 작업을 고릅니다. 본문은 Create/Update에서만 파싱합니다.
    ///
    /// POST는 경로의 ID를 무시하고 항상 새 레코드를 만듭니다.
    /// `/lesson-plans/`처럼 ID 자리가 비어 있으면 ID 누락으로 봅니다.
    pub fn from_request(method: &str, target: Target, body: &[u8]) -> Result<Self, AppError> {
        let op = match (method, target) {
            ("POST", _) => LessonPlanOp::Create(parse_object(body)?),
            ("GET" | "PUT" | "DELETE", Target::Record(id)) if id.is_empty() => {
                return Err(AppError::Validation(ID_REQUIRED.to_string()))
            }
            ("GET", Target::Collection) => LessonPlanOp::List,
            ("GET", Target::Record(id)) => LessonPlanOp::Get(id),
            ("PUT", Target::Record(id)) => LessonPlanOp::Update(id, parse_object(body)?),
            ("DELETE", Target::Record(id)) => LessonPlanOp::Delete(id),
            ("PUT" | "DELETE", Target::Collection) => {
                return Err(AppError::Validation(ID_REQUIRED.to_string()))
            }
            (other, _) => return Err(AppError::UnsupportedMethod(other.to_string())),
        };

        Ok(op)
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation(OBJECT_REQUIRED.to_string())),
    }
}

/// 본문에 어떤 `user_id`가 있든 호출자 ID로 덮어씁니다.
pub fn stamp_owner(mut record: Map<String, Value>, user_id: &str) -> Map<String, Value> {
    record.insert(OWNER_FIELD.to_string(), Value::String(user_id.to_string()));
    record
}

//! # 요청 모델 모듈
//!
//! - `auth`: 회원가입/로그인 요청과 라우트 판별
//! - `lesson_plan`: 교안 요청의 대상(Target)과 작업(LessonPlanOp) 판별

pub mod auth;
pub mod lesson_plan;

pub use auth::*;
pub use lesson_plan::*;

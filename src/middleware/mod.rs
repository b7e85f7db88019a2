//! 요청 전처리
//!
//! - `auth`: Bearer 토큰으로 호출자를 확인하는 `AuthUser` 추출기

pub mod auth;

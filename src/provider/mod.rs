//! # 외부 인증/데이터 백엔드 클라이언트
//!
//! 자격증명 저장, 세션 발급, 행 수준 보안(RLS)은 모두 백엔드(Supabase)가 담당합니다.
//! 이 모듈은 두 REST 표면을 감싸기만 합니다:
//! - `auth`: `/auth/v1` 회원가입, 비밀번호 로그인, 현재 사용자 조회
//! - `table`: `/rest/v1/<table>` 조회/삽입/수정/삭제
//!
//! [`SupabaseClient`]는 프로세스당 하나이고, 요청마다 [`SupabaseClient::scoped`]로
//! 호출자의 Bearer 토큰을 실은 [`ScopedClient`]를 만들어 씁니다.

pub mod auth;
pub mod client;
pub mod error;
pub mod table;

pub use auth::{AuthPayload, User};
pub use client::{ScopedClient, SupabaseClient};
pub use error::{ProviderError, ProviderResult};

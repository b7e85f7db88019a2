//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `SUPABASE_URL`: 인증/데이터 백엔드의 기본 URL (필수)
//! - `SUPABASE_ANON_KEY`: 백엔드 공개 API 키 (필수)
//! - `LESSON_PLANS_TABLE`: 교안 테이블 이름 (기본값: `lesson_plans`)
//! - `PROVIDER_TIMEOUT_SECS`: 백엔드 호출 타임아웃 초 (기본값: 30)
//! - `HOST`: 서버 바인딩 주소 (기본값: `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값: 3000)

use std::env;

use thiserror::Error;

const DEFAULT_TABLE: &str = "lesson_plans";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 설정 로딩 실패
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 필수 환경변수가 없거나 비어 있음
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 한 번 읽어온 후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 백엔드 기본 URL (끝의 `/`는 제거됨)
    pub supabase_url: String,
    /// 모든 백엔드 호출에 `apikey` 헤더로 실리는 공개 키
    pub supabase_anon_key: String,
    /// 교안 레코드가 저장되는 테이블 이름
    pub lesson_plans_table: String,
    pub provider_timeout_secs: u64,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// # 에러
    /// `SUPABASE_URL`과 `SUPABASE_ANON_KEY`는 필수이며, 없으면 [`ConfigError::Missing`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 만듭니다. `from_env`와 테스트가 공유합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 빈 문자열은 설정되지 않은 것으로 취급
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            supabase_url: require("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            supabase_anon_key: require("SUPABASE_ANON_KEY")?,
            lesson_plans_table: get("LESSON_PLANS_TABLE")
                .unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            provider_timeout_secs: get("PROVIDER_TIMEOUT_SECS")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            // 파싱 실패 시 기본값 사용
            port: get("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

//! CORS 설정
//!
//! 프로세스 시작 시 한 번 만들어 라우터 가장 바깥에 붙입니다.
//! - 모든 응답: `Access-Control-Allow-Origin: *`
//! - OPTIONS(preflight): 라우터를 거치지 않고 200, 빈 본문, 허용 헤더/메서드 목록

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName, Method,
};
use tower_http::cors::{Any, CorsLayer};

/// 인증 라우터에서 signup/signin을 고르는 헤더
pub const FUNCTION_ROUTE_HEADER: HeaderName = HeaderName::from_static("x-function-route");

const CLIENT_INFO_HEADER: HeaderName = HeaderName::from_static("x-client-info");
const APIKEY_HEADER: HeaderName = HeaderName::from_static("apikey");

pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            AUTHORIZATION,
            CLIENT_INFO_HEADER,
            APIKEY_HEADER,
            CONTENT_TYPE,
            FUNCTION_ROUTE_HEADER,
        ])
}

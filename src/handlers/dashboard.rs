//! # Internal Dashboard HTTP Handlers
//!
//! 내부(상담원/매니저/관리자) 영역의 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 대시보드 스코프는 역할 제한이 있는 일반 가드로 보호됩니다.

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::core::AppError;
use crate::domain::access::Viewer;
use crate::services::access::resolver;

/// 내부 대시보드 홈
#[get("")]
pub async fn dashboard_home(viewer: Viewer) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "area": "dashboard",
        "viewer": viewer.user_id,
        "role": viewer.role.as_str()
    }))
}

/// 사용자 관리 목록 조회
///
/// `/admin` 스코프 가드가 `admin` 역할을 보장하지만, 사용자 관리 동작은
/// 권한 집합의 `users.manage`도 요구합니다. 게이트 바깥의 핸들러 수준
/// 검사이므로 리다이렉트가 아닌 403으로 응답됩니다.
#[get("/users")]
pub async fn manage_users(viewer: Viewer) -> Result<HttpResponse, AppError> {
    if !resolver::can_perform_action(Some(&viewer), "users", "manage") {
        return Err(AppError::AuthorizationError(
            "users.manage 권한이 필요합니다".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "viewer": viewer.user_id,
        "users": []
    })))
}

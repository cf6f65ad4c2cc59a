//! # Portal HTTP Handlers
//!
//! 포털(최종 사용자) 영역의 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 포털 스코프는 [`crate::middlewares::RouteGuard::portal`]로 보호되므로,
//! 이 핸들러들은 `user` 역할 뷰어에 대해서만 호출됩니다.
//!
//! 실제 티켓/기술 자료 데이터는 encompassing 애플리케이션이 소유합니다.
//! 이 서비스의 핸들러들은 게이트 통과 결과를 확인할 수 있는 최소 응답만 반환합니다.

use actix_web::{get, post, HttpResponse};
use serde_json::json;

use crate::domain::access::Viewer;

/// 포털 홈
#[get("")]
pub async fn portal_home(viewer: Viewer) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "area": "portal",
        "viewer": viewer.user_id,
        "role": viewer.role.as_str()
    }))
}

/// 내 티켓 목록 조회
#[get("/tickets")]
pub async fn my_tickets(viewer: Viewer) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "viewer": viewer.user_id,
        "tickets": []
    }))
}

/// 기술 자료 문서 게시
///
/// `/portal/kb` 스코프는 `knowledge.publish` 권한을 추가로 요구하므로,
/// 여기 도달한 뷰어는 해당 권한을 보유한 상태입니다.
#[post("/publish")]
pub async fn publish_article(viewer: Viewer) -> HttpResponse {
    HttpResponse::Created().json(json!({
        "status": "published",
        "author": viewer.user_id
    }))
}

//! API 라우트 설정 모듈
//!
//! 접근 게이트로 보호되는 라우트 스코프들을 등록합니다.
//! 애플리케이션의 전체 화면 라우트는 encompassing 셸이 소유하며,
//! 여기에는 게이트 배선을 확인할 수 있는 대표 스코프만 포함됩니다.
//!
//! # Guard Usage
//!
//! 라우트에 따라 다른 게이트 변형을 적용할 수 있습니다:
//!
//! ## 포털 전용 라우트 (user 역할만)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/portal")
//!         .wrap(RouteGuard::portal())
//!         .service(handlers::portal::portal_home)
//! );
//! ```
//!
//! ## 역할 제한이 있는 내부 라우트
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/dashboard")
//!         .wrap(RouteGuard::with_roles(vec![Role::Agent, Role::Manager, Role::Admin]))
//!         .service(handlers::dashboard::dashboard_home)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::web;
use chrono;
use serde_json::json;

use crate::domain::access::Role;
use crate::handlers;
use crate::middlewares::RouteGuard;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // 로그인 플레이스홀더 (리다이렉트 대상 확인용)
    cfg.service(login_placeholder);

    // Feature-specific routes
    configure_portal_routes(cfg);
    configure_internal_routes(cfg);
}

/// 포털 영역 라우트를 설정합니다
///
/// 포털 게이트가 적용되어 `user` 역할 뷰어만 통과합니다.
/// 기술 자료 게시 스코프는 `knowledge.publish` 권한을 추가로 요구합니다.
///
/// # Route Groups
///
/// - `GET /portal` - 포털 홈
/// - `GET /portal/tickets` - 내 티켓 목록
/// - `POST /portal/kb/publish` - 기술 자료 게시 (`knowledge.publish` 권한)
fn configure_portal_routes(cfg: &mut web::ServiceConfig) {
    // 권한이 추가로 요구되는 스코프를 먼저 등록
    cfg.service(
        web::scope("/portal/kb")
            .wrap(RouteGuard::portal().require_permission("knowledge.publish"))
            .service(handlers::portal::publish_article),
    );

    cfg.service(
        web::scope("/portal")
            .wrap(RouteGuard::portal())
            .service(handlers::portal::portal_home)
            .service(handlers::portal::my_tickets),
    );
}

/// 내부 영역 라우트를 설정합니다
///
/// 내부 대시보드는 상담원 이상 역할, 관리 스코프는 `admin` 역할을 요구합니다.
///
/// # Route Groups
///
/// - `GET /dashboard` - 내부 대시보드 홈 (agent/manager/admin)
/// - `GET /admin/users` - 사용자 관리 (admin)
fn configure_internal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .wrap(RouteGuard::with_roles(vec![
                Role::Agent,
                Role::Manager,
                Role::Admin,
            ]))
            .service(handlers::dashboard::dashboard_home),
    );

    cfg.service(
        web::scope("/admin")
            .wrap(RouteGuard::with_roles(vec![Role::Admin]))
            .service(handlers::dashboard::manage_users),
    );
}

/// 로그인 플레이스홀더 엔드포인트
///
/// 실제 로그인 화면은 encompassing 셸이 제공합니다.
/// 개발 하니스에서 게이트의 리다이렉트가 도달 가능한 경로가 되도록
/// 최소 응답만 반환합니다.
#[actix_web::get("/auth/login")]
async fn login_placeholder() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "login_required",
        "message": "로그인이 필요합니다"
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "itsm_access_gate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "guards": ["generic", "portal"],
            "identity": "external identity source contract"
        }
    }))
}

//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행하며,
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 신원 컨텍스트 미들웨어 (IdentityContext)
//! - 셸이 주입한 Identity Source에서 매 요청 스냅샷 획득
//! - 스냅샷을 request extension에 저장
//! - 게이트가 전역 상태 대신 소비하는 명시적 입력 지점
//!
//! ### 2. 라우트 가드 미들웨어 (RouteGuard)
//! - 스냅샷과 요구 조건으로 게이트 판정 수행
//! - 허용 시 뷰어를 request extension에 저장
//! - 일반/포털 게이트 변형 지원
//!
//! # 사용 방법
//!
//! ## 앱 수준에서 신원 컨텍스트 등록, 스코프에 가드 적용
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use itsm_access_gate::middlewares::{IdentityContext, RouteGuard};
//! use itsm_access_gate::domain::access::Role;
//!
//! App::new()
//!     .wrap(IdentityContext::new(Arc::new(shell_identity_source)))
//!     .service(
//!         web::scope("/portal")
//!             .wrap(RouteGuard::portal()) // user 역할만 통과
//!             .route("", web::get().to(portal_home))
//!     )
//!     .service(
//!         web::scope("/admin")
//!             .wrap(RouteGuard::with_roles(vec![Role::Admin]))
//!             .route("/users", web::get().to(manage_users))
//!     )
//! ```

pub mod route_guard;
mod guard_inner;
pub mod identity_context;

// 미들웨어 재export
pub use identity_context::IdentityContext;
pub use route_guard::{GateKind, RouteGuard};

//! 라우트 가드 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 보호된 스코프에 대한 접근 판정을 수행합니다.
//! 판정 결과에 따라 내부 서비스 호출, 리다이렉트 응답, 로딩 플레이스홀더
//! 중 정확히 하나를 산출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::gate_config::{DASHBOARD_PATH, DEFAULT_LOGIN_PATH, PORTAL_ROOT_PATH, RedirectConfig};
use crate::domain::access::decision::DeniedBy;
use crate::domain::access::requirement::CapabilityRequirement;
use crate::domain::access::role::Role;
use crate::middlewares::guard_inner::RouteGuardService;

/// 게이트 변형
///
/// 일반 게이트는 모든 비허용 판정을 설정된 단일 경로로 돌려보내고,
/// 포털 게이트는 판정 원인에 따라 고정 상수 경로를 구분하여 사용합니다.
#[derive(Debug, Clone)]
pub enum GateKind {
    /// 일반 보호 라우트용 게이트
    Generic {
        /// 미인증/거부 시 리다이렉트 경로
        redirect_path: String,
    },
    /// 포털(최종 사용자) 전용 게이트
    Portal,
}

impl GateKind {
    /// 미인증 뷰어의 리다이렉트 경로
    pub(crate) fn unauthenticated_path(&self) -> String {
        match self {
            GateKind::Generic { redirect_path } => redirect_path.clone(),
            GateKind::Portal => DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// 인증되었으나 거부된 뷰어의 리다이렉트 경로
    ///
    /// 포털 게이트는 역할 불일치면 내부 대시보드로,
    /// 권한 부족이면 포털 루트로 돌려보냅니다.
    pub(crate) fn forbidden_path(&self, denied: DeniedBy) -> String {
        match self {
            GateKind::Generic { redirect_path } => redirect_path.clone(),
            GateKind::Portal => match denied {
                DeniedBy::Role => DASHBOARD_PATH.to_string(),
                DeniedBy::Permission => PORTAL_ROOT_PATH.to_string(),
            },
        }
    }
}

/// 라우트 가드 미들웨어
pub struct RouteGuard {
    /// 이 스코프에 부착된 요구 조건
    requirement: CapabilityRequirement,
    /// 게이트 변형 (일반/포털)
    kind: GateKind,
}

impl RouteGuard {
    /// 인증만 요구하는 일반 게이트 생성
    pub fn protected() -> Self {
        Self {
            requirement: CapabilityRequirement::none(),
            kind: GateKind::Generic {
                redirect_path: RedirectConfig::login_path(),
            },
        }
    }

    /// 역할 제한이 있는 일반 게이트 생성 (OR 조건)
    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            requirement: CapabilityRequirement::any_of_roles(roles),
            kind: GateKind::Generic {
                redirect_path: RedirectConfig::login_path(),
            },
        }
    }

    /// 단일 권한을 요구하는 일반 게이트 생성
    pub fn with_permission(name: &str) -> Self {
        Self {
            requirement: CapabilityRequirement::permission(name),
            kind: GateKind::Generic {
                redirect_path: RedirectConfig::login_path(),
            },
        }
    }

    /// 포털 전용 게이트 생성
    ///
    /// `user` 역할만 통과시키며, 역할이 다른 인증된 뷰어는
    /// 로그인이 아닌 내부 대시보드로 돌려보냅니다.
    pub fn portal() -> Self {
        Self {
            requirement: CapabilityRequirement::any_of_roles(vec![Role::User]),
            kind: GateKind::Portal,
        }
    }

    /// 권한 요구를 추가합니다 (빌더 스타일)
    pub fn require_permission(mut self, name: &str) -> Self {
        self.requirement = self.requirement.require_permission(name);
        self
    }

    /// 일반 게이트의 리다이렉트 경로를 재정의합니다
    ///
    /// 포털 게이트는 고정 상수 경로를 사용하므로 영향을 받지 않습니다.
    pub fn redirect_to(mut self, path: &str) -> Self {
        if let GateKind::Generic { ref mut redirect_path } = self.kind {
            *redirect_path = path.to_string();
        }
        self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RouteGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardService {
            service: Rc::new(service),
            requirement: self.requirement.clone(),
            kind: self.kind.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_guard_defaults_to_login_redirect() {
        let guard = RouteGuard::protected();

        assert!(guard.requirement.roles.is_empty());
        assert!(guard.requirement.permissions.is_empty());
        assert_eq!(guard.kind.unauthenticated_path(), DEFAULT_LOGIN_PATH);
    }

    #[test]
    fn test_generic_guard_uses_single_fallback_path() {
        let guard = RouteGuard::with_roles(vec![Role::Admin]).redirect_to("/denied");

        assert_eq!(guard.kind.unauthenticated_path(), "/denied");
        assert_eq!(guard.kind.forbidden_path(DeniedBy::Role), "/denied");
        assert_eq!(guard.kind.forbidden_path(DeniedBy::Permission), "/denied");
    }

    #[test]
    fn test_portal_guard_requires_user_role() {
        let guard = RouteGuard::portal();

        assert_eq!(guard.requirement.roles, vec![Role::User]);
    }

    #[test]
    fn test_portal_guard_fallback_paths_are_fixed_constants() {
        let guard = RouteGuard::portal().redirect_to("/ignored");

        assert_eq!(guard.kind.unauthenticated_path(), DEFAULT_LOGIN_PATH);
        assert_eq!(guard.kind.forbidden_path(DeniedBy::Role), DASHBOARD_PATH);
        assert_eq!(guard.kind.forbidden_path(DeniedBy::Permission), PORTAL_ROOT_PATH);
    }

    #[test]
    fn test_require_permission_accumulates() {
        let guard = RouteGuard::portal()
            .require_permission("knowledge.publish")
            .require_permission("knowledge.review");

        assert_eq!(
            guard.requirement.permissions,
            vec!["knowledge.publish".to_string(), "knowledge.review".to_string()]
        );
    }
}

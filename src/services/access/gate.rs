//! # Route Gate
//!
//! 보호된 뷰를 렌더링하기 전에 호출되는 판정 상태 기계입니다.
//! 신원 스냅샷과 요구 조건을 입력으로 받아 네 가지 판정 중 하나를
//! 산출하며, 게이트 자체는 가변 상태를 일절 보유하지 않습니다.
//!
//! ## Spring Security와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `FilterSecurityInterceptor` | `RouteGuard` 미들웨어 |
//! | `AccessDecisionManager.decide()` | `evaluate()` |
//! | `@PreAuthorize("hasAnyRole(...)")` | `CapabilityRequirement::roles` |
//! | `@PreAuthorize("hasAuthority(...)")` | `CapabilityRequirement::permissions` |
//! | `AccessDeniedException` | `Decision::Forbidden` (예외가 아닌 값) |
//!
//! Spring과 달리 판정은 예외를 던지지 않습니다. 네 가지 결과 모두
//! [`Decision`] 값으로 반환되며, 호출자가 렌더링 경로를 선택합니다.

use crate::domain::access::decision::{Decision, DeniedBy};
use crate::domain::access::requirement::CapabilityRequirement;
use crate::domain::identity::snapshot::IdentitySnapshot;
use crate::services::access::resolver;

/// 신원 스냅샷을 요구 조건에 대해 평가합니다.
///
/// 전이는 매 평가마다 엄격한 순서로 진행됩니다:
///
/// 1. Identity Source가 로딩 중이면 `Pending`. 다른 모든 조건보다
///    우선하며, 요구 조건을 만족하는 뷰어가 실려 있어도 `Pending`입니다.
/// 2. 뷰어가 없으면 `Unauthenticated`.
/// 3. 역할 제한을 만족하지 못하면 `Forbidden(Role)`.
/// 4. 요구 권한 중 하나라도 없으면 `Forbidden(Permission)`.
/// 5. 그 외에는 `Allow`.
///
/// 알 수 없는 권한 이름을 참조하는 요구 조건은 영원히 일치하지 않아
/// `Forbidden`이 됩니다. 이는 조용한 거부이며 에러로 표면화되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use itsm_access_gate::services::access::gate;
///
/// let decision = gate::evaluate(&snapshot, &requirement);
/// match decision {
///     Decision::Allow => { /* 보호된 내용 렌더링 */ }
///     Decision::Pending => { /* 로딩 플레이스홀더 */ }
///     _ => { /* 리다이렉트 */ }
/// }
/// ```
pub fn evaluate(snapshot: &IdentitySnapshot, requirement: &CapabilityRequirement) -> Decision {
    if snapshot.loading {
        return Decision::Pending;
    }

    let viewer = match snapshot.viewer.as_ref() {
        Some(viewer) => viewer,
        None => return Decision::Unauthenticated,
    };

    if !resolver::has_role_among(Some(viewer), &requirement.roles) {
        return Decision::Forbidden(DeniedBy::Role);
    }

    for name in &requirement.permissions {
        if !resolver::has_permission(Some(viewer), name) {
            return Decision::Forbidden(DeniedBy::Permission);
        }
    }

    Decision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{Role, Viewer};

    fn portal_requirement() -> CapabilityRequirement {
        CapabilityRequirement::any_of_roles(vec![Role::User])
    }

    #[test]
    fn test_loading_takes_precedence_over_everything() {
        // 요구 조건을 만족하는 뷰어가 실려 있어도 로딩 중이면 Pending
        let viewer = Viewer::with_permissions("u1", Role::User, ["knowledge.publish"]);
        let snapshot = IdentitySnapshot {
            viewer: Some(viewer),
            loading: true,
        };
        let requirement = portal_requirement().require_permission("knowledge.publish");

        assert_eq!(evaluate(&snapshot, &requirement), Decision::Pending);
        assert_eq!(
            evaluate(&IdentitySnapshot::loading(), &CapabilityRequirement::none()),
            Decision::Pending
        );
    }

    #[test]
    fn test_absent_viewer_is_unauthenticated() {
        let snapshot = IdentitySnapshot::anonymous();

        assert_eq!(
            evaluate(&snapshot, &CapabilityRequirement::none()),
            Decision::Unauthenticated
        );
        assert_eq!(
            evaluate(&snapshot, &portal_requirement()),
            Decision::Unauthenticated
        );
    }

    #[test]
    fn test_empty_requirement_allows_any_authenticated_viewer() {
        let snapshot = IdentitySnapshot::authenticated(Viewer::new("u1", Role::Agent));

        assert_eq!(
            evaluate(&snapshot, &CapabilityRequirement::none()),
            Decision::Allow
        );
    }

    #[test]
    fn test_role_mismatch_is_forbidden_by_role() {
        let snapshot = IdentitySnapshot::authenticated(Viewer::new("a1", Role::Agent));

        assert_eq!(
            evaluate(&snapshot, &portal_requirement()),
            Decision::Forbidden(DeniedBy::Role)
        );
    }

    #[test]
    fn test_missing_permission_is_forbidden_by_permission() {
        let snapshot = IdentitySnapshot::authenticated(Viewer::new("u1", Role::User));
        let requirement = portal_requirement().require_permission("knowledge.publish");

        assert_eq!(
            evaluate(&snapshot, &requirement),
            Decision::Forbidden(DeniedBy::Permission)
        );
    }

    #[test]
    fn test_satisfied_requirement_is_allow() {
        let viewer = Viewer::with_permissions("u1", Role::User, ["knowledge.publish"]);
        let snapshot = IdentitySnapshot::authenticated(viewer);
        let requirement = portal_requirement().require_permission("knowledge.publish");

        assert_eq!(evaluate(&snapshot, &requirement), Decision::Allow);
    }

    #[test]
    fn test_role_check_runs_before_permission_check() {
        // 역할과 권한이 모두 어긋나면 역할 불일치가 먼저 보고된다
        let agent = Viewer::new("a1", Role::Agent);
        let snapshot = IdentitySnapshot::authenticated(agent);
        let requirement = portal_requirement().require_permission("knowledge.publish");

        assert_eq!(
            evaluate(&snapshot, &requirement),
            Decision::Forbidden(DeniedBy::Role)
        );
    }

    #[test]
    fn test_unknown_permission_name_silently_denies() {
        let viewer = Viewer::with_permissions("u1", Role::User, ["knowledge.publish"]);
        let snapshot = IdentitySnapshot::authenticated(viewer);
        let requirement = CapabilityRequirement::permission("knowlege.publish");

        assert_eq!(
            evaluate(&snapshot, &requirement),
            Decision::Forbidden(DeniedBy::Permission)
        );
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        // 같은 스냅샷과 요구 조건이면 몇 번을 평가해도 같은 판정
        let viewer = Viewer::with_permissions("u1", Role::User, ["tickets.create"]);
        let snapshot = IdentitySnapshot::authenticated(viewer);
        let requirement = portal_requirement().require_permission("tickets.create");

        let first = evaluate(&snapshot, &requirement);
        let second = evaluate(&snapshot, &requirement);

        assert_eq!(first, Decision::Allow);
        assert_eq!(first, second);
    }
}

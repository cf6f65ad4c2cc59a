//! # Role/Permission Resolver
//!
//! 뷰어가 요구 조건을 만족하는지 평가하는 순수 함수들입니다.
//! 부수 효과가 없으며, 같은 입력에 대해 항상 같은 결과를 반환합니다.
//!
//! ## 빈 역할 집합 정책
//!
//! 빈 `allowed` 역할 목록은 "역할 제한 없음"을 의미하며 전체 허용으로
//! 평가됩니다. 호출자들이 "인증된 모든 사용자"를 빈 목록으로 표현하므로
//! 이 정책은 그대로 유지되어야 합니다. "전체 거부"가 아닙니다.

use crate::domain::access::role::Role;
use crate::domain::access::viewer::Viewer;

/// 뷰어의 역할이 허용 목록에 포함되는지 확인
///
/// # Returns
///
/// * `allowed`가 비어 있으면 뷰어와 무관하게 `true` (역할 제한 없음)
/// * 뷰어가 존재하고 역할이 목록에 있으면 `true`
/// * 뷰어가 없고 `allowed`가 비어 있지 않으면 `false`
pub fn has_role_among(viewer: Option<&Viewer>, allowed: &[Role]) -> bool {
    if allowed.is_empty() {
        return true;
    }

    match viewer {
        Some(viewer) => viewer.has_any_role(allowed),
        None => false,
    }
}

/// 뷰어가 특정 권한을 보유하고 있는지 확인
///
/// 뷰어가 없으면 항상 `false`입니다. 권한 집합은 Identity Source가
/// 이미 해석한 결과이므로 여기서는 멤버십 검사만 수행합니다.
pub fn has_permission(viewer: Option<&Viewer>, name: &str) -> bool {
    viewer.map(|v| v.has_permission(name)).unwrap_or(false)
}

/// 리소스와 동작으로 권한 이름을 조합
///
/// 조합 규칙은 명시적 권한 이름과 같은 `"resource.action"` 형식입니다.
pub fn compose_permission(resource: &str, action: &str) -> String {
    format!("{resource}.{action}")
}

/// 뷰어가 리소스에 특정 동작을 수행할 수 있는지 확인
///
/// 권한 이름을 조합하여 [`has_permission`]에 위임합니다.
/// 뷰어 부재와 권한 부재는 모두 `false`로 평가되며 구분되지 않습니다.
/// 게이트는 "진행 가능 여부"만 필요하고, 미인증은 상위에서 이미
/// 별도의 리다이렉트 경로로 분리되어 있기 때문입니다.
pub fn can_perform_action(viewer: Option<&Viewer>, resource: &str, action: &str) -> bool {
    has_permission(viewer, &compose_permission(resource, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_with(permissions: &[&str]) -> Viewer {
        Viewer::with_permissions("a1", Role::Agent, permissions.iter().copied())
    }

    #[test]
    fn test_empty_allowed_roles_is_vacuous_allow() {
        // 뷰어 유무와 무관하게 빈 목록은 항상 허용
        assert!(has_role_among(None, &[]));
        assert!(has_role_among(Some(&Viewer::new("u1", Role::User)), &[]));
        assert!(has_role_among(Some(&Viewer::new("u2", Role::Admin)), &[]));
    }

    #[test]
    fn test_null_viewer_with_nonempty_roles_is_denied() {
        assert!(!has_role_among(None, &[Role::User]));
        assert!(!has_role_among(None, &[Role::Agent, Role::Admin]));
    }

    #[test]
    fn test_role_membership() {
        let agent = Viewer::new("a1", Role::Agent);

        assert!(has_role_among(Some(&agent), &[Role::Agent, Role::Manager]));
        assert!(!has_role_among(Some(&agent), &[Role::Admin]));
    }

    #[test]
    fn test_has_permission_null_viewer_always_false() {
        assert!(!has_permission(None, "tickets.create"));
        assert!(!has_permission(None, ""));
    }

    #[test]
    fn test_has_permission_membership() {
        let agent = agent_with(&["tickets.assign"]);

        assert!(has_permission(Some(&agent), "tickets.assign"));
        assert!(!has_permission(Some(&agent), "tickets.close"));
    }

    #[test]
    fn test_compose_permission() {
        assert_eq!(compose_permission("knowledge", "publish"), "knowledge.publish");
        assert_eq!(compose_permission("users", "manage"), "users.manage");
    }

    #[test]
    fn test_can_perform_action() {
        let agent = agent_with(&["tickets.assign"]);

        assert!(can_perform_action(Some(&agent), "tickets", "assign"));
        assert!(!can_perform_action(Some(&agent), "tickets", "close"));
    }

    #[test]
    fn test_can_perform_action_conflates_absence_and_denial() {
        // 뷰어 부재와 권한 부재는 모두 false (의도된 동작)
        let agent = agent_with(&[]);

        assert!(!can_perform_action(None, "tickets", "assign"));
        assert!(!can_perform_action(Some(&agent), "tickets", "assign"));
    }

    #[test]
    fn test_unknown_permission_name_never_matches() {
        // 잘못 구성된 요구 조건은 조용히 거부된다
        let agent = agent_with(&["tickets.assign"]);

        assert!(!has_permission(Some(&agent), "ticket.assign"));
        assert!(!has_permission(Some(&agent), "tickets.assign "));
    }
}

use crate::domain::access::role::Role;
use crate::domain::access::viewer::Viewer;

/// 보호된 뷰에 부착되는 역할/권한 전제 조건
///
/// 요구 역할은 OR 조건(하나라도 일치하면 만족)이고,
/// 요구 권한은 AND 조건(명시된 모든 권한을 보유해야 만족)입니다.
/// 역할도 권한도 없는 빈 요구 조건은 인증된 모든 뷰어가 만족합니다.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRequirement {
    /// 요구되는 역할 목록 (비어 있으면 역할 제한 없음)
    pub roles: Vec<Role>,

    /// 요구되는 권한 이름 목록 (비어 있으면 권한 제한 없음)
    pub permissions: Vec<String>,
}

impl CapabilityRequirement {
    /// 제한 없는 요구 조건 생성 (인증만 요구)
    pub fn none() -> Self {
        Self::default()
    }

    /// 역할 제한만 있는 요구 조건 생성
    pub fn any_of_roles(roles: Vec<Role>) -> Self {
        Self {
            roles,
            permissions: Vec::new(),
        }
    }

    /// 단일 권한 요구 조건 생성
    pub fn permission(name: impl Into<String>) -> Self {
        Self {
            roles: Vec::new(),
            permissions: vec![name.into()],
        }
    }

    /// 권한 요구를 추가합니다 (빌더 스타일)
    pub fn require_permission(mut self, name: impl Into<String>) -> Self {
        self.permissions.push(name.into());
        self
    }

    /// 뷰어가 이 요구 조건을 만족하는지 확인
    ///
    /// 존재하는 뷰어에 대한 역할/권한 검사만 수행합니다.
    /// 뷰어 부재와 로딩 상태는 게이트 상태 기계가 먼저 처리합니다.
    pub fn is_satisfied_by(&self, viewer: &Viewer) -> bool {
        let role_ok = self.roles.is_empty() || viewer.has_any_role(&self.roles);
        let permissions_ok = self.permissions.iter().all(|name| viewer.has_permission(name));

        role_ok && permissions_ok
    }
}

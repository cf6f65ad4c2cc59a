use serde::{Deserialize, Serialize};

use crate::domain::access::viewer::Viewer;

/// Identity Source가 노출하는 신원 스냅샷
///
/// 게이트가 Identity Source에 대해 관찰하는 유일한 형태입니다.
/// 세션 토큰 검증 같은 비동기 작업은 전적으로 Identity Source의 소유이며,
/// 게이트는 그 결과를 `{viewer, loading}` 스냅샷으로만 소비합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitySnapshot {
    /// 현재 뷰어 (미인증이면 None)
    pub viewer: Option<Viewer>,

    /// Identity Source가 아직 해석 중인지 여부
    pub loading: bool,
}

impl IdentitySnapshot {
    /// 해석이 끝나지 않은 상태의 스냅샷 생성
    pub fn loading() -> Self {
        Self {
            viewer: None,
            loading: true,
        }
    }

    /// 미인증 상태의 스냅샷 생성
    pub fn anonymous() -> Self {
        Self {
            viewer: None,
            loading: false,
        }
    }

    /// 인증된 뷰어가 실린 스냅샷 생성
    pub fn authenticated(viewer: Viewer) -> Self {
        Self {
            viewer: Some(viewer),
            loading: false,
        }
    }

    /// 현재 뷰어가 특정 권한을 보유하고 있는지 확인
    ///
    /// 뷰어가 없거나 권한이 없으면 `false`를 반환합니다.
    pub fn user_has_permission(&self, name: &str) -> bool {
        self.viewer
            .as_ref()
            .map(|viewer| viewer.has_permission(name))
            .unwrap_or(false)
    }
}

/// 기본값은 해석 전 상태
///
/// 요청 파이프라인에 스냅샷이 아직 실리지 않았다면
/// Identity Source가 해석을 마치지 않은 것으로 취급합니다.
impl Default for IdentitySnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

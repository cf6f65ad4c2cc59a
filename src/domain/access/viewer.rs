use std::collections::HashSet;
use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::AppError;
use crate::domain::access::role::Role;

/// 게이트가 소비하는 현재 뷰어 정보
///
/// Identity Source가 해석을 마친 신원 스냅샷의 일부로 전달되며,
/// 게이트 입장에서는 불변 데이터입니다. 권한 집합은 역할 기본 권한과
/// 명시적 부여를 합쳐 Identity Source가 이미 해석한 결과이므로,
/// 이 크레이트는 멤버십 검사만 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 뷰어 역할
    pub role: Role,

    /// 해석된 권한 이름 집합
    pub permissions: HashSet<String>,
}

impl Viewer {
    /// 권한 없는 뷰어 생성
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            permissions: HashSet::new(),
        }
    }

    /// 권한 목록과 함께 뷰어 생성
    pub fn with_permissions<I, S>(user_id: impl Into<String>, role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            role,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 게이트를 통과한 요청의 extensions에서 뷰어를 추출합니다.
/// 게이트 없이 등록된 핸들러에서 사용하면 401로 응답됩니다.
impl FromRequest for Viewer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Viewer>() {
            Some(viewer) => ready(Ok(viewer.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증된 뷰어 정보가 없습니다".to_string(),
            ))),
        }
    }
}

/// 선택적 뷰어 추출자
#[derive(Debug, Clone)]
pub struct OptionalViewer(pub Option<Viewer>);

impl FromRequest for OptionalViewer {
    type Error = actix_web::Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let viewer = req.extensions().get::<Viewer>().cloned();
        ready(Ok(OptionalViewer(viewer)))
    }
}

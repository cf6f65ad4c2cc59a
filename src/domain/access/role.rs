//! 뷰어 역할을 나타내는 닫힌 열거형
//!
//! 역할 검사를 문자열 비교로 흩어 두는 대신 닫힌 열거형으로 고정하여
//! 컴파일 타임에 오타와 미지의 역할 이름을 차단합니다.

use serde::{Deserialize, Serialize};

/// ITSM 애플리케이션의 뷰어 역할
///
/// ## 직렬화 지원
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하며,
/// 와이어 표현은 소문자 역할 이름(`"user"`, `"agent"`, ...)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 최종 사용자 역할
    ///
    /// 포털 영역에 접근할 수 있는 유일한 역할입니다.
    /// 티켓 생성과 조회 등 셀프서비스 기능을 사용합니다.
    User,

    /// 상담원 역할
    ///
    /// 내부 대시보드에서 티켓을 처리하는 역할입니다.
    Agent,

    /// 매니저 역할
    ///
    /// 변경 승인, 보고서 열람 등 관리 기능을 사용하는 역할입니다.
    Manager,

    /// 관리자 역할
    ///
    /// 사용자 관리를 포함한 전체 기능에 접근하는 역할입니다.
    Admin,
}

impl Role {
    /// 문자열에서 Role을 생성합니다.
    ///
    /// 환경 변수나 설정 파일에서 문자열로 전달된 역할 이름을
    /// 적절한 열거형 값으로 변환합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 역할 이름 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// * `Ok(Role)` - 유효한 역할인 경우
    /// * `Err(String)` - 지원하지 않는 역할인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "agent" => Ok(Role::Agent),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    /// Role을 문자열로 변환합니다.
    ///
    /// # Returns
    ///
    /// 해당 역할의 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// 포털(최종 사용자) 영역에 접근 가능한 역할인지 확인
    pub fn is_portal_role(&self) -> bool {
        matches!(self, Role::User)
    }
}

//! # Application Error Handling System
//!
//! 접근 게이트 서비스를 위한 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 주의: 게이트의 판정 결과(`Pending`/`Allow`/`Unauthenticated`/`Forbidden`)는
//! 에러가 아니라 [`crate::domain::access::Decision`] 값으로 표현됩니다.
//! 이 모듈은 판정 바깥의 부수적인 실패(설정값 검증, 핸들러에서의 사용자 추출 등)만 다룹니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 설정값/입력값 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 인증된 사용자 정보 없음 |
//! | `AuthorizationError` | 403 Forbidden | 핸들러 수준의 권한 부족 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 접근 게이트 서비스에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 환경 변수로 주어진 역할 이름이나 권한 목록 등이 형식 요구사항을
    /// 만족하지 않을 때 발생합니다. 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러
    ///
    /// 보호된 핸들러에서 사용자의 신원을 확인할 수 없을 때 발생합니다.
    /// 정상적으로 게이트를 통과한 요청에서는 발생하지 않습니다.
    /// 401 Unauthorized로 응답됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증된 사용자가 특정 작업을 수행할 권한이 없을 때 발생합니다.
    /// 게이트는 권한 부족을 리다이렉트로 처리하므로, 이 에러는
    /// 핸들러 내부의 추가 검사(예: `can_perform_action`)에서만 사용됩니다.
    /// 403 Forbidden으로 응답됩니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// 애플리케이션 전체에서 자주 사용되는 `Result<T, AppError>` 패턴을
/// 간소화하기 위한 타입 별칭입니다.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Unknown role name".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("No viewer in request".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}

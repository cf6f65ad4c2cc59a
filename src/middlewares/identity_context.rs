//! 신원 컨텍스트 미들웨어
//!
//! 애플리케이션 셸이 주입한 Identity Source에서 매 요청마다 스냅샷을
//! 받아 요청 extensions에 싣습니다. 게이트가 전역 상태를 읽는 대신
//! 이 스냅샷을 명시적 입력으로 소비하게 하는 의존성 주입 지점입니다.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, Result};

use crate::domain::identity::source::IdentitySource;

/// 신원 컨텍스트 미들웨어
pub struct IdentityContext {
    source: Arc<dyn IdentitySource>,
}

impl IdentityContext {
    /// Identity Source를 주입받아 미들웨어 생성
    pub fn new(source: Arc<dyn IdentitySource>) -> Self {
        Self { source }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for IdentityContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityContextService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityContextService {
            service,
            source: Arc::clone(&self.source),
        }))
    }
}

/// 스냅샷 적재를 수행하는 서비스
pub struct IdentityContextService<S> {
    service: S,
    source: Arc<dyn IdentitySource>,
}

impl<S, B> Service<ServiceRequest> for IdentityContextService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        req.extensions_mut().insert(self.source.snapshot());
        self.service.call(req)
    }
}

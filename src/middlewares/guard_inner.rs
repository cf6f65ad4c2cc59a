//! RouteGuard 판정 적용 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::access::decision::Decision;
use crate::domain::access::requirement::CapabilityRequirement;
use crate::domain::identity::snapshot::IdentitySnapshot;
use crate::middlewares::route_guard::GateKind;
use crate::services::access::gate;

/// 실제 판정 적용을 수행하는 서비스
///
/// 요청 extensions에서 신원 스냅샷을 읽어 게이트를 평가하고,
/// 판정에 따라 한 요청당 정확히 하나의 결과를 산출합니다:
/// 내부 서비스 호출, 302 리다이렉트, 로딩 플레이스홀더 응답.
pub struct RouteGuardService<S> {
    pub service: Rc<S>,
    pub requirement: CapabilityRequirement,
    pub kind: GateKind,
}

impl<S, B> Service<ServiceRequest> for RouteGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let requirement = self.requirement.clone();
        let kind = self.kind.clone();

        Box::pin(async move {
            // 스냅샷이 실리지 않았다면 Identity Source 미해석으로 취급
            let snapshot = req
                .extensions()
                .get::<IdentitySnapshot>()
                .cloned()
                .unwrap_or_default();

            match gate::evaluate(&snapshot, &requirement) {
                // Identity Source 해석 대기 중 - 리다이렉트 없이 플레이스홀더 렌더링
                Decision::Pending => {
                    log::debug!("신원 해석 대기 중: {}", req.path());
                    let response = HttpResponse::Ok().json(serde_json::json!({
                        "status": "pending",
                        "message": "세션을 확인하는 중입니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
                // 뷰어 부재 - 로그인 경로로 리다이렉트
                Decision::Unauthenticated => {
                    let target = kind.unauthenticated_path();
                    log::warn!("미인증 접근: {} -> {}", req.path(), target);
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, target))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
                // 요구 조건 미충족 - 게이트 변형에 맞는 폴백 경로로 리다이렉트
                Decision::Forbidden(denied) => {
                    let target = kind.forbidden_path(denied);
                    let viewer_id = snapshot
                        .viewer
                        .as_ref()
                        .map(|v| v.user_id.as_str())
                        .unwrap_or("-");
                    log::warn!(
                        "접근 거부 ({:?}): 사용자 ID {}, {} -> {}",
                        denied,
                        viewer_id,
                        req.path(),
                        target
                    );
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, target))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
                // 허용 - 뷰어를 extensions에 실어 내부 서비스로 전달
                Decision::Allow => {
                    if let Some(viewer) = snapshot.viewer {
                        log::debug!("접근 허용: 사용자 ID {}, {}", viewer.user_id, req.path());
                        req.extensions_mut().insert(viewer);
                    }
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

//! ITSM 접근 게이트 개발 하니스
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 가드가 적용된 라우트를 노출합니다.
//! 실제 배포에서는 encompassing 셸이 Identity Source를 주입하지만,
//! 이 하니스는 환경 변수로 구성되는 고정 신원 픽스처를 대신 사용하여
//! 게이트의 동작을 end-to-end로 확인할 수 있게 합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use itsm_access_gate::config::ServerConfig;
use itsm_access_gate::core::{AppError, AppResult};
use itsm_access_gate::domain::access::{Role, Viewer};
use itsm_access_gate::domain::identity::{IdentitySnapshot, IdentitySource};
use itsm_access_gate::middlewares::IdentityContext;
use itsm_access_gate::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

/// 환경 변수로 구성되는 고정 신원 픽스처
///
/// 셸의 실제 Identity Source를 대신하는 개발용 구현입니다.
/// 매 요청 같은 스냅샷을 반환하며, 세션 검증 같은 해석 작업은 없습니다.
///
/// # Environment Variables
///
/// * `DEV_IDENTITY_PENDING=true` - 영원히 해석되지 않는 소스 (게이트는 계속 대기)
/// * `DEV_VIEWER_ROLE` - 뷰어 역할 (미설정이면 미인증 상태)
/// * `DEV_VIEWER_ID` - 뷰어 ID (기본값: "dev-user")
/// * `DEV_VIEWER_PERMISSIONS` - 쉼표로 구분된 권한 이름 목록
struct FixtureIdentitySource {
    snapshot: IdentitySnapshot,
}

impl FixtureIdentitySource {
    /// 환경 변수에서 픽스처를 구성합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `DEV_VIEWER_ROLE`이 알 수 없는 역할 이름인 경우
    fn from_env() -> AppResult<Self> {
        let pending = std::env::var("DEV_IDENTITY_PENDING")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if pending {
            return Ok(Self {
                snapshot: IdentitySnapshot::loading(),
            });
        }

        let snapshot = match std::env::var("DEV_VIEWER_ROLE") {
            Ok(role_name) => {
                let role = Role::from_str(&role_name).map_err(AppError::ValidationError)?;
                let user_id = std::env::var("DEV_VIEWER_ID")
                    .unwrap_or_else(|_| "dev-user".to_string());
                let permissions: Vec<String> = std::env::var("DEV_VIEWER_PERMISSIONS")
                    .map(|raw| {
                        raw.split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();

                IdentitySnapshot::authenticated(Viewer::with_permissions(
                    user_id,
                    role,
                    permissions,
                ))
            }
            Err(_) => IdentitySnapshot::anonymous(),
        };

        Ok(Self { snapshot })
    }
}

impl IdentitySource for FixtureIdentitySource {
    fn snapshot(&self) -> IdentitySnapshot {
        self.snapshot.clone()
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 ITSM 접근 게이트 서비스 시작중...");

    // 신원 픽스처 구성
    let source: Arc<dyn IdentitySource> =
        Arc::new(FixtureIdentitySource::from_env().expect("신원 픽스처 구성 실패"));

    match source.snapshot() {
        snapshot if snapshot.loading => info!("🔎 신원 픽스처: 해석 대기 상태"),
        snapshot => match snapshot.viewer {
            Some(viewer) => info!(
                "🔎 신원 픽스처: {} ({}), 권한 {}개",
                viewer.user_id,
                viewer.role.as_str(),
                viewer.permissions.len()
            ),
            None => info!("🔎 신원 픽스처: 미인증 상태"),
        },
    }

    // HTTP 서버 시작
    start_http_server(source).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 신원 컨텍스트 미들웨어를 포함합니다.
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(source: Arc<dyn IdentitySource>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 포털 진입점: http://{}/portal", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 신원 컨텍스트 (가드보다 먼저 스냅샷 적재)
            .wrap(IdentityContext::new(Arc::clone(&source)))

            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// # Environment Variables
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

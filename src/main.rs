pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::{Argon2Hasher, SessionStoreRedis};
use crate::modules::auth::application::use_cases::{
    check_session::{CheckSessionUseCase, ICheckSessionUseCase},
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
    verify_admin_path::{IVerifyAdminPathUseCase, VerifyAdminPathUseCase},
};
use crate::modules::content::adapter::outgoing::content_store_postgres::ContentStorePostgres;
use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::content::application::use_cases::{
    commit_section::{CommitSectionUseCase, ICommitSectionUseCase},
    load_section::{ILoadSectionUseCase, LoadSectionUseCase},
};
use crate::modules::editor::application::save::SaveCoordinator;
use crate::modules::media::adapter::outgoing::blob_store_gcs::GcsBlobStore;
use crate::modules::media::application::policies::upload_policy::UploadPolicy;
use crate::modules::media::application::ports::outgoing::blob_store::BlobStore;
use crate::modules::status::adapter::ToastRegistry;
use crate::modules::status::application::ports::status_channel::StatusChannel;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

#[derive(Clone)]
pub struct AppState {
    pub load_section_use_case: Arc<dyn ILoadSectionUseCase + Send + Sync>,
    pub commit_section_use_case: Arc<dyn ICommitSectionUseCase + Send + Sync>,
    pub save_coordinator: Arc<SaveCoordinator>,
    pub statuses: Arc<ToastRegistry>,
    pub upload_policy: UploadPolicy,
    pub session_ttl: Duration,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub check_session_use_case: Arc<dyn ICheckSessionUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub verify_admin_path_use_case: Arc<dyn IVerifyAdminPathUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let admin_password_hash = env::var("ADMIN_PASSWORD_HASH").ok();
    let admin_path = env::var("ADMIN_PATH").ok();
    let session_ttl = Duration::from_secs(
        env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS),
    );

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Content side
    let upload_policy = UploadPolicy::from_env();
    let content_store: Arc<dyn ContentStore> =
        Arc::new(ContentStorePostgres::new(Arc::clone(&db_arc)));
    let blob_store: Arc<dyn BlobStore> =
        Arc::new(GcsBlobStore::new(upload_policy.bucket_name.clone()));
    let statuses = Arc::new(ToastRegistry::new());

    let load_section_use_case = LoadSectionUseCase::new(Arc::clone(&content_store));
    let commit_section_use_case = CommitSectionUseCase::new(Arc::clone(&content_store));
    let save_coordinator = SaveCoordinator::new(
        Arc::clone(&blob_store),
        Arc::clone(&content_store),
        Arc::clone(&statuses) as Arc<dyn StatusChannel>,
    );

    // Admin side
    let argon2_password_hasher = Argon2Hasher::from_env();
    let session_store = Arc::new(SessionStoreRedis::new(Arc::clone(&redis_arc)));

    let login_admin_use_case = LoginAdminUseCase::new(
        admin_password_hash,
        session_ttl,
        Arc::new(argon2_password_hasher),
        session_store.clone(),
    );
    let check_session_use_case = CheckSessionUseCase::new(session_store.clone());
    let logout_admin_use_case = LogoutAdminUseCase::new(session_store);
    let verify_admin_path_use_case = VerifyAdminPathUseCase::new(admin_path);

    let state = AppState {
        load_section_use_case: Arc::new(load_section_use_case),
        commit_section_use_case: Arc::new(commit_section_use_case),
        save_coordinator: Arc::new(save_coordinator),
        statuses,
        upload_policy,
        session_ttl,
        login_admin_use_case: Arc::new(login_admin_use_case),
        check_session_use_case: Arc::new(check_session_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        verify_admin_path_use_case: Arc::new(verify_admin_path_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_section_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::put_section_handler);
    cfg.service(crate::modules::editor::adapter::incoming::web::routes::save_section_handler);
    // Admin
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::session_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::verify_path_handler);
    cfg.service(crate::modules::status::adapter::incoming::web::routes::list_statuses_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

mod auth;
mod config;
mod db;
mod email;
mod error;
mod favorites;
mod jobs;
mod models;
mod profiles;
mod validation;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, EmployeeRepository, EmployerRepository, TokenService};
use config::AppConfig;
use email::EmailService;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        jobs::handlers::create_job,
        jobs::handlers::get_all_jobs,
    ),
    components(
        schemas(jobs::Job, jobs::CreateJobRequest, jobs::JobCreatedResponse)
    ),
    tags(
        (name = "jobs", description = "Job posting endpoints")
    ),
    info(
        title = "Job Board API",
        version = "1.0.0",
        description = "RESTful API for a job board connecting employers and developers"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
///
/// Built once at startup from [`AppConfig`]; handlers never read the
/// environment themselves.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: AuthService,
    pub token_service: TokenService,
    pub email_service: EmailService,
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> TokenService {
        state.token_service.clone()
    }
}

/// Assemble application state from the pool and configuration
fn build_state(db: PgPool, config: &AppConfig) -> AppState {
    let token_service = TokenService::new(config.jwt_secret.clone());
    let auth_service = AuthService::new(
        EmployerRepository::new(db.clone()),
        EmployeeRepository::new(db.clone()),
        token_service.clone(),
    );
    let email_service =
        EmailService::from_config(&config.smtp).expect("Failed to build email sender");

    AppState {
        db,
        auth_service,
        token_service,
        email_service,
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication
        .route(
            "/api/auth/register/developer",
            post(auth::register_developer_handler),
        )
        .route(
            "/api/auth/register/employer",
            post(auth::register_employer_handler),
        )
        .route(
            "/api/auth/login/developer",
            post(auth::login_developer_handler),
        )
        .route(
            "/api/auth/login/employer",
            post(auth::login_employer_handler),
        )
        .route("/api/auth/me", get(auth::me_handler))
        // Employee profiles
        .route("/api/employees", get(profiles::list_employees))
        .route("/api/employees/:id", put(profiles::update_employee))
        .route("/api/employees/email", post(email::handlers::employee_send_email))
        .route(
            "/api/employers/:id/employees",
            get(profiles::employer_list_employees),
        )
        .route(
            "/api/employers/:id/employees/:employee_id",
            get(profiles::view_employee_profile),
        )
        // Job postings
        .route("/api/jobs", get(jobs::get_all_jobs))
        .route("/api/employers/:id/jobs", post(jobs::create_job))
        // Favorites
        .route("/api/employers/:id/favorites", get(favorites::list_favorites))
        .route(
            "/api/employers/:id/favorites/:employee_id",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        // Email notifications
        .route("/api/employers/:id/email", post(email::handlers::employer_send_email))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Job Board API - Starting...");

    // Read configuration once; everything downstream gets it through state
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let state = build_state(db_pool, &config);
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Job Board API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

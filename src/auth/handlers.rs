// HTTP handlers for authentication endpoints

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedPrincipal,
    models::{
        DeveloperResponse, LoginRequest, LoginResponse, PrincipalKind, PrincipalResponse,
        RegisterDeveloperRequest, RegisterEmployerRequest, RegisterEmployerResponse,
    },
};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Register a new developer
/// POST /api/auth/register/developer
pub async fn register_developer_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterDeveloperRequest>,
) -> Result<(StatusCode, Json<DeveloperResponse>), AuthError> {
    let employee = state.auth_service.register_developer(request).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Register a new employer
/// POST /api/auth/register/employer
pub async fn register_employer_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterEmployerRequest>,
) -> Result<(StatusCode, Json<RegisterEmployerResponse>), AuthError> {
    let employer = state.auth_service.register_employer(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterEmployerResponse {
            message: "Registration successful".to_string(),
            user: employer.into(),
        }),
    ))
}

/// Login an employer
/// POST /api/auth/login/employer
pub async fn login_employer_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let (principal, access_token) = state
        .auth_service
        .login(PrincipalKind::Employer, request)
        .await?;

    Ok(Json(LoginResponse {
        message: "Employer Login successful!".to_string(),
        access_token,
        user: principal.into(),
    }))
}

/// Login a developer
/// POST /api/auth/login/developer
pub async fn login_developer_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let (principal, access_token) = state
        .auth_service
        .login(PrincipalKind::Employee, request)
        .await?;

    Ok(Json(LoginResponse {
        message: "Developer Login successful!".to_string(),
        access_token,
        user: principal.into(),
    }))
}

/// Get the principal behind the bearer token (protected endpoint)
/// GET /api/auth/me
pub async fn me_handler(
    State(state): State<AppState>,
    principal: AuthenticatedPrincipal,
) -> Result<Json<PrincipalResponse>, AuthError> {
    let resolved = state
        .auth_service
        .resolve(principal.principal_id, principal.kind)
        .await?;

    Ok(Json(resolved.into()))
}

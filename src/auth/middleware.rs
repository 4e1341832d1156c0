// Authentication middleware for protected routes

use crate::auth::{error::AuthError, models::PrincipalKind, token::TokenService};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::debug;

/// Authenticated principal extractor for protected routes
///
/// Carries the verified token claims only; loading the record is the
/// handler's call. The token service is taken from application state, so the
/// extractor works against whatever secret the state was built with.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub principal_id: i32,
    pub kind: Option<PrincipalKind>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedPrincipal
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        // Verify Bearer token format
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let token_service = TokenService::from_ref(state);
        let claims = token_service.verify(token)?;

        debug!("Authenticated principal id {}", claims.sub);

        Ok(AuthenticatedPrincipal {
            principal_id: claims.sub,
            kind: claims.kind,
        })
    }
}

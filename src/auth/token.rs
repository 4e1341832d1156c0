// JWT token issuance and verification service

use crate::auth::error::AuthError;
use crate::auth::models::PrincipalKind;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Access tokens are valid for 3 days
pub const TOKEN_TTL_SECONDS: i64 = 259_200;

/// JWT claims structure
///
/// `kind` tags which principal store `sub` refers to, so ids from the two
/// stores can never shadow each other. Older tokens carry only the numeric
/// subject; those deserialize with `kind: None` and go through the
/// legacy resolution path.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // principal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PrincipalKind>,
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for JWT operations
///
/// Bearer semantics: no revocation list and no rotation; expiration is the
/// only lifecycle control, and the signing secret is loaded once at startup.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    token_duration: i64, // in seconds
}

impl TokenService {
    /// Create a new TokenService with the signing secret
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_duration: TOKEN_TTL_SECONDS,
        }
    }

    /// Issue a signed access token bound to one principal
    pub fn issue(&self, kind: PrincipalKind, principal_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let exp = now + self.token_duration;

        let claims = Claims {
            sub: principal_id,
            kind: Some(kind),
            iat: now,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn token_expiration_is_3_days() {
        let service = test_token_service();
        let token = service.issue(PrincipalKind::Employer, 1).unwrap();
        let claims = service.verify(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 259_200, "Token should expire in exactly 3 days");
    }

    #[test]
    fn claims_carry_principal_identity_and_kind() {
        let service = test_token_service();

        let token = service.issue(PrincipalKind::Employee, 42).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.kind, Some(PrincipalKind::Employee));

        let token = service.issue(PrincipalKind::Employer, 42).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.kind, Some(PrincipalKind::Employer));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("invalid_token_format").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.issue(PrincipalKind::Employer, 1).unwrap();

        assert!(service1.verify(&token).is_ok());
        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let service = test_token_service();

        // Crafted well past the validator's leeway
        let claims = Claims {
            sub: 1,
            kind: Some(PrincipalKind::Employee),
            iat: Utc::now().timestamp() - 1_000,
            exp: Utc::now().timestamp() - 500,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = service.verify(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn legacy_claims_without_kind_still_verify() {
        let service = test_token_service();

        // A token minted before kind tagging: only the numeric subject
        #[derive(Serialize)]
        struct LegacyClaims {
            sub: i32,
            iat: i64,
            exp: i64,
        }

        let now = Utc::now().timestamp();
        let token = encode(
            &Header::default(),
            &LegacyClaims {
                sub: 5,
                iat: now,
                exp: now + 600,
            },
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, 5);
        assert_eq!(claims.kind, None);
    }

    // Property-based tests using proptest

    fn kind_strategy() -> impl Strategy<Value = PrincipalKind> {
        prop_oneof![Just(PrincipalKind::Employer), Just(PrincipalKind::Employee)]
    }

    proptest! {
        #[test]
        fn prop_issued_tokens_roundtrip_identity(
            principal_id in 1i32..1000000,
            kind in kind_strategy()
        ) {
            let service = test_token_service();
            let token = service.issue(kind, principal_id)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.sub, principal_id);
            prop_assert_eq!(claims.kind, Some(kind));
        }

        #[test]
        fn prop_issued_tokens_expire_in_3_days(
            principal_id in 1i32..1000000,
            kind in kind_strategy()
        ) {
            let service = test_token_service();
            let token = service.issue(kind, principal_id)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.exp - claims.iat, 259_200);
        }

        #[test]
        fn prop_malformed_tokens_rejected(
            malformed in "[a-zA-Z0-9]{10,50}"
        ) {
            let service = test_token_service();

            let result = service.verify(&malformed);
            prop_assert!(result.is_err());
        }
    }
}

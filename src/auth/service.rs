// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::{
        Employee, Employer, LoginRequest, Principal, PrincipalKind, RegisterDeveloperRequest,
        RegisterEmployerRequest,
    },
    password::PasswordService,
    repository::{EmployeeRepository, EmployerRepository},
    token::TokenService,
};
use crate::validation;
use validator::Validate;

/// Authentication service coordinating registration, login, and identity
/// resolution across the two principal stores
#[derive(Clone)]
pub struct AuthService {
    employers: EmployerRepository,
    employees: EmployeeRepository,
    tokens: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        employers: EmployerRepository,
        employees: EmployeeRepository,
        tokens: TokenService,
    ) -> Self {
        Self {
            employers,
            employees,
            tokens,
        }
    }

    /// Register a new employer
    ///
    /// Checks run in a fixed order, first failure wins:
    /// 1. Email shape
    /// 2. Password length
    /// 3. Email uniqueness within the employer store
    /// On pass: hash the password and insert exactly one row.
    pub async fn register_employer(
        &self,
        request: RegisterEmployerRequest,
    ) -> Result<Employer, AuthError> {
        validation::validate_email_shape(&request.email)
            .map_err(|_| AuthError::Validation("Invalid email format".to_string()))?;
        validation::validate_password_length(&request.password).map_err(|_| {
            AuthError::Validation("Password must be at least 6 characters".to_string())
        })?;

        if self.employers.email_exists(&request.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = PasswordService::hash_password(&request.password)?;
        let employer = self.employers.create(&request, &password_hash).await?;

        tracing::info!("Registered employer with id: {}", employer.id);
        Ok(employer)
    }

    /// Register a new developer
    ///
    /// Same ordering as employer registration, with the optional profile
    /// fields validated before the uniqueness check.
    pub async fn register_developer(
        &self,
        request: RegisterDeveloperRequest,
    ) -> Result<Employee, AuthError> {
        validation::validate_email_shape(&request.email)
            .map_err(|_| AuthError::Validation("Invalid email format".to_string()))?;
        validation::validate_password_length(&request.password).map_err(|_| {
            AuthError::Validation("Password must be at least 6 characters".to_string())
        })?;
        request
            .validate()
            .map_err(|e| AuthError::Validation(format!("Validation failed: {}", e)))?;

        if self.employees.email_exists(&request.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = PasswordService::hash_password(&request.password)?;
        let employee = self.employees.create(&request, &password_hash).await?;

        tracing::info!("Registered developer with id: {}", employee.id);
        Ok(employee)
    }

    /// Verify credentials against the given variant's store and issue a token
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` outcome so responses cannot be used to probe
    /// which addresses are registered.
    pub async fn login(
        &self,
        kind: PrincipalKind,
        request: LoginRequest,
    ) -> Result<(Principal, String), AuthError> {
        let principal = match kind {
            PrincipalKind::Employer => self
                .employers
                .find_by_email(&request.email)
                .await?
                .map(Principal::Employer),
            PrincipalKind::Employee => self
                .employees
                .find_by_email(&request.email)
                .await?
                .map(Principal::Employee),
        }
        .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(&request.password, principal.password_hash()) {
            tracing::warn!("Failed {} login attempt", kind);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(principal.kind(), principal.id())?;
        tracing::debug!("Issued token for {} id {}", kind, principal.id());

        Ok((principal, token))
    }

    /// Resolve a verified token's claims to exactly one principal
    ///
    /// Tokens issued by this service carry the variant tag, so resolution
    /// touches a single store. Legacy tokens without the tag fall back to
    /// probing the employer store first, then the employee store; for a
    /// colliding id the employer wins.
    pub async fn resolve(
        &self,
        principal_id: i32,
        kind: Option<PrincipalKind>,
    ) -> Result<Principal, AuthError> {
        match kind {
            Some(PrincipalKind::Employer) => self
                .employers
                .find_by_id(principal_id)
                .await?
                .map(Principal::Employer)
                .ok_or(AuthError::PrincipalNotFound),
            Some(PrincipalKind::Employee) => self
                .employees
                .find_by_id(principal_id)
                .await?
                .map(Principal::Employee)
                .ok_or(AuthError::PrincipalNotFound),
            None => {
                if let Some(employer) = self.employers.find_by_id(principal_id).await? {
                    return Ok(Principal::Employer(employer));
                }
                self.employees
                    .find_by_id(principal_id)
                    .await?
                    .map(Principal::Employee)
                    .ok_or(AuthError::PrincipalNotFound)
            }
        }
    }
}

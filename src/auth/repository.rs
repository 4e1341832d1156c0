// Database repositories for the two principal stores

use crate::auth::error::AuthError;
use crate::auth::models::{Employee, Employer, RegisterDeveloperRequest, RegisterEmployerRequest};
use sqlx::PgPool;

const EMPLOYER_COLUMNS: &str =
    "id, first_name, last_name, email, phone, company_name, password_hash, created_at";

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, role, email, phone, experience, \
     programming_languages, bio, education, availability, password_hash, created_at";

/// Map a sqlx error to an auth error, catching uniqueness races
///
/// A duplicate email can slip past the pre-insert check when two
/// registrations race; the store's unique index is the backstop.
fn map_insert_error(e: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AuthError::EmailTaken;
        }
    }
    AuthError::Database(e.to_string())
}

/// Repository for employer records
#[derive(Clone)]
pub struct EmployerRepository {
    pool: PgPool,
}

impl EmployerRepository {
    /// Create a new EmployerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new employer record
    pub async fn create(
        &self,
        request: &RegisterEmployerRequest,
        password_hash: &str,
    ) -> Result<Employer, AuthError> {
        let employer = sqlx::query_as::<_, Employer>(&format!(
            "INSERT INTO employers (first_name, last_name, email, phone, company_name, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {EMPLOYER_COLUMNS}"
        ))
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.company_name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(employer)
    }

    /// Find an employer by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employer>, AuthError> {
        let employer = sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(employer)
    }

    /// Find an employer by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employer>, AuthError> {
        let employer = sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(employer)
    }

    /// Check if an email is already registered in the employer store
    pub async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(exists.0)
    }
}

/// Repository for employee records
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new EmployeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new employee record
    pub async fn create(
        &self,
        request: &RegisterDeveloperRequest,
        password_hash: &str,
    ) -> Result<Employee, AuthError> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (first_name, last_name, role, email, phone, experience, \
             programming_languages, bio, education, availability, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.role)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.experience)
        .bind(&request.languages)
        .bind(&request.bio)
        .bind(&request.education)
        .bind(&request.availability)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(employee)
    }

    /// Find an employee by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AuthError> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(employee)
    }

    /// Find an employee by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AuthError> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(employee)
    }

    /// Check if an email is already registered in the employee store
    pub async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(exists.0)
    }
}

// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

/// Which of the two disjoint principal stores a record belongs to
///
/// The wire value follows the public API wording: employees are "developer"
/// everywhere a client sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalKind {
    #[serde(rename = "employer")]
    Employer,
    #[serde(rename = "developer")]
    Employee,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalKind::Employer => write!(f, "employer"),
            PrincipalKind::Employee => write!(f, "developer"),
        }
    }
}

/// Employer database model
#[derive(Debug, Clone, FromRow)]
pub struct Employer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Employee database model
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<i32>,
    pub programming_languages: Vec<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub availability: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// An authenticated entity, tagged with the store it came from
///
/// The variant is fixed at creation and drives serialization through
/// exhaustive matching; nothing downstream inspects record types at runtime.
#[derive(Debug, Clone)]
pub enum Principal {
    Employer(Employer),
    Employee(Employee),
}

impl Principal {
    pub fn id(&self) -> i32 {
        match self {
            Principal::Employer(employer) => employer.id,
            Principal::Employee(employee) => employee.id,
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::Employer(_) => PrincipalKind::Employer,
            Principal::Employee(_) => PrincipalKind::Employee,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Principal::Employer(employer) => &employer.password_hash,
            Principal::Employee(employee) => &employee.password_hash,
        }
    }
}

/// Developer registration request DTO
///
/// Email shape and password length are checked sequentially by the
/// registration workflow; the derive covers the optional profile fields.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDeveloperRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 0))]
    pub experience: Option<i32>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub availability: Option<String>,
}

/// Employer registration request DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterEmployerRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub phone: Option<String>,
}

/// Login request DTO
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Employer response model (excludes password_hash)
#[derive(Debug, Clone, Serialize)]
pub struct EmployerResponse {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub phone: Option<String>,
    pub user_type: PrincipalKind,
}

impl From<Employer> for EmployerResponse {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.id,
            email: employer.email,
            first_name: employer.first_name,
            last_name: employer.last_name,
            company_name: employer.company_name,
            phone: employer.phone,
            user_type: PrincipalKind::Employer,
        }
    }
}

/// Developer response model (excludes password_hash)
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperResponse {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<i32>,
    pub programming_languages: Vec<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub availability: Option<String>,
    pub user_type: PrincipalKind,
}

impl From<Employee> for DeveloperResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email,
            first_name: employee.first_name,
            last_name: employee.last_name,
            role: employee.role,
            phone: employee.phone,
            experience: employee.experience,
            programming_languages: employee.programming_languages,
            bio: employee.bio,
            education: employee.education,
            availability: employee.availability,
            user_type: PrincipalKind::Employee,
        }
    }
}

/// Variant-shaped response for any principal
///
/// The `user_type` field inside each variant is the discriminator clients
/// see, so the enum itself serializes untagged.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PrincipalResponse {
    Employer(EmployerResponse),
    Developer(DeveloperResponse),
}

impl From<Principal> for PrincipalResponse {
    fn from(principal: Principal) -> Self {
        match principal {
            Principal::Employer(employer) => PrincipalResponse::Employer(employer.into()),
            Principal::Employee(employee) => PrincipalResponse::Developer(employee.into()),
        }
    }
}

/// Successful login response DTO
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub user: PrincipalResponse,
}

/// Successful employer registration response DTO
#[derive(Debug, Serialize)]
pub struct RegisterEmployerResponse {
    pub message: String,
    pub user: EmployerResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employer() -> Employer {
        Employer {
            id: 7,
            first_name: "Dana".to_string(),
            last_name: "Reeve".to_string(),
            email: "dana@acme.io".to_string(),
            phone: None,
            company_name: "Acme".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn employer_response_drops_password_hash() {
        let response = PrincipalResponse::from(Principal::Employer(sample_employer()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["user_type"], "employer");
        assert_eq!(json["company_name"], "Acme");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn developer_response_carries_variant_fields() {
        let employee = Employee {
            id: 3,
            first_name: "Ada".to_string(),
            last_name: "Park".to_string(),
            role: Some("Backend".to_string()),
            email: "ada@dev.io".to_string(),
            phone: None,
            experience: Some(4),
            programming_languages: vec!["rust".to_string(), "go".to_string()],
            bio: None,
            education: None,
            availability: Some("full-time".to_string()),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };

        let json =
            serde_json::to_value(PrincipalResponse::from(Principal::Employee(employee))).unwrap();

        assert_eq!(json["user_type"], "developer");
        assert_eq!(json["programming_languages"], serde_json::json!(["rust", "go"]));
        assert_eq!(json["experience"], 4);
        assert!(json.get("company_name").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn register_developer_request_defaults_languages() {
        let json = r#"{
            "email": "a@b.com",
            "password": "secret1",
            "first_name": "A",
            "last_name": "B"
        }"#;

        let request: RegisterDeveloperRequest = serde_json::from_str(json).unwrap();
        assert!(request.languages.is_empty());
        assert_eq!(request.experience, None);
    }
}

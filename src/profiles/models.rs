use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Compact employee representation for listings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
}

/// Full employee profile as shown to employers
/// Never includes the password hash
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeProfile {
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
}

/// Partial profile update; omitted fields keep their current values
///
/// The password is deliberately absent here: credentials never change
/// through profile edits.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 0))]
    pub experience: Option<i32>,
    pub programming_languages: Option<Vec<String>>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub availability: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_with_empty_body() {
        let request: UpdateEmployeeRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.first_name, None);
        assert_eq!(request.email, None);
        assert_eq!(request.programming_languages, None);
    }

    #[test]
    fn update_request_rejects_negative_experience() {
        let request: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"experience": -3}"#).unwrap();

        assert!(validator::Validate::validate(&request).is_err());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Represents a job posting in the database
///
/// `company_name` is copied from the posting employer; `employee_id` stays
/// empty until the position is filled.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Job {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Senior Backend Engineer")]
    pub title: String,
    #[schema(example = "Own the billing services end to end")]
    pub description: String,
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    #[schema(example = "Berlin")]
    pub location: String,
    /// Yearly salary
    #[schema(example = 72000)]
    pub salary: i32,
    /// Required experience in years
    #[schema(example = 3)]
    pub experience_required: i32,
    #[schema(example = "full-time")]
    pub job_type: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    #[schema(example = "open", pattern = "open|closed|filled")]
    pub job_status: String,
    pub employer_id: i32,
    pub employee_id: Option<i32>,
}

/// Represents the data needed to create a new job posting
///
/// The posting employer comes from the URL; deadline defaults to the posting
/// day and status defaults to "open" when omitted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Senior Backend Engineer")]
    pub title: String,
    #[validate(length(min = 1))]
    #[schema(example = "Own the billing services end to end")]
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Berlin")]
    pub location: String,
    /// Yearly salary, must be positive
    #[validate(range(min = 1))]
    #[schema(example = 72000)]
    pub salary: i32,
    /// Required experience in years
    #[validate(range(min = 0))]
    #[schema(example = 3)]
    pub experience_required: i32,
    #[schema(example = "full-time")]
    pub job_type: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    #[validate(custom = "crate::validation::validate_job_status")]
    #[schema(example = "open", pattern = "open|closed|filled")]
    pub job_status: Option<String>,
}

/// Response body for a created job posting
#[derive(Debug, Serialize, ToSchema)]
pub struct JobCreatedResponse {
    #[schema(example = "Job created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub job_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_job_request_minimal_body() {
        let json = r#"{
            "title": "Backend Engineer",
            "description": "Ship features",
            "location": "Remote",
            "salary": 60000,
            "experience_required": 2
        }"#;

        let request: CreateJobRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_type, None);
        assert_eq!(request.application_deadline, None);
        assert_eq!(request.job_status, None);
        assert!(validator::Validate::validate(&request).is_ok());
    }

    #[test]
    fn create_job_request_rejects_bad_values() {
        let json = r#"{
            "title": "",
            "description": "Ship features",
            "location": "Remote",
            "salary": -1,
            "experience_required": -2,
            "job_status": "archived"
        }"#;

        let request: CreateJobRequest = serde_json::from_str(json).unwrap();
        let errors = validator::Validate::validate(&request).unwrap_err();

        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("salary"));
        assert!(errors.field_errors().contains_key("experience_required"));
        assert!(errors.field_errors().contains_key("job_status"));
    }
}

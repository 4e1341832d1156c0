// Validation utilities module
// Provides custom validation functions for domain-specific rules

use validator::ValidationError;

/// Validates that an email has a plausible local@domain shape
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if validator::validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email_format"))
    }
}

/// Validates the minimum password length (6 characters)
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.len() >= 6 {
        Ok(())
    } else {
        Err(ValidationError::new("password_too_short"))
    }
}

/// Validates that a job status is one of the accepted values
/// Valid values: "open", "closed", "filled" (case-insensitive)
pub fn validate_job_status(status: &str) -> Result<(), ValidationError> {
    let valid_statuses = ["open", "closed", "filled"];
    if valid_statuses.contains(&status.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_job_status"))
    }
}

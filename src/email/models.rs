use serde::Deserialize;

/// Employer-to-employee email request DTO
#[derive(Debug, Deserialize)]
pub struct EmployerEmailRequest {
    pub employee_id: i32,
    pub subject: String,
    pub message: String,
}

/// Employee-to-employer email request DTO
///
/// Delivered to the employer's stored address; the sender cannot pick an
/// arbitrary recipient.
#[derive(Debug, Deserialize)]
pub struct EmployeeEmailRequest {
    pub employee_id: i32,
    pub employer_id: i32,
    pub subject: String,
    pub message: String,
}

// HTTP handlers for email notification endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db;
use crate::email::models::{EmployeeEmailRequest, EmployerEmailRequest};
use crate::error::ApiError;
use crate::models::MessageResponse;
use crate::AppState;

/// Look up an employee's address, 404 when absent
async fn employee_address(state: &AppState, employee_id: i32) -> Result<String, ApiError> {
    let email: Option<String> = sqlx::query_scalar("SELECT email FROM employees WHERE id = $1")
        .bind(employee_id)
        .fetch_optional(&state.db)
        .await?;

    email.ok_or_else(|| ApiError::NotFound {
        resource: "Employee".to_string(),
        id: employee_id.to_string(),
    })
}

/// Look up an employer's address, 404 when absent
async fn employer_address(state: &AppState, employer_id: i32) -> Result<String, ApiError> {
    let email: Option<String> = sqlx::query_scalar("SELECT email FROM employers WHERE id = $1")
        .bind(employer_id)
        .fetch_optional(&state.db)
        .await?;

    email.ok_or_else(|| ApiError::NotFound {
        resource: "Employer".to_string(),
        id: employer_id.to_string(),
    })
}

/// Delivery is fire-and-forget: log failures, never fail the request
async fn deliver(state: &AppState, to: &str, subject: &str, body: &str) {
    if let Err(e) = state.email_service.send(to, subject, body).await {
        tracing::warn!("Email delivery failed: {}", e);
    }
}

/// Handler for POST /api/employers/:id/email
/// Employer sends an email to an employee
pub async fn employer_send_email(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
    Json(request): Json<EmployerEmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::employer_exists(&state.db, employer_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employer".to_string(),
            id: employer_id.to_string(),
        });
    }

    let to = employee_address(&state, request.employee_id).await?;
    deliver(&state, &to, &request.subject, &request.message).await;

    Ok(Json(MessageResponse::new("Email sent successfully")))
}

/// Handler for POST /api/employees/email
/// Employee sends an email to an employer (delivered to the employer's
/// stored address)
pub async fn employee_send_email(
    State(state): State<AppState>,
    Json(request): Json<EmployeeEmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::employee_exists(&state.db, request.employee_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employee".to_string(),
            id: request.employee_id.to_string(),
        });
    }

    let to = employer_address(&state, request.employer_id).await?;
    deliver(&state, &to, &request.subject, &request.message).await;

    Ok(Json(MessageResponse::new("Email sent successfully")))
}

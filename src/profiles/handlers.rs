// HTTP handlers for employee profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::db;
use crate::error::ApiError;
use crate::models::MessageResponse;
use crate::profiles::models::{EmployeeProfile, EmployeeSummary, UpdateEmployeeRequest};
use crate::AppState;

const SUMMARY_QUERY: &str = "SELECT id, first_name, last_name, role FROM employees ORDER BY id";

const PROFILE_COLUMNS: &str = "id, first_name, last_name, role, email, phone, experience, \
     programming_languages, bio, education, availability";

/// Handler for GET /api/employees
/// Open listing of all employees in summary form
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeSummary>>, ApiError> {
    let employees = sqlx::query_as::<_, EmployeeSummary>(SUMMARY_QUERY)
        .fetch_all(&state.db)
        .await?;

    tracing::debug!("Retrieved {} employees", employees.len());
    Ok(Json(employees))
}

/// Handler for GET /api/employers/:id/employees
/// Same listing, but gated on the employer existing
pub async fn employer_list_employees(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
) -> Result<Json<Vec<EmployeeSummary>>, ApiError> {
    if !db::employer_exists(&state.db, employer_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employer".to_string(),
            id: employer_id.to_string(),
        });
    }

    let employees = sqlx::query_as::<_, EmployeeSummary>(SUMMARY_QUERY)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(employees))
}

/// Handler for GET /api/employers/:id/employees/:employee_id
/// Full employee profile for an employer
pub async fn view_employee_profile(
    State(state): State<AppState>,
    Path((employer_id, employee_id)): Path<(i32, i32)>,
) -> Result<Json<EmployeeProfile>, ApiError> {
    if !db::employer_exists(&state.db, employer_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employer".to_string(),
            id: employer_id.to_string(),
        });
    }

    let profile = sqlx::query_as::<_, EmployeeProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM employees WHERE id = $1"
    ))
    .bind(employee_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| ApiError::NotFound {
        resource: "Employee".to_string(),
        id: employee_id.to_string(),
    })?;

    Ok(Json(profile))
}

/// Handler for PUT /api/employees/:id
/// Partial profile update; omitted fields keep their current values
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::debug!("Updating employee profile with id: {}", employee_id);

    payload.validate()?;

    let existing = sqlx::query_as::<_, EmployeeProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM employees WHERE id = $1"
    ))
    .bind(employee_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| ApiError::NotFound {
        resource: "Employee".to_string(),
        id: employee_id.to_string(),
    })?;

    sqlx::query(
        r#"
        UPDATE employees
        SET first_name = $1,
            last_name = $2,
            role = $3,
            email = $4,
            phone = $5,
            experience = $6,
            programming_languages = $7,
            bio = $8,
            education = $9,
            availability = $10
        WHERE id = $11
        "#,
    )
    .bind(payload.first_name.unwrap_or(existing.first_name))
    .bind(payload.last_name.unwrap_or(existing.last_name))
    .bind(payload.role.or(existing.role))
    .bind(payload.email.unwrap_or(existing.email))
    .bind(payload.phone.or(existing.phone))
    .bind(payload.experience.or(existing.experience))
    .bind(
        payload
            .programming_languages
            .unwrap_or(existing.programming_languages),
    )
    .bind(payload.bio.or(existing.bio))
    .bind(payload.education.or(existing.education))
    .bind(payload.availability.or(existing.availability))
    .bind(employee_id)
    .execute(&state.db)
    .await
    .map_err(|e| {
        // An email edit can collide with another account
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return ApiError::Conflict {
                    message: "Email already registered".to_string(),
                };
            }
        }
        ApiError::DatabaseError(e)
    })?;

    tracing::info!("Successfully updated employee profile with id: {}", employee_id);
    Ok(Json(MessageResponse::new(
        "Employee profile updated successfully",
    )))
}

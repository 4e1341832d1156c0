// HTTP handlers for employer favorites

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db;
use crate::error::ApiError;
use crate::models::MessageResponse;
use crate::profiles::models::EmployeeSummary;
use crate::AppState;

/// Both parties must exist before touching the favorites table
async fn ensure_pair_exists(
    state: &AppState,
    employer_id: i32,
    employee_id: i32,
) -> Result<(), ApiError> {
    if !db::employer_exists(&state.db, employer_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employer".to_string(),
            id: employer_id.to_string(),
        });
    }
    if !db::employee_exists(&state.db, employee_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employee".to_string(),
            id: employee_id.to_string(),
        });
    }
    Ok(())
}

/// Handler for POST /api/employers/:id/favorites/:employee_id
/// Adds an employee to an employer's favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((employer_id, employee_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ApiError> {
    ensure_pair_exists(&state, employer_id, employee_id).await?;

    sqlx::query("INSERT INTO favorites (employer_id, employee_id) VALUES ($1, $2)")
        .bind(employer_id)
        .bind(employee_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return ApiError::Conflict {
                        message: "Employee already in favorites".to_string(),
                    };
                }
            }
            ApiError::DatabaseError(e)
        })?;

    tracing::info!(
        "Employer {} added employee {} to favorites",
        employer_id,
        employee_id
    );
    Ok(Json(MessageResponse::new("Employee added to favorites")))
}

/// Handler for DELETE /api/employers/:id/favorites/:employee_id
/// Removes an employee from an employer's favorites
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((employer_id, employee_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, ApiError> {
    ensure_pair_exists(&state, employer_id, employee_id).await?;

    let result = sqlx::query("DELETE FROM favorites WHERE employer_id = $1 AND employee_id = $2")
        .bind(employer_id)
        .bind(employee_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound {
            resource: "Favorite".to_string(),
            id: employee_id.to_string(),
        });
    }

    tracing::info!(
        "Employer {} removed employee {} from favorites",
        employer_id,
        employee_id
    );
    Ok(Json(MessageResponse::new("Employee removed from favorites")))
}

/// Handler for GET /api/employers/:id/favorites
/// Lists an employer's favorited employees
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
) -> Result<Json<Vec<EmployeeSummary>>, ApiError> {
    if !db::employer_exists(&state.db, employer_id).await? {
        return Err(ApiError::NotFound {
            resource: "Employer".to_string(),
            id: employer_id.to_string(),
        });
    }

    let favorites = sqlx::query_as::<_, EmployeeSummary>(
        r#"
        SELECT e.id, e.first_name, e.last_name, e.role
        FROM favorites f
        JOIN employees e ON e.id = f.employee_id
        WHERE f.employer_id = $1
        ORDER BY f.created_at
        "#,
    )
    .bind(employer_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(favorites))
}

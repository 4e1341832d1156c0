// HTTP handlers for job posting endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::ApiError;
use crate::jobs::models::{CreateJobRequest, Job, JobCreatedResponse};
use crate::AppState;

/// Handler for GET /api/jobs
/// Retrieves all job postings
#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "List of all job postings", body = Vec<Job>),
        (status = 500, description = "Internal server error")
    ),
    tag = "jobs"
)]
pub async fn get_all_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    tracing::debug!("Fetching all job postings");

    let jobs = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, title, description, company_name, location, salary,
               experience_required, job_type, application_deadline, job_status,
               employer_id, employee_id
        FROM jobs
        ORDER BY id
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    tracing::debug!("Retrieved {} job postings", jobs.len());
    Ok(Json(jobs))
}

/// Handler for POST /api/employers/:id/jobs
/// Creates a job posting on behalf of an employer
#[utoipa::path(
    post,
    path = "/api/employers/{id}/jobs",
    params(
        ("id" = i32, Path, description = "Employer ID")
    ),
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created successfully", body = JobCreatedResponse),
        (status = 400, description = "Invalid input data"),
        (status = 404, description = "Employer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobCreatedResponse>), ApiError> {
    tracing::debug!("Creating job '{}' for employer {}", payload.title, employer_id);

    // Validate the request using validator crate
    payload.validate()?;

    // The posting carries the employer's company name
    let company_name: Option<String> =
        sqlx::query_scalar("SELECT company_name FROM employers WHERE id = $1")
            .bind(employer_id)
            .fetch_optional(&state.db)
            .await?;

    let company_name = company_name.ok_or_else(|| ApiError::NotFound {
        resource: "Employer".to_string(),
        id: employer_id.to_string(),
    })?;

    let application_deadline = payload
        .application_deadline
        .unwrap_or_else(|| Utc::now().date_naive());
    let job_status = payload.job_status.unwrap_or_else(|| "open".to_string());

    let job_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO jobs (title, description, company_name, location, salary,
                          experience_required, job_type, application_deadline,
                          job_status, employer_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&company_name)
    .bind(&payload.location)
    .bind(payload.salary)
    .bind(payload.experience_required)
    .bind(&payload.job_type)
    .bind(application_deadline)
    .bind(&job_status)
    .bind(employer_id)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Successfully created job with id: {}", job_id);
    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            message: "Job created successfully".to_string(),
            job_id,
        }),
    ))
}

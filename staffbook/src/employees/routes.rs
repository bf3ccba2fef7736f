use super::dto::{EmployeeCreate, EmployeeOutput, EmployeePatch, EmployeeUpdate};
use super::repository::EmployeeRepository;
use super::service::EmployeeService;
use crate::errors::{ApiError, ErrorResponse};
use crate::extract::{ValidJson, ValidPath};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Repository handle stored in router state.
pub type DynEmployeeRepository = Arc<dyn EmployeeRepository>;

/// Shared state of the employee routes.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService<DynEmployeeRepository>>,
}

impl AppState {
    #[must_use]
    pub fn new(service: EmployeeService<DynEmployeeRepository>) -> Self {
        Self {
            employees: Arc::new(service),
        }
    }
}

/// Employee endpoints, to be nested under `/api/employee`.
pub fn router(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_all, create))
        .routes(routes!(update, patch, delete))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = StatusCode::OK, description = "Every employee", body = [EmployeeOutput]),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "employee",
    operation_id = "get_all_employees",
    summary = "Get all employees"
)]
pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeOutput>>, ApiError> {
    Ok(Json(state.employees.all_employees().await?))
}

#[utoipa::path(
    post,
    path = "/",
    request_body = EmployeeCreate,
    responses(
        (status = StatusCode::CREATED, description = "Employee created", body = EmployeeOutput),
        (status = StatusCode::BAD_REQUEST, description = "Validation failed or malformed JSON", body = ErrorResponse),
        (status = StatusCode::CONFLICT, description = "Email already exists", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "employee",
    operation_id = "create_employee",
    summary = "Create an employee"
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<EmployeeCreate>,
) -> Result<(StatusCode, Json<EmployeeOutput>), ApiError> {
    let created = state.employees.add_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = i32, Path, description = "Employee id, must match the body")),
    request_body = EmployeeUpdate,
    responses(
        (status = StatusCode::NO_CONTENT, description = "Employee replaced"),
        (status = StatusCode::BAD_REQUEST, description = "Validation failed, malformed JSON or id mismatch", body = ErrorResponse),
        (status = StatusCode::NOT_FOUND, description = "Employee not found or id is not an integer", body = ErrorResponse),
        (status = StatusCode::CONFLICT, description = "Email already exists", body = ErrorResponse)
    ),
    tag = "employee",
    operation_id = "update_employee",
    summary = "Replace an employee"
)]
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<EmployeeUpdate>,
) -> Result<StatusCode, ApiError> {
    state.employees.update_employee(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/{id}",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = EmployeePatch,
    responses(
        (status = StatusCode::NO_CONTENT, description = "Employee updated"),
        (status = StatusCode::BAD_REQUEST, description = "Validation failed or malformed JSON", body = ErrorResponse),
        (status = StatusCode::NOT_FOUND, description = "Employee not found or id is not an integer", body = ErrorResponse),
        (status = StatusCode::CONFLICT, description = "Email already exists", body = ErrorResponse)
    ),
    tag = "employee",
    operation_id = "patch_employee",
    summary = "Update some fields of an employee"
)]
pub async fn patch(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<EmployeePatch>,
) -> Result<StatusCode, ApiError> {
    state.employees.update_employee_partial(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = StatusCode::NO_CONTENT, description = "Employee deleted"),
        (status = StatusCode::NOT_FOUND, description = "Employee not found or id is not an integer", body = ErrorResponse)
    ),
    tag = "employee",
    operation_id = "delete_employee",
    summary = "Delete an employee"
)]
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

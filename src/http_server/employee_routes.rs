//! Employee HTTP Routes
//!
//! CRUD endpoints over the employee service. This layer only extracts and
//! shapes; all validation and invariant enforcement lives in the service.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::errors::ApiResult;
use crate::service::{EmployeeService, EmployeeUpdate, NewEmployee};
use crate::store::Employee;

// ==================
// Shared State
// ==================

/// State shared across employee handlers
pub struct EmployeeState {
    pub service: EmployeeService,
}

pub fn employee_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

// ==================
// Response Types
// ==================

/// Body for DELETE: the removed record echoed back for confirmation display
#[derive(Debug, Serialize)]
pub struct DeleteEmployeeResponse {
    pub message: String,
    #[serde(rename = "deletedEmployee")]
    pub deleted_employee: Employee,
}

// ==================
// Handlers
// ==================

async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.service.list()?))
}

async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.service.get(id)?))
}

async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    Json(input): Json<NewEmployee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let created = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<u64>,
    Json(input): Json<EmployeeUpdate>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.service.update(id, input).await?))
}

async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteEmployeeResponse>> {
    let deleted = state.service.delete(id).await?;
    Ok(Json(DeleteEmployeeResponse {
        message: "Employee deleted".to_string(),
        deleted_employee: deleted,
    }))
}

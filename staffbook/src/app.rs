//! Router assembly shared by the binary and the integration tests.

use crate::employees::{
    AppState, DynEmployeeRepository, EmployeeService, SeaOrmEmployeeRepository, routes,
};
use crate::errors::{ApiError, ErrorResponse};
use crate::mapping::Mapper;
use axum::Router;
use axum::response::{IntoResponse, Response};
use sea_orm::DatabaseConnection;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

#[derive(OpenApi)]
#[openapi(
    info(title = "staffbook", description = "Employee CRUD API"),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

/// State backed by `db`, with a fresh mapper.
#[must_use]
pub fn state(db: DatabaseConnection) -> AppState {
    let repository: DynEmployeeRepository = Arc::new(SeaOrmEmployeeRepository::new(db));
    AppState::new(EmployeeService::new(repository, Arc::new(Mapper::new())))
}

/// API routes and their OpenAPI document.
///
/// A panicking handler answers 500 with the usual error body.
pub fn router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/employee", routes::router(state))
        .split_for_parts();
    (router.layer(CatchPanicLayer::custom(panic_response)), api)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::from_panic(payload.as_ref()).into_response()
}

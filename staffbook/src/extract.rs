//! Request extractors that reject with [`ApiError`] instead of axum's plain-text bodies.

use crate::errors::ApiError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, OriginalUri, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};

/// `Json<T>` whose rejections use the API error body.
///
/// - unparsable JSON, or JSON of the wrong shape → 400 `Malformed JSON.`
/// - missing `Content-Type: application/json` or an unreadable body → 400 `Invalid request.`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            ApiError::malformed_body(rejection.body_text())
        }
        _ => ApiError::invalid_request(rejection.body_text()),
    }
}

/// `Path<T>` whose rejections use the API error body.
///
/// A segment that does not parse as `T` answers 404, the same as a path no
/// route matches. Any other rejection is a routing bug and answers 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or_else(|| parts.uri.path(), |original| original.path())
                    .to_string();
                Err(path_rejection_to_error(&rejection, path))
            }
        }
    }
}

fn path_rejection_to_error(rejection: &PathRejection, path: String) -> ApiError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            tracing::debug!(
                path = %path,
                details = %rejection.body_text(),
                "Path parameter does not match the route"
            );
            ApiError::not_found("Route", Some(path))
        }
        _ => ApiError::internal(Some(rejection.body_text())),
    }
}

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::directory::DirectoryError;
use crate::models::Activity;

use super::AppState;

/// Directory errors map straight onto the API contract:
/// unknown activity → 404, roster precondition failures → 400,
/// both with a human-readable `detail` body.
impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp | DirectoryError::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterParams {
    pub(crate) email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

pub(crate) async fn get_activities(
    State(state): State<AppState>,
) -> Json<HashMap<String, Activity>> {
    Json(state.directory.list())
}

pub(crate) async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RosterParams>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    match state.directory.signup(&name, &params.email) {
        Ok(()) => {
            info!("Signed up {} for {}", params.email, name);
            Ok(Json(MessageResponse {
                message: format!("Signed up {} for {}", params.email, name),
            }))
        }
        Err(e) => {
            warn!("Signup of {} for '{}' rejected: {}", params.email, name, e);
            Err(e)
        }
    }
}

pub(crate) async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RosterParams>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    match state.directory.unregister(&name, &params.email) {
        Ok(()) => {
            info!("Unregistered {} from {}", params.email, name);
            Ok(Json(MessageResponse {
                message: format!("Unregistered {} from {}", params.email, name),
            }))
        }
        Err(e) => {
            warn!(
                "Unregister of {} from '{}' rejected: {}",
                params.email, name, e
            );
            Err(e)
        }
    }
}

//! REST API endpoint handlers for the activities server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the front-end page |
//! | `GET` | `/activities` | List all activities with their rosters |
//! | `POST` | `/activities/{activity_name}/signup?email=` | Sign a student up |
//! | `DELETE` | `/activities/{activity_name}/unregister?email=` | Unregister a student |

use std::sync::Arc;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use mergington_roster::RosterError;
use mergington_types::{ActivityMap, MessageResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Location of the front-end entry page.
pub const INDEX_PATH: &str = "/static/index.html";

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters shared by signup and unregister.
#[derive(Debug, serde::Deserialize)]
pub struct EmailQuery {
    /// The student's email. Treated as an opaque identifier.
    pub email: String,
}

/// Stand-in name for a path segment that is not valid UTF-8. No activity
/// can carry it, so the lookup reports "Activity not found".
const UNDECODABLE_NAME: &str = "\u{FFFD}";

fn activity_name_from(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(PathRejection::FailedToDeserializePathParams(err))
            if matches!(err.kind(), ErrorKind::InvalidUtf8InPathParam { .. }) =>
        {
            Err(RosterError::NotFound(UNDECODABLE_NAME.to_owned()).into())
        }
        Err(rejection) => Err(ApiError::InvalidPath(rejection.body_text())),
    }
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(q)| q.email)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Redirect the site root to the static front-end page (307).
pub async fn index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

// ---------------------------------------------------------------------------
// GET /activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name.
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityMap> {
    Json(state.roster.list_activities().await)
}

// ---------------------------------------------------------------------------
// POST /activities/{activity_name}/signup
// ---------------------------------------------------------------------------

/// Sign a student up for an activity.
///
/// Returns 404 if the activity does not exist (including names that are
/// not valid UTF-8), 400 if the student is already signed up or the
/// activity is full, and 422 if `email` is missing from the query string.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name_from(path)?;
    let email = email_from(query)?;
    let enrollment = state.roster.join(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(enrollment.to_string())))
}

// ---------------------------------------------------------------------------
// DELETE /activities/{activity_name}/unregister
// ---------------------------------------------------------------------------

/// Remove a student from an activity.
///
/// Returns 404 if the activity does not exist (including names that are
/// not valid UTF-8), 400 if the student is not on its roster, and 422 if
/// `email` is missing from the query string.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name_from(path)?;
    let email = email_from(query)?;
    let enrollment = state.roster.leave(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(enrollment.to_string())))
}

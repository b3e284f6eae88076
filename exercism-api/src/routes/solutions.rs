/// Solution endpoint
///
/// ```text
/// GET /v1/solutions/:uuid
/// Authorization: Bearer <token>
/// ```
///
/// A malformed UUID is a 400 `bad_request`.
///
/// ```json
/// {
///   "solution": {
///     "id": "…",
///     "url": "https://exercism.io/my/solutions/…",
///     "owner": { "handle": "alice", "is_requester": true },
///     "exercise": {
///       "id": "two-fer",
///       "instructions_url": "https://exercism.io/my/solutions/…",
///       "track": { "id": "ruby" }
///     },
///     "files": [],
///     "iteration": { "submitted_at": "2024-01-01T00:00:00Z" }
///   }
/// }
/// ```

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension, Json,
};
use chrono::Utc;
use exercism_shared::auth::Requester;
use exercism_shared::responders::solution::{SolutionEnvelope, SolutionResponder};
use uuid::Uuid;

pub async fn show_solution(
    State(state): State<AppState>,
    Extension(requester): Extension<Requester>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<SolutionEnvelope>> {
    let Path(uuid) = path?;

    let snapshot = state.store.load_solution(uuid).await?.ok_or_else(|| {
        tracing::warn!(solution_id = %uuid, "Solution not found");
        ApiError::NotFound("Solution not found".to_string())
    })?;

    let solution = SolutionResponder::new(&snapshot, &requester, state.routes.as_ref())
        .render(Utc::now())?;

    Ok(Json(SolutionEnvelope { solution }))
}

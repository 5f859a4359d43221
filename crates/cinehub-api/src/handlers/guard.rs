//! Guard decision endpoints.

use axum::Json;
use axum::extract::State;

use cinehub_entity::decision::GuardOutcome;
use cinehub_guard::menu::first_reachable_route;
use cinehub_guard::orchestrator::NavigationState;

use crate::dto::request::{DecideRequest, ResetRequest};
use crate::dto::response::{ApiResponse, LandingResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// `POST /api/guard/decide` — evaluate one navigation event.
pub async fn decide(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Json(request): Json<DecideRequest>,
) -> Result<Json<ApiResponse<GuardOutcome>>, ApiError> {
    let nav = NavigationState {
        path: request.path,
        query: request.query,
        has_token: auth.token_present,
        is_authenticated: request.is_authenticated,
        is_logged_out: request.is_logged_out,
        profile_loading: request.profile_loading,
    };

    let outcome = state
        .orchestrator
        .decide(&request.client_id, &nav, auth.user.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(outcome)))
}

/// `POST /api/guard/reset` — logout notification; forgets the client's
/// guard state and remembered return path.
pub async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.orchestrator.reset_client(&request.client_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Client state cleared".to_string(),
    })))
}

/// `GET /api/guard/landing` — where the caller should land after login.
pub async fn landing(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
) -> Result<Json<ApiResponse<LandingResponse>>, ApiError> {
    let target = first_reachable_route(state.orchestrator.menu(), auth.held_codes())
        .unwrap_or_else(|| state.config.guard.default_landing.clone());

    Ok(Json(ApiResponse::ok(LandingResponse { target })))
}

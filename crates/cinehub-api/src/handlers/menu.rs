//! Sidebar menu endpoint.

use axum::Json;
use axum::extract::State;

use cinehub_entity::menu::MenuNode;
use cinehub_guard::menu::filter_menu;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// `GET /api/menu` — the sidebar tree pruned to what the caller may see.
pub async fn visible_menu(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
) -> Result<Json<ApiResponse<Vec<MenuNode>>>, ApiError> {
    let filtered = filter_menu(state.orchestrator.menu(), auth.held_codes());
    Ok(Json(ApiResponse::ok(filtered)))
}

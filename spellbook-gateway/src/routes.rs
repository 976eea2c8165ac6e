//! Axum route handlers for the spellbook gateway API.

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use spellbook_core::{brew_potion, cast_spell};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ── Response types ────────────────────────────────────────────────────────────

/// Result returned by the `/spell/{spell_name}` endpoint.
#[derive(Debug, Serialize)]
pub struct SpellResponse {
    /// The spell name exactly as the caller sent it.
    pub spell: String,
    pub effect: &'static str,
}

/// Result returned by the `/potion/{potion_type}` endpoint.
#[derive(Debug, Serialize)]
pub struct PotionResponse {
    /// The potion type exactly as the caller sent it.
    pub potion: String,
    pub ingredients: &'static [&'static str],
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/spell/{spell_name}", get(cast))
        .route("/potion/{potion_type}", get(brew))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({"status": "healthy", "magic_level": "maximum"})),
    )
}

/// `GET /` — welcome banner.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to Dockerfire Wizardry!",
        "tip": "Check out the Dockerfile to learn security best practices"
    }))
}

/// `GET /spell/:spell_name` — cast a spell by name.
///
/// Always returns 200: unknown names fall back to the unknown-spell effect
/// rather than a 404. The echoed `spell` field keeps the caller's casing.
pub async fn cast(Path(spell_name): Path<String>) -> impl IntoResponse {
    let effect = cast_spell(&spell_name);
    Json(SpellResponse { spell: spell_name, effect })
}

/// `GET /potion/:potion_type` — brew a potion by type.
///
/// Always returns 200: unknown types fall back to the failure recipe.
pub async fn brew(Path(potion_type): Path<String>) -> impl IntoResponse {
    let ingredients = brew_potion(&potion_type);
    Json(PotionResponse { potion: potion_type, ingredients })
}

//! Route definitions for review analyses.
//!
//! Mounted at `/analyses`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::analyses;
use crate::state::AppState;

/// Routes mounted at `/analyses`.
///
/// ```text
/// POST   /                 -> create_analysis      (multipart CSV upload)
/// POST   /demo             -> create_demo_analysis
/// GET    /{id}             -> get_analysis
/// GET    /{id}/summary     -> get_summary
/// GET    /{id}/reviews     -> get_reviews
/// GET    /{id}/emotions    -> get_emotions
/// GET    /{id}/wordcloud   -> get_wordcloud        (?limit=N)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(analyses::create_analysis))
        .route("/demo", post(analyses::create_demo_analysis))
        .route("/{id}", get(analyses::get_analysis))
        .route("/{id}/summary", get(analyses::get_summary))
        .route("/{id}/reviews", get(analyses::get_reviews))
        .route("/{id}/emotions", get(analyses::get_emotions))
        .route("/{id}/wordcloud", get(analyses::get_wordcloud))
}

pub mod analyses;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analyses                    create from CSV upload (POST, multipart)
/// /analyses/demo               create from the demo dataset (POST)
/// /analyses/{id}               session overview
/// /analyses/{id}/summary       aggregate summary
/// /analyses/{id}/reviews       annotated records
/// /analyses/{id}/emotions      emotion distribution
/// /analyses/{id}/wordcloud     negative-review word frequencies
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/analyses", analyses::router())
}

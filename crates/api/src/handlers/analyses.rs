//! Handlers for review analyses.
//!
//! An analysis is created from a CSV upload (multipart) or the built-in
//! demo dataset, annotated once on a blocking task, stored as an immutable
//! session, and then served through read-only views: overview, summary,
//! annotated reviews, emotion distribution, and word-cloud frequencies.

use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use review_pulse_core::aggregate::{emotion_counts, summarize, AggregateSummary, EmotionCount};
use review_pulse_core::annotate::{annotate, AnnotationReport};
use review_pulse_core::dataset::{Dataset, ReviewRecord};
use review_pulse_core::demo::demo_dataset;
use review_pulse_core::error::CoreError;
use review_pulse_core::normalize::normalize;
use review_pulse_core::table::RawTable;
use review_pulse_core::wordcloud::{negative_corpus, word_frequencies, WordCount, DEFAULT_WORD_LIMIT};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::sessions::AnalysisSession;
use crate::state::{AppState, ReachableClassifier};

/// Source name recorded for demo-seeded sessions.
pub const DEMO_SOURCE_NAME: &str = "demo";

// ── Response types ───────────────────────────────────────────────────

/// Session overview returned by creation and `GET /{id}`.
#[derive(Debug, Serialize)]
pub struct AnalysisOverview {
    pub id: Uuid,
    pub source_name: String,
    pub record_count: usize,
    pub analyzed_at: DateTime<Utc>,
    pub report: AnnotationReport,
    /// `None` when the dataset has zero records; the summary is suppressed
    /// rather than surfaced as an error here.
    pub summary: Option<AggregateSummary>,
}

impl AnalysisOverview {
    fn from_session(session: &AnalysisSession) -> Self {
        let summary = match summarize(&session.dataset) {
            Ok(summary) => Some(summary),
            Err(CoreError::EmptyDataset) => None,
            Err(e) => {
                // Sessions are annotated before storage, so this is a bug.
                tracing::warn!(session_id = %session.id, error = %e, "Stored session failed to summarize");
                None
            }
        };

        Self {
            id: session.id,
            source_name: session.source_name.clone(),
            record_count: session.dataset.len(),
            analyzed_at: session.analyzed_at,
            report: session.report,
            summary,
        }
    }
}

// ── Create ───────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Accept a multipart upload with a `file` field holding CSV bytes, run the
/// full pipeline (parse, normalize, annotate), and store the session.
pub async fn create_analysis(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<AnalysisOverview>>)> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let source_name = field.file_name().unwrap_or("upload.csv").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((source_name, bytes));
        break;
    }

    let Some((source_name, bytes)) = upload else {
        return Err(AppError::BadRequest(
            "Multipart upload must contain a 'file' field".to_string(),
        ));
    };

    let table = RawTable::from_csv_bytes(&bytes)?;
    let dataset = normalize(&table)?;
    tracing::info!(source = %source_name, rows = dataset.len(), "Normalized uploaded CSV");

    store_analysis(&state, source_name, dataset).await
}

/// POST /api/v1/analyses/demo
///
/// Seed an analysis from the fixed demo dataset. The demo data is already
/// canonical, so normalization is skipped.
pub async fn create_demo_analysis(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<AnalysisOverview>>)> {
    store_analysis(&state, DEMO_SOURCE_NAME, demo_dataset()).await
}

/// Annotate a dataset off the async runtime, store the session, and build
/// the `201 Created` response.
async fn store_analysis(
    state: &AppState,
    source_name: impl Into<String>,
    mut dataset: Dataset,
) -> AppResult<(StatusCode, Json<DataResponse<AnalysisOverview>>)> {
    let classifier: Arc<dyn ReachableClassifier> = Arc::clone(&state.classifier);

    // Classifier calls are synchronous and may take a while for large
    // batches; keep them off the async runtime.
    let (dataset, report) = tokio::task::spawn_blocking(move || {
        let report = annotate(&mut dataset, classifier.as_ref());
        (dataset, report)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Annotation task failed: {e}")))?;

    tracing::info!(
        newly_annotated = report.newly_annotated,
        classifier_failures = report.classifier_failures,
        "Annotation pass complete"
    );

    let session = state
        .sessions
        .insert(AnalysisSession::new(source_name, dataset, report))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AnalysisOverview::from_session(&session),
        }),
    ))
}

// ── Read views ───────────────────────────────────────────────────────

/// GET /api/v1/analyses/{id}
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<AnalysisOverview>>> {
    let session = fetch_session(&state, id).await?;
    Ok(Json(DataResponse {
        data: AnalysisOverview::from_session(&session),
    }))
}

/// GET /api/v1/analyses/{id}/summary
///
/// Unlike the overview, an empty dataset surfaces here as an error.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<AggregateSummary>>> {
    let session = fetch_session(&state, id).await?;
    let summary = summarize(&session.dataset)?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/analyses/{id}/reviews
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<Vec<ReviewRecord>>>> {
    let session = fetch_session(&state, id).await?;
    Ok(Json(DataResponse {
        data: session.dataset.records.clone(),
    }))
}

/// GET /api/v1/analyses/{id}/emotions
pub async fn get_emotions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<Vec<EmotionCount>>>> {
    let session = fetch_session(&state, id).await?;
    Ok(Json(DataResponse {
        data: emotion_counts(&session.dataset),
    }))
}

/// Query parameters for the word-cloud endpoint.
#[derive(Debug, Deserialize)]
pub struct WordcloudParams {
    pub limit: Option<usize>,
}

/// GET /api/v1/analyses/{id}/wordcloud?limit=N
///
/// Token frequencies over the text of negative-labeled reviews.
pub async fn get_wordcloud(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<WordcloudParams>,
) -> AppResult<Json<DataResponse<Vec<WordCount>>>> {
    let session = fetch_session(&state, id).await?;
    let limit = params.limit.unwrap_or(DEFAULT_WORD_LIMIT);
    let corpus = negative_corpus(&session.dataset);
    Ok(Json(DataResponse {
        data: word_frequencies(&corpus, limit),
    }))
}

async fn fetch_session(state: &AppState, id: Uuid) -> AppResult<Arc<AnalysisSession>> {
    state.sessions.get(id).await.ok_or(AppError::NotFound {
        entity: "Analysis",
        id: id.to_string(),
    })
}

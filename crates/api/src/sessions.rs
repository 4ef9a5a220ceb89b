//! In-memory analysis sessions.
//!
//! A session is created once per upload (or demo run) after the batch has
//! been annotated, then served read-only. Nothing is persisted; restarting
//! the server discards all sessions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use review_pulse_core::annotate::AnnotationReport;
use review_pulse_core::dataset::Dataset;

/// One completed analysis: the annotated dataset plus its provenance.
/// Immutable once stored.
#[derive(Debug)]
pub struct AnalysisSession {
    pub id: Uuid,
    /// Where the data came from: the uploaded file name, or `"demo"`.
    pub source_name: String,
    pub dataset: Dataset,
    pub report: AnnotationReport,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisSession {
    /// Create a session with a fresh id, stamped now.
    pub fn new(source_name: impl Into<String>, dataset: Dataset, report: AnnotationReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_name: source_name.into(),
            dataset,
            report,
            analyzed_at: Utc::now(),
        }
    }
}

/// Concurrent map of sessions by id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<AnalysisSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and hand back a shared handle to it.
    pub async fn insert(&self, session: AnalysisSession) -> Arc<AnalysisSession> {
        let session = Arc::new(session);
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<AnalysisSession>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

// ── Tests ────────────────────────────────────────────────────────────

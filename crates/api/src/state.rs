use std::sync::Arc;

use review_pulse_core::classifier::ClassifierBackend;
use review_pulse_nlp::client::SidecarClient;

use crate::config::ServerConfig;
use crate::sessions::SessionStore;

/// A classifier backend the health endpoint can also probe for liveness.
///
/// The pipeline only needs [`ClassifierBackend`]; the service additionally
/// reports whether the backing model service currently answers.
pub trait ReachableClassifier: ClassifierBackend {
    /// Whether the backing service currently answers.
    fn is_reachable(&self) -> bool;
}

impl ReachableClassifier for SidecarClient {
    fn is_reachable(&self) -> bool {
        self.ping().is_ok()
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Injected classifier capability set (sidecar client in production,
    /// scripted stubs in tests).
    pub classifier: Arc<dyn ReachableClassifier>,
    /// In-memory store of completed analysis sessions.
    pub sessions: Arc<SessionStore>,
}

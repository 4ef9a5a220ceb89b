#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Ingestion failed: {0}")]
    Ingestion(String),

    #[error("Dataset has no records")]
    EmptyDataset,

    #[error("Record {index} has not been annotated")]
    NotAnnotated { index: usize },
}

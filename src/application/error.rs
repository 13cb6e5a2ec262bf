#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to load catalog: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to save catalog: {0}")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}

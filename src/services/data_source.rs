use crate::domain::series::ResultsPayload;
use crate::domain::study::StudyConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// Describes an interface for running a configured study against a
/// modeling service and retrieving the decoded simulation results.
#[async_trait::async_trait]
pub trait ResultSource {
    async fn fetch_results(&self, study: &StudyConfig) -> Result<ResultsPayload, DataSourceError>;
}

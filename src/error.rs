use thiserror::Error;

/// Failures raised by the analysis core.
///
/// Numeric degeneracies (e.g. a window with no losses for RSI) are handled
/// where they occur and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

use thiserror::Error;

/// Errors raised while configuring or rendering the demonstration run.
///
/// The domain model itself never fails with an error value; the only
/// fallible constructor (`StockMarketApp::new`) yields `None` instead.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid output format '{value}', expected one of text, json")]
    InvalidFormat { value: String },

    #[error("invalid log level '{value}', expected one of debug, info, warn, error")]
    InvalidLogLevel { value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("window unavailable")]
    WindowMissing,
    #[error("document unavailable")]
    DocumentMissing,
    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Airtable {status}: {body}")]
    SourceFetch { status: StatusCode, body: String },

    #[error("Attachment {status}: {url}")]
    AttachmentFetch { status: StatusCode, url: String },

    #[error("{failed} record(s) failed to normalize; first error: {source}")]
    Normalize {
        failed: usize,
        #[source]
        source: Box<SyncError>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "async")]
    #[error("Task join error: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;

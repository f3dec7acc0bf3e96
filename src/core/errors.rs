use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Backend returned {status} for {url}")]
    BackendStatus { status: u16, url: String },
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(error: reqwest::Error) -> Self {
        DashboardError::Reqwest(Box::new(error))
    }
}

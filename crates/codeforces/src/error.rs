use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodeforcesError>;

#[derive(Error, Debug)]
pub enum CodeforcesError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Codeforces API rejected the request: {0}")]
    Api(String),
}

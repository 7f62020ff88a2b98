#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid weather data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    Provider(#[from] rchat_provider::error::Error),

    #[error("Tool error: {0}")]
    Tool(#[from] rchat_tools::error::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] std::io::Error),
}

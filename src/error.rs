use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid backend URL '{url}': {reason}\n\nSet [server] base_url in ~/.config/notifyme/config.toml or pass --base-url")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Failed to initialise HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

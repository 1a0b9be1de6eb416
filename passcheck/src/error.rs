#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching range {prefix}: HTTP {status}, check the api and try again")]
    HttpStatus { prefix: String, status: u16 },

    #[error("Invalid range prefix '{prefix}': expected 5 uppercase hex characters")]
    InvalidPrefix { prefix: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please provide at least one password as an argument!")]
    NoPasswords,
}

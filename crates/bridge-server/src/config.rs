use clap::Parser;

const DEFAULT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// Runtime settings for the session API, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "bridge-server", version, about = "HTTP API for the bidding tutor")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "BIDTUTOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "BIDTUTOR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Browser origins allowed to call the API (comma separated)
    #[arg(
        long = "allowed-origin",
        env = "BIDTUTOR_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Configured origins that look like http(s) URLs, or the localhost set if none do.
    pub fn effective_origins(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .allowed_origins
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(|s| s.to_string())
            .collect();

        if origins.is_empty() {
            DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            origins
        }
    }
}

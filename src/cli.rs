use clap::Parser;

/// `kvscope` - a terminal browser for key-value stores served over HTTP
#[derive(Parser, Debug)]
#[command(name = "kvscope", version, about)]
pub struct Cli {
    /// Base URL of the store API
    /// Example: http://localhost:8080
    #[arg(short = 'u', long, env = "KVSCOPE_URL", default_value = "http://localhost:8080")]
    pub url: String,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Debounce window for search input in milliseconds (overrides config file)
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

impl Cli {
    /// Base URL normalized without a trailing slash, so endpoint paths can be
    /// appended directly.
    pub fn base_url(&self) -> String {
        self.url.trim_end_matches('/').to_string()
    }
}

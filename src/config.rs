use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port to bind to
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// TensorFlow Serving predict URL to forward inference requests to
    #[arg(
        long,
        env = "SERVING_ENDPOINT",
        default_value = "http://localhost:8501/v1/models/tomatoes_model:predict"
    )]
    pub serving_endpoint: String,
}

impl Config {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

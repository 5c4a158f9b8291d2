use serde::Deserialize;

fn default_catalog_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration options for the Vitrina server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the remote product catalog.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from an optional `config.yaml` in the working
    /// directory, with `VITRINA_*` environment variables taking precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("VITRINA"))
            .build()?
            .try_deserialize()
    }
}

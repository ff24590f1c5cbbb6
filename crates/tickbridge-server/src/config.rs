use std::env;

/// Startup configuration. Read once from the environment and passed down
/// explicitly; no process-wide mutable globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory served for non-API paths (the dashboard UI).
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| String::from("0.0.0.0")),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8787),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| String::from("public")),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

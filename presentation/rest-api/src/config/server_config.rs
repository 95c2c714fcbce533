use std::env;

/// HTTP listener settings
///
/// Environment variables:
/// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
/// - SERVICE_PORT: Port to bind (default: 8080)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_port(env::var("SERVICE_PORT").ok()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    const DEFAULT_PORT: u16 = 8080;

    match raw.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid SERVICE_PORT {:?}, using {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}

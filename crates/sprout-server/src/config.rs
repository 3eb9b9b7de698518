use std::env;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 4001;

/// Service configuration, read once at process start.
///
/// The generative model's key and name are read separately by
/// `GeminiClient::from_env`; this struct carries only what the server
/// itself needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: port_from(env::var("PORT").ok()),
        }
    }
}

fn port_from(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_garbage() {
        assert_eq!(port_from(None), DEFAULT_PORT);
        assert_eq!(port_from(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(port_from(Some("8080".to_string())), 8080);
    }
}

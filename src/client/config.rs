//! Client configuration.

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration: where the auth server lives.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    /// Configuration pointing at an explicit server URL
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL for an API endpoint path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = Config::new("http://127.0.0.1:3000");
        assert_eq!(
            config.api_url("/api/auth/login"),
            "http://127.0.0.1:3000/api/auth/login"
        );
    }
}

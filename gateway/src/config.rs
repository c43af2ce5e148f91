use crate::error::GatewayError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub server_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, GatewayError> {
        Ok(Self {
            server_url: std::env::var("SHAREIT_SERVER_URL")
                .map_err(|_| GatewayError::MissingEnvVar("SHAREIT_SERVER_URL".to_string()))?,
            bind_addr: std::env::var("GATEWAY_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

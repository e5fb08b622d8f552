use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Server URL advertised in the OpenAPI document
    pub public_url: String,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            public_url: DEFAULT_PUBLIC_URL.into(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.into());
        let public_url = lookup("PUBLIC_URL").unwrap_or(DEFAULT_PUBLIC_URL.into());
        Config {
            bind_addr,
            public_url,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(format!("BIND_ADDR is not a socket address: {}", self.bind_addr));
        }
        if self.public_url.is_empty() {
            return Err("PUBLIC_URL is empty".into());
        }
        Ok(())
    }
}

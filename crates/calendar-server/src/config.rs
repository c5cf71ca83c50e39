//! Server configuration.

/// Configuration for the calendar server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `5000`, `0` for auto-assign).
    pub port: u16,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Config bound to a `HOST:PORT` string, other settings defaulted.
    pub fn from_addr(addr: &str) -> Result<Self, AddrError> {
        let (host, port) = parse_addr(addr)?;
        Ok(Self {
            host,
            port,
            ..Self::default()
        })
    }

    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("expected HOST:PORT, got {0:?}")]
    MissingPort(String),
    #[error("empty host in {0:?}")]
    EmptyHost(String),
    #[error("invalid port in {0:?}")]
    InvalidPort(String),
}

/// Split a `HOST:PORT` argument. IPv6 hosts may be bracketed.
pub fn parse_addr(raw: &str) -> Result<(String, u16), AddrError> {
    let (host, port) = raw
        .rsplit_once(':')
        .ok_or_else(|| AddrError::MissingPort(raw.to_string()))?;
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Err(AddrError::EmptyHost(raw.to_string()));
    }
    let port = port
        .parse()
        .map_err(|_| AddrError::InvalidPort(raw.to_string()))?;
    Ok((host.to_string(), port))
}

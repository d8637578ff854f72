//! Client configuration
//!
//! Each setting resolves in order: explicit value, environment variable,
//! built-in default. The token has no default; leaving it out everywhere is
//! an error raised before any request is made.

use crate::env::Env;
use crate::error::{EcsError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const TOKEN_ENV_VAR: &str = "ECSAPI_TOKEN";
pub const HOST_ENV_VAR: &str = "ECSAPI_HOST";
pub const PORT_ENV_VAR: &str = "ECSAPI_PORT";
pub const PREFIX_ENV_VAR: &str = "ECSAPI_PREFIX";
pub const VERSION_ENV_VAR: &str = "ECSAPI_VERSION";
pub const PROTOCOL_ENV_VAR: &str = "ECSAPI_PROTOCOL";

pub const DEFAULT_HOST: &str = "api.seeweb.it";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_PORT_SSL: u16 = 443;
pub const DEFAULT_PREFIX: &str = "ecs";
pub const DEFAULT_VERSION: ApiVersion = ApiVersion::V2;
pub const DEFAULT_PROTOCOL: Protocol = Protocol::Https;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API token
pub const TOKEN_HEADER: &str = "X-APITOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Http => DEFAULT_PORT,
            Protocol::Https => DEFAULT_PORT_SSL,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(EcsError::InvalidConfig(format!(
                "Protocol must be 'http' or 'https', got '{}'",
                other
            ))),
        }
    }
}

/// Supported API versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V2,
}

impl ApiVersion {
    pub fn number(self) -> u32 {
        match self {
            ApiVersion::V2 => 2,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u32> for ApiVersion {
    type Error = EcsError;

    fn try_from(version: u32) -> Result<Self> {
        match version {
            2 => Ok(ApiVersion::V2),
            other => Err(EcsError::InvalidConfig(format!(
                "Unsupported API version {}: supported versions are [2]",
                other
            ))),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<Self> {
        let number = parse_number::<u32>(s, "Version")?;
        ApiVersion::try_from(number)
    }
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(EcsError::InvalidConfig(format!(
            "{} must be a number, got '{}'",
            what, value
        )));
    }
    value
        .parse()
        .map_err(|_| EcsError::InvalidConfig(format!("{} out of range: '{}'", what, value)))
}

/// Resolved client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    pub host: String,
    pub port: u16,
    pub prefix: String,
    pub version: ApiVersion,
    pub protocol: Protocol,
    /// Default timeout for every request
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("prefix", &self.prefix)
            .field("version", &self.version)
            .field("protocol", &self.protocol)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Everything from the environment (and dotenv file), defaults elsewhere
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// `<protocol>://<host>:<port>/<prefix>/v<version>`
    pub fn base_url(&self) -> String {
        format!(
            "{}/v{}",
            self.base_url_without_version(),
            self.version.number()
        )
    }

    pub fn base_url_without_version(&self) -> String {
        format!(
            "{}://{}:{}/{}",
            self.protocol, self.host, self.port, self.prefix
        )
    }
}

/// Explicit configuration values; unset fields fall back to the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    token: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    prefix: Option<String>,
    version: Option<ApiVersion>,
    protocol: Option<Protocol>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve against the process environment and dotenv file
    pub fn build(self) -> Result<ClientConfig> {
        let env = Env::load()?;
        self.build_with(&env)
    }

    /// Resolve against an explicit environment
    pub fn build_with(self, env: &Env) -> Result<ClientConfig> {
        let token = match self.token.or_else(|| env.get(TOKEN_ENV_VAR).map(str::to_string)) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(EcsError::MissingToken),
        };

        let host = self
            .host
            .or_else(|| env.get(HOST_ENV_VAR).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let prefix = self
            .prefix
            .or_else(|| env.get(PREFIX_ENV_VAR).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let version = match self.version {
            Some(version) => version,
            None => match env.get(VERSION_ENV_VAR) {
                Some(value) => value.parse()?,
                None => DEFAULT_VERSION,
            },
        };

        let protocol = match self.protocol {
            Some(protocol) => protocol,
            None => match env.get(PROTOCOL_ENV_VAR) {
                Some(value) => value.parse()?,
                None => DEFAULT_PROTOCOL,
            },
        };

        // The default port follows the resolved protocol
        let port = match self.port {
            Some(port) => port,
            None => match env.get(PORT_ENV_VAR) {
                Some(value) => parse_number(value, "Port")?,
                None => protocol.default_port(),
            },
        };

        Ok(ClientConfig {
            token,
            host,
            port,
            prefix,
            version,
            protocol,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

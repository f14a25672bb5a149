use crate::constants::scheme;
use crate::options::ValidationError;
use crate::util::{equals_ignore_case, normalize_lower};
use std::fmt;
use std::net::Ipv6Addr;
use thiserror::Error;
use url::Url;

/// The server's own origin: scheme, host and optional port.
///
/// The conventional default port of `http` (80) and `https` (443) is stored as
/// `None`, since browsers leave it out of both `Host` and `Origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOrigin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl ServerOrigin {
    pub fn new<S, H>(scheme: S, host: H, port: u16) -> Result<Self, ValidationError>
    where
        S: Into<String>,
        H: Into<String>,
    {
        Self::build(scheme.into(), host.into(), Some(port))
    }

    /// Server origin whose port is the scheme default.
    pub fn without_port<S, H>(scheme: S, host: H) -> Result<Self, ValidationError>
    where
        S: Into<String>,
        H: Into<String>,
    {
        Self::build(scheme.into(), host.into(), None)
    }

    /// Parses `scheme://host[:port]`. Any path, query or fragment is ignored.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(value.trim())
            .map_err(|_| ValidationError::InvalidServerOrigin(value.to_string()))?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ValidationError::InvalidServerOrigin(value.to_string()))?;

        Self::build(url.scheme().to_string(), host.to_string(), url.port())
    }

    fn build(scheme: String, host: String, port: Option<u16>) -> Result<Self, ValidationError> {
        let scheme = scheme.trim().to_string();
        let host = host.trim().to_string();

        if scheme.is_empty() {
            return Err(ValidationError::EmptyScheme);
        }
        if host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        if host
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '/' | '?' | '#'))
        {
            return Err(ValidationError::InvalidHost(host));
        }
        if port == Some(0) {
            return Err(ValidationError::InvalidPort(0));
        }

        let host = bracket_ipv6(host)?;
        let port = port.filter(|port| Some(*port) != default_port(&scheme));

        Ok(Self { scheme, host, port })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl Default for ServerOrigin {
    fn default() -> Self {
        Self {
            scheme: scheme::HTTP.to_string(),
            host: "localhost".to_string(),
            port: None,
        }
    }
}

impl fmt::Display for ServerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// IPv6 hosts are stored the way `Host` and `Origin` carry them: compressed and
/// wrapped in brackets.
fn bracket_ipv6(host: String) -> Result<String, ValidationError> {
    if !host.contains(':') {
        return Ok(host);
    }

    let literal = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(&host);
    match literal.parse::<Ipv6Addr>() {
        Ok(addr) => Ok(format!("[{addr}]")),
        Err(_) => Err(ValidationError::InvalidHost(host)),
    }
}

pub(crate) fn default_port(scheme_name: &str) -> Option<u16> {
    if scheme_name.eq_ignore_ascii_case(scheme::HTTP) {
        Some(scheme::HTTP_DEFAULT_PORT)
    } else if scheme_name.eq_ignore_ascii_case(scheme::HTTPS) {
        Some(scheme::HTTPS_DEFAULT_PORT)
    } else {
        None
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("origin `{origin}` cannot be parsed as a URL")]
pub struct OriginParseError {
    pub origin: String,
}

/// Scheme, host and port of an `Origin` request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOrigin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl ParsedOrigin {
    pub fn parse(value: &str) -> Result<Self, OriginParseError> {
        let url = Url::parse(value).map_err(|_| OriginParseError {
            origin: value.to_string(),
        })?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().unwrap_or_default().to_string(),
            port: url.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn is_scheme_equal(&self, scheme_name: &str) -> bool {
        equals_ignore_case(&self.scheme, scheme_name)
    }

    pub fn is_host_equal(&self, host: &str) -> bool {
        equals_ignore_case(&self.host, host)
    }

    pub fn is_port_equal(&self, port: Option<u16>) -> bool {
        self.port == port
    }
}

impl fmt::Display for ParsedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// A `Host` request header split into `host` and optional `port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostHeader {
    host: String,
    port: HostPort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostPort {
    Absent,
    Present(u16),
    Invalid,
}

impl HostHeader {
    /// Accepts `host`, `host:port`, `[v6]` and `[v6]:port`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if let Some(rest) = value.strip_prefix('[')
            && let Some(end) = rest.find(']')
        {
            let host = &value[..end + 2];
            let tail = &rest[end + 1..];
            let port = match tail.strip_prefix(':') {
                None if tail.is_empty() => HostPort::Absent,
                Some(port) => parse_port(port),
                None => HostPort::Invalid,
            };
            return Self::from_parts(host, port);
        }

        match value.rsplit_once(':') {
            Some((host, port)) => Self::from_parts(host, parse_port(port)),
            None => Self::from_parts(value, HostPort::Absent),
        }
    }

    fn from_parts(host: &str, port: HostPort) -> Self {
        Self {
            host: normalize_lower(host),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        match self.port {
            HostPort::Present(port) => Some(port),
            HostPort::Absent | HostPort::Invalid => None,
        }
    }

    /// Host must match case-insensitively. The port only has to match when
    /// the server origin carries an explicit one.
    pub fn matches(&self, host: &str, port: Option<u16>) -> bool {
        if self.host.is_empty() || self.port == HostPort::Invalid {
            return false;
        }
        if !equals_ignore_case(&self.host, host) {
            return false;
        }
        match port {
            Some(expected) => self.port == HostPort::Present(expected),
            None => true,
        }
    }
}

fn parse_port(value: &str) -> HostPort {
    match value.parse::<u16>() {
        Ok(port) if !value.starts_with('+') => HostPort::Present(port),
        _ => HostPort::Invalid,
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

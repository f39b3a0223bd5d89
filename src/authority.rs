use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::{Host, Url};

/// The `host[:port]` identity of a site. Scheme, path, query and fragment
/// never take part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    host: Host<String>,
    port: Option<u16>,
}

/// Why a `Host` header or URL could not be turned into an [`Authority`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("authority is empty")]
    Empty,
    #[error("invalid port `{0}`")]
    InvalidPort(String),
    #[error("unterminated IPv6 literal")]
    UnterminatedIpv6,
    #[error("URL has no host component")]
    MissingHost,
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

impl Authority {
    pub fn new(host: Host<String>, port: Option<u16>) -> Self {
        Self { host, port }
    }

    /// Parses the value of a `Host` header: `name`, `name:port`, `[v6]` or
    /// `[v6]:port`. An empty port (`name:`) is accepted as no port.
    pub fn from_host_header(value: &str) -> Result<Self, AuthorityError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AuthorityError::Empty);
        }

        let (host, port) = split_host_port(value)?;
        if host.is_empty() {
            return Err(AuthorityError::Empty);
        }

        let host = Host::parse(host)?;
        let port = parse_port(port)?;

        Ok(Self { host, port })
    }

    /// Extracts the authority of an absolute URL such as an `Origin` or
    /// `Referer` value. Default ports are dropped by the URL parser.
    pub fn from_url(value: &str) -> Result<Self, AuthorityError> {
        let url = Url::parse(value)?;
        let host = url.host().ok_or(AuthorityError::MissingHost)?;

        Ok(Self {
            host: host.to_owned(),
            port: url.port(),
        })
    }

    pub fn host(&self) -> &Host<String> {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl FromStr for Authority {
    type Err = AuthorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_host_header(value)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

fn split_host_port(value: &str) -> Result<(&str, Option<&str>), AuthorityError> {
    if value.starts_with('[') {
        let end = value.find(']').ok_or(AuthorityError::UnterminatedIpv6)?;
        let (host, rest) = value.split_at(end + 1);
        return match rest {
            "" => Ok((host, None)),
            _ => match rest.strip_prefix(':') {
                Some(port) => Ok((host, Some(port))),
                None => Err(AuthorityError::InvalidPort(rest.to_owned())),
            },
        };
    }

    match value.split_once(':') {
        Some((host, port)) => Ok((host, Some(port))),
        None => Ok((value, None)),
    }
}

fn parse_port(port: Option<&str>) -> Result<Option<u16>, AuthorityError> {
    match port {
        None | Some("") => Ok(None),
        Some(digits) if digits.bytes().all(|byte| byte.is_ascii_digit()) => digits
            .parse::<u16>()
            .map(Some)
            .map_err(|_| AuthorityError::InvalidPort(digits.to_owned())),
        Some(other) => Err(AuthorityError::InvalidPort(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "authority_test.rs"]
mod authority_test;

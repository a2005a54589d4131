use std::fmt;

/// Authentication scheme named in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// RFC 7617 username/password credentials.
    Basic,
    /// RFC 6750 style bearer token issued by this service.
    Bearer,
}

impl Scheme {
    /// Match a scheme token exactly as it appears on the wire (case-sensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Basic" => Some(Scheme::Basic),
            "Bearer" => Some(Scheme::Bearer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Basic => "Basic",
            Scheme::Bearer => "Bearer",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme a protected resource is willing to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesiredScheme {
    /// Accept Basic and Bearer, routed by what the client sent.
    Any,
    Basic,
    Bearer,
}

impl DesiredScheme {
    /// The single accepted scheme, `None` for `Any`.
    pub fn required(&self) -> Option<Scheme> {
        match self {
            DesiredScheme::Any => None,
            DesiredScheme::Basic => Some(Scheme::Basic),
            DesiredScheme::Bearer => Some(Scheme::Bearer),
        }
    }
}

impl From<Scheme> for DesiredScheme {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Basic => DesiredScheme::Basic,
            Scheme::Bearer => DesiredScheme::Bearer,
        }
    }
}

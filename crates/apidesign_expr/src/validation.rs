//! Constraint records attached to attributes.

use std::fmt;
use std::str::FromStr;

use apidesign_foundation::{Error, ErrorKind, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The validations attached to an attribute.
///
/// Created lazily by the first validation call. Every setter replaces its
/// field wholesale except `required`, which accumulates across calls.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationExpr {
    /// Allowed values, stored as written.
    pub values: Option<Vec<Value>>,
    /// String format.
    pub format: Option<ValidationFormat>,
    /// Regular expression the value must match.
    pub pattern: Option<String>,
    /// Inclusive lower bound.
    pub minimum: Option<f64>,
    /// Inclusive upper bound.
    pub maximum: Option<f64>,
    /// Minimum length of strings, bytes, arrays and maps.
    pub min_length: Option<usize>,
    /// Maximum length of strings, bytes, arrays and maps.
    pub max_length: Option<usize>,
    /// Names of required object fields, in call order.
    pub required: Vec<String>,
}

impl ValidationExpr {
    /// Appends required field names. Duplicates are kept.
    pub fn add_required<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
    }

    /// Returns true if `name` was declared required.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Returns true if no validation has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_none()
            && self.format.is_none()
            && self.pattern.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.required.is_empty()
    }
}

/// String formats understood by `Format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationFormat {
    /// RFC3339 date.
    Date,
    /// RFC3339 date time.
    DateTime,
    /// RFC4122 uuid.
    Uuid,
    /// RFC5322 email address.
    Email,
    /// RFC1035 internet host name.
    Hostname,
    /// RFC2373 IPv4 address.
    Ipv4,
    /// RFC2373 IPv6 address.
    Ipv6,
    /// RFC2373 IPv4 or IPv6 address.
    Ip,
    /// RFC3986 URI.
    Uri,
    /// IEEE 802 MAC-48, EUI-48 or EUI-64 MAC address.
    Mac,
    /// RFC4632 or RFC4291 CIDR notation IP address.
    Cidr,
    /// Regular expression.
    Regexp,
    /// JSON text.
    Json,
    /// RFC1123 date time.
    Rfc1123,
}

impl ValidationFormat {
    /// Every supported format.
    pub const ALL: [Self; 14] = [
        Self::Date,
        Self::DateTime,
        Self::Uuid,
        Self::Email,
        Self::Hostname,
        Self::Ipv4,
        Self::Ipv6,
        Self::Ip,
        Self::Uri,
        Self::Mac,
        Self::Cidr,
        Self::Regexp,
        Self::Json,
        Self::Rfc1123,
    ];

    /// Returns the tag used in designs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::Uuid => "uuid",
            Self::Email => "email",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Ip => "ip",
            Self::Uri => "uri",
            Self::Mac => "mac",
            Self::Cidr => "cidr",
            Self::Regexp => "regexp",
            Self::Json => "json",
            Self::Rfc1123 => "rfc1123",
        }
    }
}

impl FromStr for ValidationFormat {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == tag)
            .ok_or_else(|| Error::new(ErrorKind::InvalidFormat(tag.to_string())))
    }
}

impl fmt::Display for ValidationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Format filters and the malicious-input scan.
//!
//! Each [`Filter`] is also a built-in rule; see
//! [`RuleRegistry`](crate::RuleRegistry) for the rule names.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rulebook_value::Value;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

static MAC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{4}(?:\.[0-9A-Fa-f]{4}){2})$",
    )
    .expect("mac pattern is valid")
});

static MALICIOUS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<script|javascript:|vbscript:|onload=|onerror=|onclick=|eval\(|base64_decode|document\.cookie|window\.location",
    )
    .expect("malicious pattern is valid")
});

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A named format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Email address.
    Email,
    /// Absolute URL.
    Url,
    /// IPv4 or IPv6 literal.
    Ip,
    /// MAC address.
    Mac,
    /// Domain name.
    Domain,
    /// Integer.
    Int,
    /// Finite float.
    Float,
    /// Boolean literal.
    Boolean,
}

impl Filter {
    /// Every filter.
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::Url,
        Self::Ip,
        Self::Mac,
        Self::Domain,
        Self::Int,
        Self::Float,
        Self::Boolean,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Ip => "ip",
            Self::Mac => "mac",
            Self::Domain => "domain",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter `{0}`")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFilter(s.to_owned()))
    }
}

/// Whether `value` passes `filter`.
///
/// String filters only accept strings. The numeric and boolean filters also
/// accept values of the matching kind.
pub fn check(value: &Value, filter: Filter) -> bool {
    match filter {
        Filter::Email => value.as_str().is_some_and(is_email),
        Filter::Url => value.as_str().is_some_and(is_url),
        Filter::Ip => value.as_str().is_some_and(is_ip),
        Filter::Mac => value.as_str().is_some_and(is_mac),
        Filter::Domain => value.as_str().is_some_and(is_domain),
        Filter::Int => match value {
            Value::Number(n) => n.as_i64().is_some() || n.as_f64().is_some_and(is_whole),
            Value::String(s) => is_int(s),
            _ => false,
        },
        Filter::Float => match value {
            Value::Number(_) => true,
            Value::String(s) => is_float(s),
            _ => false,
        },
        Filter::Boolean => match value {
            Value::Bool(_) => true,
            Value::Number(n) => n.as_i64().is_some_and(|n| n == 0 || n == 1),
            Value::String(s) => is_boolean(s),
            _ => false,
        },
    }
}

fn is_whole(n: f64) -> bool {
    n.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&n)
}

/// Email address: dotted domain, no empty local-part segments.
pub fn is_email(input: &str) -> bool {
    let Some((local, _)) = input.rsplit_once('@') else {
        return false;
    };
    input.len() <= MAX_EMAIL_LEN
        && local.len() <= MAX_LOCAL_PART_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && EMAIL_REGEX.is_match(input)
}

/// Absolute URL. Hierarchical schemes need a host.
pub fn is_url(input: &str) -> bool {
    url::Url::parse(input)
        .is_ok_and(|url| url.has_host() || matches!(url.scheme(), "mailto" | "news" | "file"))
}

/// IPv4 or IPv6 literal.
pub fn is_ip(input: &str) -> bool {
    input.parse::<IpAddr>().is_ok()
}

/// `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` or `aabb.ccdd.eeff`.
pub fn is_mac(input: &str) -> bool {
    MAC_REGEX.is_match(input)
}

/// Dot-separated labels of 1 to 63 characters, 253 in total. A single
/// trailing dot is allowed.
pub fn is_domain(input: &str) -> bool {
    let name = input.strip_suffix('.').unwrap_or(input);
    !name.is_empty()
        && name.len() <= MAX_DOMAIN_LEN
        && name
            .split('.')
            .all(|label| !label.is_empty() && label.len() <= MAX_LABEL_LEN)
}

/// Decimal integer with an optional sign, no leading zeros, in `i64` range.
/// Surrounding whitespace is ignored.
pub fn is_int(input: &str) -> bool {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let canonical = digits == "0" || digits.starts_with(|c: char| matches!(c, '1'..='9'));
    canonical && digits.bytes().all(|b| b.is_ascii_digit()) && trimmed.parse::<i64>().is_ok()
}

/// Decimal or exponent float literal with a finite value.
pub fn is_float(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// `true/false/1/0/on/off/yes/no`, case-insensitive.
pub fn is_boolean(input: &str) -> bool {
    let trimmed = input.trim();
    ["true", "false", "1", "0", "on", "off", "yes", "no"]
        .iter()
        .any(|literal| trimmed.eq_ignore_ascii_case(literal))
}

/// Whether `input` contains script-injection markers such as `<script` or
/// `javascript:`. Case-insensitive.
pub fn is_malicious(input: &str) -> bool {
    MALICIOUS_REGEX.is_match(input)
}

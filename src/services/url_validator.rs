//! Address assembly and URL-syntax validation for the submit path.
//!
//! A typed fragment is trimmed, percent-encoded as a single URI component and
//! prefixed with `https://`. The result is checked by a [`UrlValidator`]; the
//! default [`SyntaxValidator`] accepts http(s) addresses whose host is an IP
//! literal or a fully qualified domain name.

use std::net::Ipv4Addr;

use url::{Host, Url};

use crate::types::page::SCHEME_PREFIX;

/// Longest address accepted, matching the common browser limit.
pub const MAX_URL_LENGTH: usize = 2083;

/// Pure predicate over a fully assembled address.
pub trait UrlValidator {
    fn is_valid(&self, candidate: &str) -> bool;
}

/// Trims `raw` and percent-encodes it as one URI component.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped, so `/` becomes `%2F`.
pub fn encode_fragment(raw: &str) -> String {
    urlencoding::encode(raw.trim()).into_owned()
}

/// Prefixes an encoded fragment with the fixed scheme.
pub fn candidate_address(encoded: &str) -> String {
    format!("{}{}", SCHEME_PREFIX, encoded)
}

/// Syntax-only validator: no DNS, no network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxValidator;

impl UrlValidator for SyntaxValidator {
    fn is_valid(&self, candidate: &str) -> bool {
        if candidate.is_empty()
            || candidate.len() > MAX_URL_LENGTH
            || candidate.chars().any(char::is_whitespace)
        {
            return false;
        }

        let parsed = match Url::parse(candidate) {
            Ok(u) => u,
            Err(_) => return false,
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => is_fully_qualified(domain),
            // The WHATWG parser reads shorthand like `https://123` as an IPv4
            // address; only a literal dotted quad counts here.
            Some(Host::Ipv4(addr)) => raw_host(candidate)
                .and_then(|raw| raw.parse::<Ipv4Addr>().ok())
                .is_some_and(|literal| literal == addr),
            Some(Host::Ipv6(_)) => true,
            None => false,
        }
    }
}

/// Host text exactly as written in `candidate`, without userinfo or port.
fn raw_host(candidate: &str) -> Option<&str> {
    let (_, rest) = candidate.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit('@').next()?;
    let host = match host_port.rsplit_once(':') {
        Some((host, _port)) if !host.starts_with('[') => host,
        _ => host_port,
    };
    Some(host)
}

/// At least two labels, each a valid hostname label, with an alphabetic or
/// punycode top-level label.
fn is_fully_qualified(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|l| is_valid_label(l)) {
        return false;
    }
    labels.last().is_some_and(|tld| is_valid_tld(tld))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 || label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii())
}

fn is_valid_tld(tld: &str) -> bool {
    if let Some(puny) = tld.strip_prefix("xn--") {
        return !puny.is_empty() && puny.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    }
    tld.chars().count() >= 2 && tld.chars().all(|c| c.is_alphabetic())
}

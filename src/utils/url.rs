//! URL validation for external map links.
//!
//! Directions open a new tab, so generated URLs are checked against the
//! configured map domains before anything is opened.

use crate::config::ALLOWED_MAP_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to open
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

/// Validate a map URL before opening it.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with https://
/// 3. URL has a valid host
/// 4. Host is a configured map domain (or a subdomain of one)
pub fn validate_map_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    if !url.to_lowercase().starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = extract_host(url) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract the lowercase host from an https URL, without `www.` or port.
fn extract_host(url: &str) -> Option<String> {
    let scheme_len = "https://".len();
    let without_protocol = url.get(scheme_len..)?;

    // Host ends at the first path, query or fragment delimiter
    let host_part = without_protocol
        .split(['/', '?', '#'])
        .next()?;
    let host = host_part.split(':').next()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_MAP_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
}

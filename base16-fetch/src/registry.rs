//! Scheme registry: the well-known `name -> repository` list used by
//! fan-out acquisition.

use std::collections::BTreeMap;

use base16_core::SchemeSource;

use crate::error::{io_err, FetchError};

/// Well-known location of the scheme registry document.
pub const SCHEMES_URL: &str =
    "https://github.com/chriskempson/base16-schemes-source/raw/master/list.yaml";

/// Download and decode the registry at `url`.
///
/// Any non-2xx response is a [`FetchError::Status`].
pub fn fetch_registry(url: &str) -> Result<Vec<SchemeSource>, FetchError> {
    tracing::debug!("fetching scheme registry from {url}");
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => FetchError::Status {
            url: url.to_string(),
            status,
        },
        other => FetchError::Http {
            url: url.to_string(),
            source: Box::new(other),
        },
    })?;
    let body = response.into_string().map_err(|e| io_err(url, e))?;
    parse_registry(url, &body)
}

/// Decode a registry document, sorted by scheme name.
///
/// Plain scalar names such as `3024` are kept as text.
pub fn parse_registry(url: &str, body: &str) -> Result<Vec<SchemeSource>, FetchError> {
    let entries: BTreeMap<String, String> =
        serde_yaml::from_str(body).map_err(|source| FetchError::Registry {
            url: url.to_string(),
            source,
        })?;
    Ok(entries
        .into_iter()
        .map(|(name, repository)| SchemeSource { name, repository })
        .collect())
}

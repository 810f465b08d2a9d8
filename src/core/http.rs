//! HTTP utilities for ESPN API communication

use crate::{config::Credentials, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Build the headers every ESPN request carries.
///
/// Adds the `SWID` / `espn_s2` cookie when credentials are given (private leagues).
pub fn espn_header_map(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        h.insert(COOKIE, HeaderValue::from_str(&creds.cookie())?);
    }
    Ok(h)
}

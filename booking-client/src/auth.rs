use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};

use crate::error::ClientResult;

/// An authenticated session with the booking service.
///
/// Holds the token obtained from the auth endpoint. The token is valid
/// for the whole run; the service offers no refresh or expiry, so a
/// `Session` is created once and passed to every mutating call instead
/// of being kept in shared mutable state.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Session {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Build the header set for mutating requests.
    ///
    /// The service authenticates through a cookie of the form
    /// `token=<value>`; `Accept: application/json` is sent alongside it.
    pub fn auth_headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("token={}", self.token))?,
        );
        Ok(headers)
    }
}

use booking_types::{
    AuthResponse, Booking, BookingFilter, BookingId, BookingPatch, CreatedBooking, Credentials,
};
use serde::de::DeserializeOwned;

use crate::auth::Session;
use crate::error::{ClientError, ClientResult};

/// A client for the booking service REST API.
///
/// Holds a single `reqwest::Client` for connection pooling and reuse
/// across multiple endpoint calls.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new REST client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Client {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check response status. On failure, read the error body and return
    /// `RequestFailed` carrying the status so callers can tell a 404
    /// apart from other failures.
    async fn check_response_status(
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(failed to read response body)".to_string());
            return Err(ClientError::RequestFailed { status, body });
        }
        Ok(response)
    }

    /// Parse JSON response body into a typed value.
    ///
    /// Two steps instead of `response.json::<T>()` so a transport failure
    /// and a malformed body surface as different error variants.
    async fn parse_json_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let text = response.text().await?;
        let r = serde_json::from_str::<T>(&text)?;
        Ok(r)
    }

    /// Healthcheck.
    ///
    /// Makes a GET request to `/ping`; any success status passes.
    pub async fn ping(&self) -> ClientResult<()> {
        let url = format!("{}/ping", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        Self::check_response_status(response).await?;
        Ok(())
    }

    /// Obtain an auth token for mutating requests.
    ///
    /// Makes a POST request to `/auth`. The service answers 200 on bad
    /// credentials too, with a `reason` field instead of a token; that
    /// case is mapped to `AuthFailed`.
    pub async fn create_token(&self, credentials: &Credentials) -> ClientResult<Session> {
        let url = format!("{}/auth", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(credentials).send().await?;

        let response = Self::check_response_status(response).await?;
        let auth: AuthResponse = Self::parse_json_response(response).await?;

        match auth.token {
            Some(token) => Ok(Session::new(token)),
            None => Err(ClientError::AuthFailed(
                auth.reason
                    .unwrap_or_else(|| "no token in response".to_string()),
            )),
        }
    }

    /// List booking ids, optionally filtered by first/last name.
    ///
    /// Makes a GET request to `/booking`; filter fields that are unset
    /// are omitted from the query string.
    pub async fn booking_ids(&self, filter: &BookingFilter) -> ClientResult<Vec<BookingId>> {
        let url = format!("{}/booking", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).query(filter).send().await?;

        let response = Self::check_response_status(response).await?;
        Self::parse_json_response(response).await
    }

    /// Fetch one booking by id.
    ///
    /// Makes a GET request to `/booking/{id}`. An unknown id surfaces as
    /// `RequestFailed` with status 404.
    pub async fn booking(&self, booking_id: u32) -> ClientResult<Booking> {
        let url = format!("{}/booking/{}", self.base_url, booking_id);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let response = Self::check_response_status(response).await?;
        Self::parse_json_response(response).await
    }

    /// Create a new booking.
    ///
    /// Makes a POST request to `/booking`; no auth required. Returns the
    /// assigned id together with the service's echo of the booking.
    pub async fn create_booking(&self, booking: &Booking) -> ClientResult<CreatedBooking> {
        let url = format!("{}/booking", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(booking).send().await?;

        let response = Self::check_response_status(response).await?;
        Self::parse_json_response(response).await
    }

    /// Replace a booking wholesale.
    ///
    /// Makes an authenticated PUT request to `/booking/{id}` and returns
    /// the stored booking.
    pub async fn update_booking(
        &self,
        booking_id: u32,
        booking: &Booking,
        session: &Session,
    ) -> ClientResult<Booking> {
        let url = format!("{}/booking/{}", self.base_url, booking_id);
        tracing::debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(session.auth_headers()?)
            .json(booking)
            .send()
            .await?;

        let response = Self::check_response_status(response).await?;
        Self::parse_json_response(response).await
    }

    /// Update a subset of a booking's fields.
    ///
    /// Makes an authenticated PATCH request to `/booking/{id}`. The
    /// service patches in place and returns the full resulting booking.
    pub async fn partial_update_booking(
        &self,
        booking_id: u32,
        patch: &BookingPatch,
        session: &Session,
    ) -> ClientResult<Booking> {
        let url = format!("{}/booking/{}", self.base_url, booking_id);
        tracing::debug!("PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .headers(session.auth_headers()?)
            .json(patch)
            .send()
            .await?;

        let response = Self::check_response_status(response).await?;
        Self::parse_json_response(response).await
    }

    /// Delete a booking.
    ///
    /// Makes an authenticated DELETE request to `/booking/{id}`. The
    /// service answers 201 here; any success status passes.
    pub async fn delete_booking(&self, booking_id: u32, session: &Session) -> ClientResult<()> {
        let url = format!("{}/booking/{}", self.base_url, booking_id);
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(session.auth_headers()?)
            .send()
            .await?;

        Self::check_response_status(response).await?;
        Ok(())
    }
}

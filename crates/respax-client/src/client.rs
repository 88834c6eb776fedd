//! Reqwest-based ResPax client
//!
//! One method per remote operation, each a single POST with HTTP Basic
//! Auth. No retries and no caching; every call is a fresh round trip.
//!
//! Error construction: an HTTP error status with a structured body uses
//! that body's `error_message`; an HTTP error status without one uses a
//! generic status description; transport failures and undecodable bodies
//! fall back to a fixed per-operation string. `write_reservation` also
//! treats an HTTP-success body carrying `error: true` as a failure.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use respax_core::types::{
    PaxTypesResponse, PaymentOptionsResponse, PingResponse, PriceRangeRequest, PriceRangeResponse,
    ReservationRequest, ReservationResponse, TourAvailabilityRequest, TourAvailabilityResponse,
    TourExtrasResponse,
};

use crate::endpoints;
use crate::error::{ErrorBody, RemoteApiError};

/// Sandbox environment the harness targets by default
pub const SANDBOX_BASE_URL: &str = "https://ron2-sandbox.respax.com";
pub const SANDBOX_USERNAME: &str = "sales_test";
pub const SANDBOX_PASSWORD: &str = "sales_test";

const PING_FALLBACK: &str = "Failed to ping server";
const AVAILABILITY_FALLBACK: &str = "Failed to check tour availability";
const EXTRAS_FALLBACK: &str = "Failed to fetch tour extras";
const PRICE_RANGE_FALLBACK: &str = "Failed to get tour price range";
const PAX_TYPES_FALLBACK: &str = "Failed to get PAX types";
const PAYMENT_OPTIONS_FALLBACK: &str = "Failed to get payment options";
const WRITE_RESERVATION_FALLBACK: &str = "Failed to write reservation";

/// HTTP client for the ResPax booking API
///
/// # Example
///
/// ```ignore
/// use respax_client::RespaxClient;
///
/// let client = RespaxClient::sandbox();
/// let pong = client.ping().await?;
/// ```
pub struct RespaxClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl RespaxClient {
    /// Create a client for the given base URL and credentials.
    ///
    /// The base URL should not include a trailing slash.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a client for the ResPax sandbox with its embedded test
    /// credentials.
    pub fn sandbox() -> Self {
        Self::new(SANDBOX_BASE_URL, SANDBOX_USERNAME, SANDBOX_PASSWORD)
    }

    /// Create a client with a custom reqwest client (timeouts, proxies).
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connectivity check.
    pub async fn ping(&self) -> Result<PingResponse, RemoteApiError> {
        self.post(endpoints::ping(), None::<&()>, PING_FALLBACK).await
    }

    /// Check availability for one tour instance.
    pub async fn check_availability(
        &self,
        request: &TourAvailabilityRequest,
    ) -> Result<TourAvailabilityResponse, RemoteApiError> {
        // The endpoint takes an array of requests; the harness always sends one.
        self.post(
            endpoints::availability(),
            Some(&[request]),
            AVAILABILITY_FALLBACK,
        )
        .await
    }

    /// Fetch the optional extras for one tour instance.
    pub async fn tour_extras(
        &self,
        host_id: &str,
        tour_code: &str,
        basis_id: i64,
        subbasis_id: i64,
        time_id: i64,
    ) -> Result<TourExtrasResponse, RemoteApiError> {
        let path = endpoints::extras(host_id, tour_code, basis_id, subbasis_id, time_id);
        self.post(&path, None::<&()>, EXTRAS_FALLBACK).await
    }

    /// Fetch the price schedule for one tour instance.
    pub async fn price_range(
        &self,
        request: &PriceRangeRequest,
    ) -> Result<PriceRangeResponse, RemoteApiError> {
        self.post(
            endpoints::price_range(),
            Some(&[request]),
            PRICE_RANGE_FALLBACK,
        )
        .await
    }

    /// Fetch the passenger types configured for a host.
    pub async fn pax_types(&self, host_id: &str) -> Result<PaxTypesResponse, RemoteApiError> {
        let path = endpoints::pax_types(host_id);
        self.post(&path, None::<&()>, PAX_TYPES_FALLBACK).await
    }

    /// Fetch the payment options configured for a host.
    pub async fn payment_options(
        &self,
        host_id: &str,
    ) -> Result<PaymentOptionsResponse, RemoteApiError> {
        let path = endpoints::payment_options(host_id);
        self.post(&path, None::<&()>, PAYMENT_OPTIONS_FALLBACK).await
    }

    /// Create a reservation.
    ///
    /// A successful HTTP response whose body carries `error: true` is a
    /// logical failure and raises with the body's `error_message`.
    pub async fn write_reservation(
        &self,
        host_id: &str,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, RemoteApiError> {
        let path = endpoints::write_reservation(host_id);
        let response: ReservationResponse = self
            .post(&path, Some(request), WRITE_RESERVATION_FALLBACK)
            .await?;

        if response.is_logical_error() {
            let message = response
                .error_message
                .unwrap_or_else(|| WRITE_RESERVATION_FALLBACK.to_string());
            return Err(RemoteApiError::new(message));
        }

        Ok(response)
    }

    async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        fallback: &'static str,
    ) -> Result<T, RemoteApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%url, error = %err, "transport failure");
                return Err(RemoteApiError::new(fallback));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(%url, error = %err, "failed to read response body");
                return Err(RemoteApiError::new(fallback));
            }
        };

        if !status.is_success() {
            if let Ok(body) = serde_json::from_slice::<ErrorBody>(&bytes) {
                if let Some(message) = body.error_message {
                    return Err(RemoteApiError::new(message));
                }
            }
            return Err(RemoteApiError::new(format!("HTTP status {status}")));
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(%url, error = %err, "undecodable response body");
            RemoteApiError::new(fallback)
        })
    }
}

impl Default for RespaxClient {
    fn default() -> Self {
        Self::sandbox()
    }
}

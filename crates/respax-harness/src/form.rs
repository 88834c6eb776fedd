//! Lookup form controllers
//!
//! Each lookup form is a three-state machine over one client operation:
//! `Idle -> Loading -> (Success | Error)`, re-enterable from either
//! terminal state on resubmission. The controllers hold the entered
//! inputs and the raw payload or error message; rendering is left to the
//! caller.

use respax_client::{RemoteApiError, RespaxClient};
use respax_core::types::{
    PaxTypesResponse, PaymentOptionsResponse, PingResponse, PriceRangeRequest, PriceRangeResponse,
    TourAvailabilityRequest, TourAvailabilityResponse, TourExtrasResponse, TourQuery,
};

/// Submission state of a form
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FormState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FormState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn settle(&mut self, result: Result<T, RemoteApiError>) {
        *self = match result {
            Ok(value) => FormState::Success(value),
            Err(err) => FormState::Error(err.message().to_string()),
        };
    }
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        FormState::Idle
    }
}

/// Connectivity-check form
#[derive(Default)]
pub struct PingForm {
    pub state: FormState<PingResponse>,
}

impl PingForm {
    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        self.state.settle(client.ping().await);
    }
}

/// Availability lookup form
pub struct AvailabilityForm {
    pub input: TourAvailabilityRequest,
    pub state: FormState<TourAvailabilityResponse>,
}

impl AvailabilityForm {
    pub fn new(input: TourAvailabilityRequest) -> Self {
        Self {
            input,
            state: FormState::Idle,
        }
    }

    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        self.state.settle(client.check_availability(&self.input).await);
    }
}

/// Extras lookup form; inputs are the five tour identity parameters
pub struct ExtrasForm {
    pub query: TourQuery,
    pub state: FormState<TourExtrasResponse>,
}

impl ExtrasForm {
    pub fn new(query: TourQuery) -> Self {
        Self {
            query,
            state: FormState::Idle,
        }
    }

    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        let result = client
            .tour_extras(
                &self.query.host_id,
                &self.query.tour_code,
                self.query.basis_id,
                self.query.subbasis_id,
                self.query.tour_time_id,
            )
            .await;
        self.state.settle(result);
    }
}

/// Price-range lookup form
pub struct PriceRangeForm {
    pub input: PriceRangeRequest,
    pub state: FormState<PriceRangeResponse>,
}

impl PriceRangeForm {
    pub fn new(input: PriceRangeRequest) -> Self {
        Self {
            input,
            state: FormState::Idle,
        }
    }

    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        self.state.settle(client.price_range(&self.input).await);
    }
}

/// Passenger-type lookup form
pub struct PaxTypesForm {
    pub host_id: String,
    pub state: FormState<PaxTypesResponse>,
}

impl PaxTypesForm {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            state: FormState::Idle,
        }
    }

    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        self.state.settle(client.pax_types(&self.host_id).await);
    }
}

/// Payment-option lookup form
pub struct PaymentOptionsForm {
    pub host_id: String,
    pub state: FormState<PaymentOptionsResponse>,
}

impl PaymentOptionsForm {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            state: FormState::Idle,
        }
    }

    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        self.state.settle(client.payment_options(&self.host_id).await);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accessors() {
        let mut state: FormState<u32> = FormState::default();
        assert!(!state.is_loading());
        assert_eq!(state.success(), None);
        assert_eq!(state.error_message(), None);

        state = FormState::Loading;
        assert!(state.is_loading());

        state.settle(Ok(7));
        assert_eq!(state.success(), Some(&7));

        state.settle(Err(RemoteApiError::new("boom")));
        assert_eq!(state.error_message(), Some("boom"));
    }
}

//! Reservation composer
//!
//! Owns the in-progress reservation: passenger counts, per-slot details,
//! the last fetched price range and extras, and the submission state
//! machine. Price and extras are refreshed whenever the effective tour
//! query changes; a generation counter drops refresh results that were
//! superseded by a later query change, so out-of-order responses can
//! never clobber current data. Refresh failures keep the previous values
//! and are logged, never surfaced as a form error.

use chrono::NaiveDate;

use respax_client::{RemoteApiError, RespaxClient};
use respax_core::pax::{build_passengers, resize_details, PassengerCounts, PassengerDetail};
use respax_core::pricing::{total_price, PriceBreakdown};
use respax_core::types::{
    PriceRange, PriceRangeResponse, ReservationRequest, ReservationResponse, Ticket, TourExtra,
    TourExtrasResponse, TourQuery,
};
use respax_core::validation::validate_query;

use crate::form::FormState;

/// Snapshot taken when a refresh starts; applying it later is rejected
/// if the query has changed in between.
#[derive(Debug, Clone)]
pub struct PendingRefresh {
    generation: u64,
    pub query: TourQuery,
}

/// Results of one price/extras fetch pair
#[derive(Debug)]
pub struct RefreshOutcome {
    pub price: Result<PriceRangeResponse, RemoteApiError>,
    pub extras: Result<TourExtrasResponse, RemoteApiError>,
}

/// Controller for the reservation form
pub struct ReservationComposer {
    host_id: String,
    request: ReservationRequest,
    counts: PassengerCounts,
    details: Vec<PassengerDetail>,
    price: Option<PriceRange>,
    extras: Vec<TourExtra>,
    generation: u64,
    state: FormState<ReservationResponse>,
}

impl ReservationComposer {
    /// Create a composer for one ticket. Starts with a single adult slot.
    pub fn new(host_id: impl Into<String>, ticket: Ticket, payment_option: impl Into<String>) -> Self {
        let counts = PassengerCounts::new(1, 0, 0);
        let mut details = Vec::new();
        resize_details(&mut details, counts.total());

        Self {
            host_id: host_id.into(),
            request: ReservationRequest {
                voucher_num: None,
                payment_option: payment_option.into(),
                general_comment: None,
                send_confirmation: None,
                tickets: vec![ticket],
                agent_reference: None,
            },
            counts,
            details,
            price: None,
            extras: Vec::new(),
            generation: 0,
            state: FormState::Idle,
        }
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn ticket(&self) -> &Ticket {
        &self.request.tickets[0]
    }

    pub fn counts(&self) -> PassengerCounts {
        self.counts
    }

    pub fn details(&self) -> &[PassengerDetail] {
        &self.details
    }

    pub fn detail_mut(&mut self, index: usize) -> Option<&mut PassengerDetail> {
        self.details.get_mut(index)
    }

    pub fn price(&self) -> Option<&PriceRange> {
        self.price.as_ref()
    }

    pub fn extras(&self) -> &[TourExtra] {
        &self.extras
    }

    pub fn state(&self) -> &FormState<ReservationResponse> {
        &self.state
    }

    pub fn set_voucher_num(&mut self, voucher: impl Into<String>) {
        self.request.voucher_num = Some(voucher.into());
    }

    pub fn set_payment_option(&mut self, option: impl Into<String>) {
        self.request.payment_option = option.into();
    }

    pub fn set_general_comment(&mut self, comment: impl Into<String>) {
        self.request.general_comment = Some(comment.into());
    }

    pub fn set_agent_reference(&mut self, reference: impl Into<String>) {
        self.request.agent_reference = Some(reference.into());
    }

    /// Change the tour date; requires a refresh.
    pub fn set_tour_date(&mut self, date: NaiveDate) {
        self.request.tickets[0].tour_date = date;
        self.generation += 1;
    }

    /// Change the tour code; requires a refresh.
    pub fn set_tour_code(&mut self, code: impl Into<String>) {
        self.request.tickets[0].tour_code = code.into();
        self.generation += 1;
    }

    /// Change the basis id (string-typed on the wire); requires a refresh.
    pub fn set_basis_id(&mut self, basis_id: impl Into<String>) {
        self.request.tickets[0].basis_id = basis_id.into();
        self.generation += 1;
    }

    /// Change the subbasis id; requires a refresh.
    pub fn set_subbasis_id(&mut self, subbasis_id: impl Into<String>) {
        self.request.tickets[0].subbasis_id = subbasis_id.into();
        self.generation += 1;
    }

    /// Change the departure time id; requires a refresh.
    pub fn set_tour_time_id(&mut self, time_id: impl Into<String>) {
        self.request.tickets[0].tour_time_id = time_id.into();
        self.generation += 1;
    }

    /// Change the passenger counts; the detail list is resized in place,
    /// preserving existing entries by index.
    pub fn set_counts(&mut self, counts: PassengerCounts) {
        self.counts = counts;
        resize_details(&mut self.details, counts.total());
    }

    /// Toggle an extra for one passenger slot.
    pub fn toggle_extra(&mut self, index: usize, extra_id: i64) {
        if let Some(detail) = self.details.get_mut(index) {
            detail.toggle_extra(extra_id);
        }
    }

    /// Total sell price for the current counts and fetched price range.
    pub fn total_price(&self) -> f64 {
        total_price(&self.counts, self.price.as_ref())
    }

    /// Price summary for display; `None` until a price range is loaded.
    pub fn price_breakdown(&self) -> Option<PriceBreakdown> {
        self.price
            .as_ref()
            .map(|price| PriceBreakdown::compute(&self.counts, price))
    }

    /// Snapshot the current query for a refresh.
    ///
    /// Returns `None` when the ticket's identity fields do not form a
    /// valid query; the refresh is skipped silently in that case.
    pub fn begin_refresh(&self) -> Option<PendingRefresh> {
        let query = match self.ticket().tour_query(&self.host_id) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!(error = %err, "skipping refresh: unparseable ticket ids");
                return None;
            }
        };
        if let Err(err) = validate_query(&query) {
            tracing::debug!(error = %err, "skipping refresh: invalid tour query");
            return None;
        }
        Some(PendingRefresh {
            generation: self.generation,
            query,
        })
    }

    /// Fetch price range and extras for a snapshotted query.
    pub async fn fetch_refresh(client: &RespaxClient, pending: &PendingRefresh) -> RefreshOutcome {
        let query = &pending.query;
        let price = client.price_range(&query.price_range_request()).await;
        let extras = client
            .tour_extras(
                &query.host_id,
                &query.tour_code,
                query.basis_id,
                query.subbasis_id,
                query.tour_time_id,
            )
            .await;
        RefreshOutcome { price, extras }
    }

    /// Apply a refresh outcome.
    ///
    /// Returns `false` when the snapshot was superseded by a later query
    /// change; the outcome is dropped wholesale. Individual fetch
    /// failures keep the previous values.
    pub fn apply_refresh(&mut self, pending: PendingRefresh, outcome: RefreshOutcome) -> bool {
        if pending.generation != self.generation {
            tracing::debug!(
                pending = pending.generation,
                current = self.generation,
                "dropping superseded refresh"
            );
            return false;
        }

        match outcome.price {
            // First result drives the form; an empty list clears the price.
            Ok(response) => self.price = response.prices.into_iter().next(),
            Err(err) => tracing::warn!(error = %err, "failed to fetch price range"),
        }

        match outcome.extras {
            Ok(response) => self.extras = response.extras,
            Err(err) => tracing::warn!(error = %err, "failed to fetch extras"),
        }

        true
    }

    /// Refresh price range and extras for the current query.
    pub async fn refresh(&mut self, client: &RespaxClient) {
        let Some(pending) = self.begin_refresh() else {
            return;
        };
        let outcome = Self::fetch_refresh(client, &pending).await;
        self.apply_refresh(pending, outcome);
    }

    /// Assemble the full reservation payload from the current state.
    pub fn build_request(&self) -> ReservationRequest {
        let mut request = self.request.clone();
        request.tickets[0].passengers = build_passengers(&self.details, &self.counts);
        request
    }

    /// Submit the reservation.
    ///
    /// Success and failure both leave the entered data in place, so the
    /// user can correct and resubmit.
    pub async fn submit(&mut self, client: &RespaxClient) {
        self.state = FormState::Loading;
        let request = self.build_request();
        let result = client.write_reservation(&self.host_id, &request).await;
        self.state.settle(result);
    }
}

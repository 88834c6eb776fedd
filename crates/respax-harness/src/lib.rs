//! # ResPax Harness
//!
//! Form controllers for the ResPax API test harness: one thin three-state
//! controller per lookup operation, plus the reservation composer that
//! tracks passenger counts and details, refreshes price/extras data when
//! the tour query changes, and assembles the reservation payload.
//!
//! ## Example
//!
//! ```ignore
//! use respax_client::RespaxClient;
//! use respax_harness::ReservationComposer;
//!
//! let client = RespaxClient::sandbox();
//! let mut composer = ReservationComposer::new("SALES", ticket, "comm-agent/bal-pob");
//! composer.refresh(&client).await;
//! println!("total: {}", composer.total_price());
//! composer.submit(&client).await;
//! ```

mod form;
mod reservation;

pub use form::{
    AvailabilityForm, ExtrasForm, FormState, PaxTypesForm, PaymentOptionsForm, PingForm,
    PriceRangeForm,
};
pub use reservation::{PendingRefresh, RefreshOutcome, ReservationComposer};

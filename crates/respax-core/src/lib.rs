//! # ResPax Core
//!
//! Wire contracts and booking composition logic for the ResPax
//! tour-reservation API.
//!
//! This crate provides:
//! - Serde mirrors of the request/response shapes the remote API exchanges
//! - Passenger count/detail composition with the positional category mapping
//! - Pure price-totaling over the fetched price schedule
//! - Tour query validation
//!
//! ## Example
//!
//! ```rust
//! use respax_core::pax::{build_passengers, PassengerCounts, PassengerDetail};
//!
//! let counts = PassengerCounts::new(1, 1, 0);
//! let details = vec![PassengerDetail::default(), PassengerDetail::default()];
//! let passengers = build_passengers(&details, &counts);
//! assert_eq!(passengers[0].pax_type, 1); // adult
//! assert_eq!(passengers[1].pax_type, 3); // child
//! ```

pub mod error;
pub mod pax;
pub mod pricing;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use error::RespaxError;
pub use pax::{build_passengers, resize_details, PassengerCounts, PassengerDetail, PaxCategory};
pub use pricing::{format_amount, total_price, PriceBreakdown};
pub use types::*;
pub use validation::{validate_query, ValidationError};

//! # ResPax HTTP Client
//!
//! Reqwest-based client for the ResPax tour-reservation API.
//!
//! This crate provides:
//! - One typed method per remote operation (ping, availability, extras,
//!   price range, pax types, payment options, write reservation)
//! - Endpoint path construction
//! - Normalization of transport, HTTP and logical failures into the
//!   single message-carrying [`RemoteApiError`]
//!
//! ## Example
//!
//! ```ignore
//! use respax_client::RespaxClient;
//!
//! let client = RespaxClient::sandbox();
//! let extras = client
//!     .tour_extras("SALES", "CNRCITY", 144, 206, 149)
//!     .await?;
//! ```

mod client;
pub mod endpoints;
mod error;

pub use client::{
    RespaxClient, SANDBOX_BASE_URL, SANDBOX_PASSWORD, SANDBOX_USERNAME,
};
pub use error::RemoteApiError;

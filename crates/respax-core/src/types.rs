//! ResPax wire contracts
//!
//! Serde mirrors of the JSON shapes exchanged with the remote ResPax
//! service: lookup requests/responses, the reservation payload and the
//! reservation result. Field names match the wire exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Response to a connectivity ping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingResponse {
    pub response: String,
}

/// Availability lookup for one bookable tour instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourAvailabilityRequest {
    pub host_id: String,
    pub tour_code: String,
    pub basis_id: i64,
    pub subbasis_id: i64,
    pub tour_date: NaiveDate,
    pub tour_time_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourAvailabilityResponse {
    pub available: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Optional add-on product attachable to a passenger on a ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourExtra {
    pub group: i64,
    pub name: String,
    pub extra_id: i64,
    pub basis_id: i64,
    pub time_id: i64,
    pub code: String,
    pub offset: f64,

    #[serde(default)]
    pub conditions: String,

    pub subbasis_id: i64,
    pub allow_udef1: bool,
    pub allow_foc: bool,
    pub allow_adult: bool,
    pub allow_infant: bool,
    pub allow_child: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourExtrasResponse {
    #[serde(default)]
    pub extras: Vec<TourExtra>,
}

/// Per-passenger-type unit prices for one tour date/time
///
/// `udef1_tour_sell` ("family" category) and `non_per_pax_sell` may be
/// absent on the wire and are treated as zero when totaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub tour_code: String,
    pub tour_date: NaiveDate,
    pub basis_id: i64,
    pub subbasis_id: i64,
    pub time_id: i64,

    pub adult_tour_sell: f64,
    pub child_tour_sell: f64,
    pub infant_tour_sell: f64,
    pub foc_tour_sell: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub udef1_tour_sell: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_per_pax_sell: Option<f64>,

    #[serde(default)]
    pub non_per_pax_levy: f64,

    #[serde(default)]
    pub adult_tour_levy: f64,
    #[serde(default)]
    pub child_tour_levy: f64,
    #[serde(default)]
    pub infant_tour_levy: f64,
    #[serde(default)]
    pub foc_tour_levy: f64,
    #[serde(default)]
    pub udef1_tour_levy: f64,

    #[serde(default)]
    pub adult_commission: f64,
    #[serde(default)]
    pub child_commission: f64,
    #[serde(default)]
    pub infant_commission: f64,
    #[serde(default)]
    pub foc_commission: f64,
    #[serde(default)]
    pub udef1_commission: f64,

    #[serde(default)]
    pub adult_assoc: bool,
    #[serde(default)]
    pub child_assoc: bool,
    #[serde(default)]
    pub infant_assoc: bool,
    #[serde(default)]
    pub foc_assoc: bool,
    #[serde(default)]
    pub udef1_assoc: bool,

    pub payment_option: String,
    pub currency_code: String,
    pub currency_symbol: String,
}

/// Price lookup request; same shape as the availability request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRangeRequest {
    pub host_id: String,
    pub tour_code: String,
    pub basis_id: i64,
    pub subbasis_id: i64,
    pub tour_date: NaiveDate,
    pub tour_time_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRangeResponse {
    #[serde(default)]
    pub prices: Vec<PriceRange>,
}

/// Passenger category as configured on the remote host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaxType {
    pub id: i64,
    pub description: String,
    pub long_description: String,
    pub web_association: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaxTypesResponse {
    #[serde(default)]
    pub pax_types: Vec<PaxType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOption {
    pub is_default: bool,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOptionsResponse {
    #[serde(default)]
    pub payment_options: Vec<PaymentOption>,
}

/// One leg of a coach transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub pickup_id: i64,
    pub pickup_time_id: i64,
    pub route_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transfers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Transfer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<Transfer>,
}

/// Passenger record as the remote system receives it
///
/// `type` carries the remote category code: 1 adult, 3 child, 5 family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(rename = "type")]
    pub pax_type: i32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
}

/// One ticket on a reservation; ids are string-typed on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub tour_code: String,
    pub basis_id: String,
    pub subbasis_id: String,
    pub tour_time_id: String,
    pub tour_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    pub passengers: Vec<Passenger>,

    #[serde(default)]
    pub transfers: Transfers,
}

impl Ticket {
    /// Parse the string-typed identity fields into a typed [`TourQuery`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnparseableId` when a numeric id field
    /// does not parse.
    pub fn tour_query(&self, host_id: &str) -> Result<TourQuery, ValidationError> {
        let parse = |field: &str, value: &str| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::UnparseableId {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(TourQuery {
            host_id: host_id.to_string(),
            tour_code: self.tour_code.clone(),
            basis_id: parse("basis_id", &self.basis_id)?,
            subbasis_id: parse("subbasis_id", &self.subbasis_id)?,
            tour_date: self.tour_date,
            tour_time_id: parse("tour_time_id", &self.tour_time_id)?,
        })
    }
}

/// Full reservation payload for `write-reservation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_num: Option<String>,

    pub payment_option: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_confirmation: Option<bool>,

    pub tickets: Vec<Ticket>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_reference: Option<String>,
}

/// Result of `write-reservation`
///
/// A logical failure arrives with HTTP 200 and `error: true`; the id
/// fields may be absent in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationResponse {
    #[serde(default)]
    pub ticket_ids: Vec<i64>,

    #[serde(default)]
    pub root_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ReservationResponse {
    /// True when the body carries the embedded logical-error flag.
    pub fn is_logical_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}

/// Typed identity of one bookable tour instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourQuery {
    pub host_id: String,
    pub tour_code: String,
    pub basis_id: i64,
    pub subbasis_id: i64,
    pub tour_date: NaiveDate,
    pub tour_time_id: i64,
}

impl TourQuery {
    pub fn availability_request(&self) -> TourAvailabilityRequest {
        TourAvailabilityRequest {
            host_id: self.host_id.clone(),
            tour_code: self.tour_code.clone(),
            basis_id: self.basis_id,
            subbasis_id: self.subbasis_id,
            tour_date: self.tour_date,
            tour_time_id: self.tour_time_id,
        }
    }

    pub fn price_range_request(&self) -> PriceRangeRequest {
        PriceRangeRequest {
            host_id: self.host_id.clone(),
            tour_code: self.tour_code.clone(),
            basis_id: self.basis_id,
            subbasis_id: self.subbasis_id,
            tour_date: self.tour_date,
            tour_time_id: self.tour_time_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticket() -> Ticket {
        Ticket {
            tour_code: "CNRCITY".to_string(),
            basis_id: "144".to_string(),
            subbasis_id: "206".to_string(),
            tour_time_id: "149".to_string(),
            tour_date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            promo_code: None,
            passengers: vec![],
            transfers: Transfers::default(),
        }
    }

    #[test]
    fn test_ticket_tour_query_parses_string_ids() {
        let query = sample_ticket().tour_query("SALES").unwrap();
        assert_eq!(query.basis_id, 144);
        assert_eq!(query.subbasis_id, 206);
        assert_eq!(query.tour_time_id, 149);
        assert_eq!(query.host_id, "SALES");
    }

    #[test]
    fn test_ticket_tour_query_rejects_garbage_ids() {
        let mut ticket = sample_ticket();
        ticket.basis_id = "abc".to_string();
        assert!(matches!(
            ticket.tour_query("SALES"),
            Err(ValidationError::UnparseableId { .. })
        ));
    }

    #[test]
    fn test_passenger_type_field_wire_name() {
        let passenger = Passenger {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: None,
            mobile: None,
            pax_type: 1,
            extras: vec![],
            country: None,
            source: None,
        };
        let json = serde_json::to_value(&passenger).unwrap();
        assert_eq!(json["type"], 1);
        assert!(json.get("extras").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_price_range_tolerates_missing_optional_prices() {
        let json = r#"{
            "tour_code": "CNRCITY",
            "tour_date": "2026-08-24",
            "basis_id": 144,
            "subbasis_id": 206,
            "time_id": 149,
            "adult_tour_sell": 100.0,
            "child_tour_sell": 50.0,
            "infant_tour_sell": 0.0,
            "foc_tour_sell": 0.0,
            "payment_option": "comm-agent/bal-pob",
            "currency_code": "AUD",
            "currency_symbol": "$"
        }"#;
        let price: PriceRange = serde_json::from_str(json).unwrap();
        assert_eq!(price.udef1_tour_sell, None);
        assert_eq!(price.non_per_pax_sell, None);
        assert_eq!(price.adult_tour_sell, 100.0);
    }

    #[test]
    fn test_reservation_response_logical_error() {
        let json = r#"{"error": true, "error_message": "Sold out"}"#;
        let response: ReservationResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_logical_error());
        assert_eq!(response.error_message.as_deref(), Some("Sold out"));
        assert!(response.ticket_ids.is_empty());
    }

    #[test]
    fn test_reservation_request_roundtrip() {
        let request = ReservationRequest {
            voucher_num: Some("TEST BOOKING".to_string()),
            payment_option: "comm-agent/bal-pob".to_string(),
            general_comment: Some("RON JSON REQUEST TEST BOOKING".to_string()),
            send_confirmation: None,
            tickets: vec![sample_ticket()],
            agent_reference: Some("Test ref".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: ReservationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }
}

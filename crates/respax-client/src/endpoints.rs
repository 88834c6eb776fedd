//! ResPax endpoint paths
//!
//! Every operation is a POST. Some endpoints embed the caller-supplied
//! ids directly in the path; the ids used here are numeric or enumerated,
//! so plain interpolation is sufficient.

/// Connectivity check.
pub fn ping() -> &'static str {
    "/ping.json"
}

/// Availability lookup; body is a one-element array of requests.
pub fn availability() -> &'static str {
    "/read-availability-range.json?config=live"
}

/// Extras lookup; the five tour identity parameters form the path.
pub fn extras(host_id: &str, tour_code: &str, basis_id: i64, subbasis_id: i64, time_id: i64) -> String {
    format!("/read-extras-{host_id}-{tour_code}-{basis_id}-{subbasis_id}-{time_id}.json?mode=live")
}

/// Price-range lookup; body is a one-element array of requests.
pub fn price_range() -> &'static str {
    "/read-price-range.json?mode=live"
}

/// Passenger-type lookup for a host.
pub fn pax_types(host_id: &str) -> String {
    format!("/read-pax-types-{host_id}.json?mode=live")
}

/// Payment-option lookup for a host.
pub fn payment_options(host_id: &str) -> String {
    format!("/read-payment-options-{host_id}.json?mode=live")
}

/// Reservation write for a host.
pub fn write_reservation(host_id: &str) -> String {
    format!("/write-reservation-{host_id}.json?mode=live")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_path_orders_all_five_parameters() {
        assert_eq!(
            extras("SALES", "CNRCITY", 144, 206, 149),
            "/read-extras-SALES-CNRCITY-144-206-149.json?mode=live"
        );
    }

    #[test]
    fn test_host_scoped_paths() {
        assert_eq!(pax_types("SALES"), "/read-pax-types-SALES.json?mode=live");
        assert_eq!(
            payment_options("SALES"),
            "/read-payment-options-SALES.json?mode=live"
        );
        assert_eq!(
            write_reservation("SALES"),
            "/write-reservation-SALES.json?mode=live"
        );
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(ping(), "/ping.json");
        assert_eq!(availability(), "/read-availability-range.json?config=live");
        assert_eq!(price_range(), "/read-price-range.json?mode=live");
    }
}

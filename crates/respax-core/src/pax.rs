//! Passenger composition
//!
//! Counts, per-slot detail records and the positional category mapping
//! used when a reservation is assembled. Slot index decides the category:
//! the first `adults` slots are adults, the next `children` slots are
//! children, and the remainder are family ("udef1") passengers.

use serde::{Deserialize, Serialize};

use crate::types::Passenger;

/// Remote passenger category codes: 1 adult, 3 child, 5 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaxCategory {
    Adult,
    Child,
    Family,
}

impl PaxCategory {
    /// Wire code the remote system expects in `Passenger.type`.
    pub fn type_code(self) -> i32 {
        match self {
            PaxCategory::Adult => 1,
            PaxCategory::Child => 3,
            PaxCategory::Family => 5,
        }
    }
}

/// Passenger counts entered on the form; their sum is the authoritative
/// passenger total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub adults: u32,
    pub children: u32,
    pub families: u32,
}

impl PassengerCounts {
    pub fn new(adults: u32, children: u32, families: u32) -> Self {
        Self {
            adults,
            children,
            families,
        }
    }

    /// Total passenger slots required.
    pub fn total(&self) -> usize {
        (self.adults + self.children + self.families) as usize
    }

    /// Positional category for a slot index.
    pub fn category_for_slot(&self, index: usize) -> PaxCategory {
        if index < self.adults as usize {
            PaxCategory::Adult
        } else if index < (self.adults + self.children) as usize {
            PaxCategory::Child
        } else {
            PaxCategory::Family
        }
    }
}

/// One passenger slot's entered details; extras hold selected extra ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetail {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub extras: Vec<i64>,
}

impl PassengerDetail {
    /// Toggle an extra on or off for this passenger.
    pub fn toggle_extra(&mut self, extra_id: i64) {
        if let Some(pos) = self.extras.iter().position(|&id| id == extra_id) {
            self.extras.remove(pos);
        } else {
            self.extras.push(extra_id);
        }
    }
}

/// Resize the detail list to `total` slots, preserving existing entries by
/// index and filling new slots with empty defaults. Never reorders.
pub fn resize_details(details: &mut Vec<PassengerDetail>, total: usize) {
    details.resize_with(total, PassengerDetail::default);
}

/// Build the wire passenger records from entered details, applying the
/// positional category mapping.
pub fn build_passengers(details: &[PassengerDetail], counts: &PassengerCounts) -> Vec<Passenger> {
    details
        .iter()
        .enumerate()
        .map(|(index, detail)| Passenger {
            first_name: detail.first_name.clone(),
            last_name: detail.last_name.clone(),
            email: non_empty(&detail.email),
            mobile: non_empty(&detail.mobile),
            pax_type: counts.category_for_slot(index).type_code(),
            extras: detail.extras.clone(),
            country: None,
            source: None,
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

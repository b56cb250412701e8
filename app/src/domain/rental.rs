//! Rental Record Entity
//!
//! One row per rented cart. Field names follow the stored JSON layout
//! (camelCase), so blobs written by earlier app versions load unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, ValidationError};
use super::file_ref::FileRef;

/// Rent payment status of a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RentStatus {
    #[default]
    Pending,
    Paid,
}

impl RentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentStatus::Pending => "Pending",
            RentStatus::Paid => "Paid",
        }
    }

    /// Lenient parse used for stored blobs and free-text form input:
    /// anything that is not "paid" (any case) is pending.
    pub fn from_str(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("paid") {
            RentStatus::Paid
        } else {
            RentStatus::Pending
        }
    }
}

impl std::fmt::Display for RentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RentStatus {
    fn from(s: String) -> Self {
        RentStatus::from_str(&s)
    }
}

impl From<RentStatus> for String {
    fn from(status: RentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A rental entry for one cart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalRecord {
    /// Unique key within the store
    pub cart_id: String,
    pub renter_name: String,
    pub mobile_no: String,
    pub address: String,
    pub id_proof: String,
    /// Reference to the picked address-proof document
    pub address_proof_file: Option<FileRef>,
    /// Decimal string, kept as entered
    pub security_deposit: String,
    /// Decimal string, kept as entered
    pub monthly_rent: String,
    pub start_date: String,
    pub due_date: String,
    pub rent_status: RentStatus,
    /// Map/geo link; empty when not set
    pub location_link: String,
    pub notes: String,
}

impl RentalRecord {
    /// Create a pending record with the three required fields set
    pub fn new(cart_id: &str, renter_name: &str, monthly_rent: &str) -> Self {
        Self {
            cart_id: cart_id.to_string(),
            renter_name: renter_name.to_string(),
            monthly_rent: monthly_rent.to_string(),
            ..Default::default()
        }
    }

    pub fn is_paid(&self) -> bool {
        self.rent_status == RentStatus::Paid
    }

    /// Monthly rent as a number, `None` when unparseable
    pub fn rent_amount(&self) -> Option<f64> {
        parse_amount(&self.monthly_rent)
    }

    /// Due date, `None` when empty or unparseable
    pub fn due(&self) -> Option<NaiveDate> {
        parse_date(&self.due_date)
    }

    pub fn location(&self) -> Option<&str> {
        let link = self.location_link.trim();
        (!link.is_empty()).then_some(link)
    }

    /// Check the fields required before a record may enter the store
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cart_id.trim().is_empty() {
            return Err(ValidationError::MissingCartId);
        }
        if self.renter_name.trim().is_empty() {
            return Err(ValidationError::MissingRenterName);
        }
        if self.monthly_rent.trim().is_empty() {
            return Err(ValidationError::MissingMonthlyRent);
        }
        Ok(())
    }
}

impl Entity for RentalRecord {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.cart_id.clone()
    }
}

/// Parse a non-negative decimal amount
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse the date part of `YYYY-MM-DD`, RFC 3339, or `YYYY-MM-DDTHH:MM[:SS]`
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

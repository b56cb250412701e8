//! Rental Form
//!
//! The in-progress add/edit form. Every field is free text, exactly as typed,
//! until it is turned into a record on submit.

use super::entity::{DomainError, DomainResult};
use super::file_ref::FileRef;
use super::rental::{RentStatus, RentalRecord};

/// Editable text fields, named as in the stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CartId,
    RenterName,
    MobileNo,
    Address,
    IdProof,
    SecurityDeposit,
    MonthlyRent,
    StartDate,
    DueDate,
    RentStatus,
    LocationLink,
    Notes,
}

impl FormField {
    /// Display order of the form inputs
    pub const ALL: [FormField; 12] = [
        FormField::CartId,
        FormField::RenterName,
        FormField::MobileNo,
        FormField::Address,
        FormField::IdProof,
        FormField::SecurityDeposit,
        FormField::MonthlyRent,
        FormField::StartDate,
        FormField::DueDate,
        FormField::RentStatus,
        FormField::LocationLink,
        FormField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::CartId => "cartId",
            FormField::RenterName => "renterName",
            FormField::MobileNo => "mobileNo",
            FormField::Address => "address",
            FormField::IdProof => "idProof",
            FormField::SecurityDeposit => "securityDeposit",
            FormField::MonthlyRent => "monthlyRent",
            FormField::StartDate => "startDate",
            FormField::DueDate => "dueDate",
            FormField::RentStatus => "rentStatus",
            FormField::LocationLink => "locationLink",
            FormField::Notes => "notes",
        }
    }

    pub fn parse(name: &str) -> DomainResult<Self> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown form field: {}", name)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RentalForm {
    pub cart_id: String,
    pub renter_name: String,
    pub mobile_no: String,
    pub address: String,
    pub id_proof: String,
    pub address_proof_file: Option<FileRef>,
    pub security_deposit: String,
    pub monthly_rent: String,
    pub start_date: String,
    pub due_date: String,
    pub rent_status: String,
    pub location_link: String,
    pub notes: String,
    /// Cart id of the record being edited; `None` for a new cart
    pub editing: Option<String>,
}

impl Default for RentalForm {
    fn default() -> Self {
        Self {
            cart_id: String::new(),
            renter_name: String::new(),
            mobile_no: String::new(),
            address: String::new(),
            id_proof: String::new(),
            address_proof_file: None,
            security_deposit: String::new(),
            monthly_rent: String::new(),
            start_date: String::new(),
            due_date: String::new(),
            rent_status: RentStatus::Pending.as_str().to_string(),
            location_link: String::new(),
            notes: String::new(),
            editing: None,
        }
    }
}

impl RentalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form for editing an existing record
    pub fn from_record(record: &RentalRecord) -> Self {
        Self {
            cart_id: record.cart_id.clone(),
            renter_name: record.renter_name.clone(),
            mobile_no: record.mobile_no.clone(),
            address: record.address.clone(),
            id_proof: record.id_proof.clone(),
            address_proof_file: record.address_proof_file.clone(),
            security_deposit: record.security_deposit.clone(),
            monthly_rent: record.monthly_rent.clone(),
            start_date: record.start_date.clone(),
            due_date: record.due_date.clone(),
            rent_status: record.rent_status.as_str().to_string(),
            location_link: record.location_link.clone(),
            notes: record.notes.clone(),
            editing: Some(record.cart_id.clone()),
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CartId => &mut self.cart_id,
            FormField::RenterName => &mut self.renter_name,
            FormField::MobileNo => &mut self.mobile_no,
            FormField::Address => &mut self.address,
            FormField::IdProof => &mut self.id_proof,
            FormField::SecurityDeposit => &mut self.security_deposit,
            FormField::MonthlyRent => &mut self.monthly_rent,
            FormField::StartDate => &mut self.start_date,
            FormField::DueDate => &mut self.due_date,
            FormField::RentStatus => &mut self.rent_status,
            FormField::LocationLink => &mut self.location_link,
            FormField::Notes => &mut self.notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        *self.slot(field) = value.to_string();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CartId => &self.cart_id,
            FormField::RenterName => &self.renter_name,
            FormField::MobileNo => &self.mobile_no,
            FormField::Address => &self.address,
            FormField::IdProof => &self.id_proof,
            FormField::SecurityDeposit => &self.security_deposit,
            FormField::MonthlyRent => &self.monthly_rent,
            FormField::StartDate => &self.start_date,
            FormField::DueDate => &self.due_date,
            FormField::RentStatus => &self.rent_status,
            FormField::LocationLink => &self.location_link,
            FormField::Notes => &self.notes,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the form as a record; the cart id is trimmed, everything
    /// else is kept verbatim
    pub fn to_record(&self) -> RentalRecord {
        RentalRecord {
            cart_id: self.cart_id.trim().to_string(),
            renter_name: self.renter_name.clone(),
            mobile_no: self.mobile_no.clone(),
            address: self.address.clone(),
            id_proof: self.id_proof.clone(),
            address_proof_file: self.address_proof_file.clone(),
            security_deposit: self.security_deposit.clone(),
            monthly_rent: self.monthly_rent.clone(),
            start_date: self.start_date.clone(),
            due_date: self.due_date.clone(),
            rent_status: RentStatus::from_str(&self.rent_status),
            location_link: self.location_link.clone(),
            notes: self.notes.clone(),
        }
    }
}

//! Delivery details collected on the checkout screen.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A field of the delivery form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryField {
    FirstName,
    LastName,
    Phone,
    Address,
}

impl DeliveryField {
    /// Every field, in form order.
    pub const ALL: [DeliveryField; 4] = [
        DeliveryField::FirstName,
        DeliveryField::LastName,
        DeliveryField::Phone,
        DeliveryField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryField::FirstName => "first_name",
            DeliveryField::LastName => "last_name",
            DeliveryField::Phone => "phone",
            DeliveryField::Address => "address",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryField::FirstName => "first name",
            DeliveryField::LastName => "last name",
            DeliveryField::Phone => "phone number",
            DeliveryField::Address => "delivery address",
        }
    }
}

impl fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_name" | "first" | "firstname" => Ok(DeliveryField::FirstName),
            "last_name" | "last" | "lastname" => Ok(DeliveryField::LastName),
            "phone" => Ok(DeliveryField::Phone),
            "address" => Ok(DeliveryField::Address),
            other => Err(format!("unknown delivery field: {}", other)),
        }
    }
}

/// Delivery details for an order.
///
/// Only presence is checked; values are kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

impl DeliveryForm {
    /// Create a filled-in form.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Read a field.
    pub fn get(&self, field: DeliveryField) -> &str {
        match field {
            DeliveryField::FirstName => &self.first_name,
            DeliveryField::LastName => &self.last_name,
            DeliveryField::Phone => &self.phone,
            DeliveryField::Address => &self.address,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: DeliveryField, value: impl Into<String>) {
        let slot = match field {
            DeliveryField::FirstName => &mut self.first_name,
            DeliveryField::LastName => &mut self.last_name,
            DeliveryField::Phone => &mut self.phone,
            DeliveryField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Labels of every empty field, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        DeliveryField::ALL
            .iter()
            .filter(|field| self.get(**field).is_empty())
            .map(|field| field.label())
            .collect()
    }

    /// Check that every field is filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::MissingField(missing))
        }
    }

    /// Check if form is complete.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

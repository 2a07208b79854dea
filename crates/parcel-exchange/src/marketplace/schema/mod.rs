//! Codec between structured listing views and the remote parcel's opaque text field.
//!
//! The canonical encoding is a compact JSON object with a fixed key order. Decoding is strict:
//! only text byte-equal to what the encoder writes is accepted. Unknown keys, reordered keys,
//! pretty-printing, or integer-typed numbers all count as "no structured data", and decoding
//! never fails loudly. Text written by the older human-readable path is recognised
//! separately by [`ParcelPayload::classify`].

mod legacy;

pub use legacy::LegacyParcel;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{InsuranceTier, SizeClass, TravelMode};

/// Date format produced by the listing forms.
pub const LISTING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Structured parcel data carried inside `RemoteParcel::description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParcelView {
    pub from: String,
    pub to: String,
    pub category: String,
    pub weight: f64,
    pub size: SizeClass,
    pub date: String,
    pub price: f64,
    pub description: String,
    pub insurance_tier: InsuranceTier,
}

/// Structured trip data computed while composing a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TripView {
    pub from: String,
    pub to: String,
    pub date: String,
    pub capacity: f64,
    pub price_per_kg: f64,
    pub insurance_tier: InsuranceTier,
}

/// Rejections raised where listings are written, never where they are read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
    #[error("weight must be greater than zero (got {0})")]
    NonPositiveWeight(f64),
    #[error("capacity must be greater than zero (got {0})")]
    NonPositiveCapacity(f64),
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("trip details do not describe a {} trip", .0.label())]
    ModeMismatch(TravelMode),
    #[error("listing could not be encoded: {0}")]
    Encoding(String),
}

impl ParcelView {
    /// Checks a composed parcel before it is written to the remote store.
    pub fn validate(&self) -> Result<(), ListingError> {
        require_text("from", &self.from)?;
        require_text("to", &self.to)?;
        require_text("description", &self.description)?;
        require_finite("weight", self.weight)?;
        require_finite("price", self.price)?;
        if self.weight <= 0.0 {
            return Err(ListingError::NonPositiveWeight(self.weight));
        }
        if self.price < 0.0 {
            return Err(ListingError::Negative {
                field: "price",
                value: self.price,
            });
        }
        Ok(())
    }

    pub fn travel_date(&self) -> Option<NaiveDate> {
        parse_listing_date(&self.date)
    }
}

impl TripView {
    pub fn validate(&self) -> Result<(), ListingError> {
        require_text("from", &self.from)?;
        require_text("to", &self.to)?;
        require_finite("capacity", self.capacity)?;
        require_finite("pricePerKg", self.price_per_kg)?;
        if self.capacity <= 0.0 {
            return Err(ListingError::NonPositiveCapacity(self.capacity));
        }
        if self.price_per_kg < 0.0 {
            return Err(ListingError::Negative {
                field: "pricePerKg",
                value: self.price_per_kg,
            });
        }
        Ok(())
    }

    pub fn travel_date(&self) -> Option<NaiveDate> {
        parse_listing_date(&self.date)
    }
}

/// Encodes a parcel view into its canonical opaque text.
///
/// Only non-finite numbers are rejected: JSON has no lossless representation for them.
/// Every finite value, including negatives, zero, and empty strings, round-trips exactly.
pub fn encode_parcel(view: &ParcelView) -> Result<String, ListingError> {
    require_finite("weight", view.weight)?;
    require_finite("price", view.price)?;
    to_canonical_json(view)
}

/// Decodes canonical opaque text. Anything else yields `None`.
pub fn decode_parcel(text: &str) -> Option<ParcelView> {
    from_canonical_json(text)
}

pub fn encode_trip(view: &TripView) -> Result<String, ListingError> {
    require_finite("capacity", view.capacity)?;
    require_finite("pricePerKg", view.price_per_kg)?;
    to_canonical_json(view)
}

pub fn decode_trip(text: &str) -> Option<TripView> {
    from_canonical_json(text)
}

fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, ListingError> {
    serde_json::to_string(value).map_err(|err| ListingError::Encoding(err.to_string()))
}

// Parsing alone would admit whitespace, key reordering, and `2` for `2.0`.
fn from_canonical_json<T: Serialize + DeserializeOwned>(text: &str) -> Option<T> {
    let value: T = serde_json::from_str(text).ok()?;
    let canonical = serde_json::to_string(&value).ok()?;
    (canonical == text).then_some(value)
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ListingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ListingError::NonFinite { field })
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ListingError> {
    if value.trim().is_empty() {
        Err(ListingError::Blank { field })
    } else {
        Ok(())
    }
}

fn parse_listing_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), LISTING_DATE_FORMAT).ok()
}

/// What a parcel's opaque field turned out to contain.
#[derive(Debug, Clone, PartialEq)]
pub enum ParcelPayload {
    Structured(ParcelView),
    Legacy(LegacyParcel),
    Unstructured,
}

impl ParcelPayload {
    pub fn classify(text: &str) -> Self {
        if let Some(view) = decode_parcel(text) {
            return ParcelPayload::Structured(view);
        }

        match LegacyParcel::parse(text) {
            Some(legacy) => {
                debug!(
                    from = %legacy.from,
                    to = %legacy.to,
                    "parcel carries legacy free-text payload"
                );
                ParcelPayload::Legacy(legacy)
            }
            None => ParcelPayload::Unstructured,
        }
    }

    pub fn structured(&self) -> Option<&ParcelView> {
        match self {
            ParcelPayload::Structured(view) => Some(view),
            _ => None,
        }
    }
}

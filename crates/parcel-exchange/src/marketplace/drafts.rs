//! Write boundary: turns composed listings into the arguments of the remote create calls.

use tracing::debug;

use super::domain::{TravelMode, TripDetails, Urgency};
use super::pricing::{QuoteRequest, RateEngine};
use super::schema::{encode_parcel, encode_trip, ListingError, ParcelView, TripView};

/// Arguments for the remote `createParcel(desc, mode)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelSubmission {
    pub description: String,
    pub travel_mode: TravelMode,
}

/// Arguments for the remote `createTrip(details, mode)` call.
///
/// `unpersisted_view` is the encoded [`TripView`]. The remote trip record has no field to hold
/// it, so it is handed back to the caller instead of being sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSubmission {
    pub details: TripDetails,
    pub travel_mode: TravelMode,
    pub unpersisted_view: String,
}

/// Handling options that affect price but are not stored on the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandlingOptions {
    pub urgency: Urgency,
    pub fragile: bool,
    pub door_pickup: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParcelDraft {
    pub view: ParcelView,
    pub travel_mode: TravelMode,
}

impl ParcelDraft {
    pub fn new(view: ParcelView, travel_mode: TravelMode) -> Self {
        Self { view, travel_mode }
    }

    pub fn quote_request(&self, handling: HandlingOptions) -> QuoteRequest {
        QuoteRequest {
            origin: self.view.from.clone(),
            destination: self.view.to.clone(),
            weight_kg: self.view.weight,
            urgency: handling.urgency,
            mode: self.travel_mode,
            size: self.view.size,
            fragile: handling.fragile,
            door_pickup: handling.door_pickup,
            insurance: self.view.insurance_tier,
        }
    }

    /// Replaces the draft's price with the engine's suggestion.
    pub fn with_suggested_price(mut self, engine: &RateEngine, handling: HandlingOptions) -> Self {
        let total = engine.price(&self.quote_request(handling));
        self.view.price = total as f64;
        self
    }

    /// Validates the draft and encodes it into the canonical opaque text.
    pub fn submission(&self) -> Result<ParcelSubmission, ListingError> {
        self.view.validate()?;
        let description = encode_parcel(&self.view)?;
        Ok(ParcelSubmission {
            description,
            travel_mode: self.travel_mode,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub details: TripDetails,
    pub travel_mode: TravelMode,
    pub view: TripView,
}

impl TripDraft {
    pub fn new(details: TripDetails, travel_mode: TravelMode, view: TripView) -> Self {
        Self {
            details,
            travel_mode,
            view,
        }
    }

    /// Bike trips have no evidence form and carry an empty on-car placeholder.
    pub fn bike(view: TripView) -> Self {
        Self::new(TripDetails::empty_car(), TravelMode::Bike, view)
    }

    pub fn submission(&self) -> Result<TripSubmission, ListingError> {
        if !self.details.matches_mode(self.travel_mode) {
            return Err(ListingError::ModeMismatch(self.travel_mode));
        }
        self.view.validate()?;
        let unpersisted_view = encode_trip(&self.view)?;
        debug!(
            mode = self.travel_mode.label(),
            "trip view computed but the remote trip record has no field to store it"
        );

        Ok(TripSubmission {
            details: self.details.clone(),
            travel_mode: self.travel_mode,
            unpersisted_view,
        })
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a marketplace participant (sender, carrier, or profile owner).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when a textual token does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// How a carrier travels; present on both parcels and trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Car,
    Bus,
    Train,
    Flight,
    Bike,
}

impl TravelMode {
    pub const ALL: [TravelMode; 5] = [
        TravelMode::Car,
        TravelMode::Bus,
        TravelMode::Train,
        TravelMode::Flight,
        TravelMode::Bike,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Flight => "flight",
            TravelMode::Bike => "bike",
        }
    }
}

impl FromStr for TravelMode {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bus" => Ok(Self::Bus),
            "train" => Ok(Self::Train),
            "flight" => Ok(Self::Flight),
            "bike" => Ok(Self::Bike),
            _ => Err(ParseEnumError {
                kind: "travel mode",
                value: raw.to_string(),
                expected: "car, bus, train, flight, bike",
            }),
        }
    }
}

/// Insurance tier selected for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceTier {
    #[default]
    None,
    Basic,
    Premium,
}

impl InsuranceTier {
    pub const ALL: [InsuranceTier; 3] = [
        InsuranceTier::None,
        InsuranceTier::Basic,
        InsuranceTier::Premium,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            InsuranceTier::None => "none",
            InsuranceTier::Basic => "basic",
            InsuranceTier::Premium => "premium",
        }
    }

    pub const fn is_insured(self) -> bool {
        !matches!(self, InsuranceTier::None)
    }
}

impl FromStr for InsuranceTier {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            _ => Err(ParseEnumError {
                kind: "insurance tier",
                value: raw.to_string(),
                expected: "none, basic, premium",
            }),
        }
    }
}

/// Delivery urgency requested by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    #[default]
    Normal,
    Express,
    SameDay,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Express => "express",
            Urgency::SameDay => "same-day",
        }
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "express" => Ok(Self::Express),
            "same-day" | "same_day" | "sameday" => Ok(Self::SameDay),
            _ => Err(ParseEnumError {
                kind: "urgency",
                value: raw.to_string(),
                expected: "normal, express, same-day",
            }),
        }
    }
}

/// Coarse parcel size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub const fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

impl FromStr for SizeClass {
    type Err = ParseEnumError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(ParseEnumError {
                kind: "size",
                value: raw.to_string(),
                expected: "small, medium, large",
            }),
        }
    }
}

/// Parcel record as stored remotely. `description` is the opaque field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteParcel {
    pub id: u64,
    pub description: String,
    pub sender: Principal,
    pub travel_mode: TravelMode,
}

/// Trip record as stored remotely. Trips carry no free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTrip {
    pub id: u64,
    pub verified: bool,
    pub details: TripDetails,
    pub travel_mode: TravelMode,
    pub carrier: Principal,
}

/// Mode-specific evidence attached to a trip. Exactly one variant is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripDetails {
    OnCar(CarDetails),
    OnBus(BusDetails),
    OnTrain(TrainDetails),
    OnFlight(FlightDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDetails {
    pub registration: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusDetails {
    pub operator: String,
    pub seat_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_reference: Option<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDetails {
    pub pnr: String,
    pub train_number: String,
    pub train_name: String,
    pub seat_berth: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    pub flight_number: String,
    pub airline: String,
    #[serde(rename = "bookingPNR")]
    pub booking_pnr: String,
    pub confirmed: bool,
}

impl TripDetails {
    /// Placeholder written for modes without their own evidence form (bikes).
    pub fn empty_car() -> Self {
        TripDetails::OnCar(CarDetails {
            registration: String::new(),
            verified: false,
        })
    }

    /// Whether the mode-specific evidence has been checked (flights use `confirmed`).
    pub fn is_verified(&self) -> bool {
        match self {
            TripDetails::OnCar(car) => car.verified,
            TripDetails::OnBus(bus) => bus.verified,
            TripDetails::OnTrain(train) => train.verified,
            TripDetails::OnFlight(flight) => flight.confirmed,
        }
    }

    /// Badge shown next to a trip once its evidence is verified.
    pub fn badge(&self) -> Option<&'static str> {
        if !self.is_verified() {
            return None;
        }
        Some(match self {
            TripDetails::OnCar(_) => "Vehicle",
            TripDetails::OnBus(_) => "Ticket",
            TripDetails::OnTrain(_) => "PNR",
            TripDetails::OnFlight(_) => "Flight",
        })
    }

    /// Whether this detail variant is an acceptable carrier for `mode`.
    pub fn matches_mode(&self, mode: TravelMode) -> bool {
        matches!(
            (self, mode),
            (TripDetails::OnCar(_), TravelMode::Car)
                | (TripDetails::OnCar(_), TravelMode::Bike)
                | (TripDetails::OnBus(_), TravelMode::Bus)
                | (TripDetails::OnTrain(_), TravelMode::Train)
                | (TripDetails::OnFlight(_), TravelMode::Flight)
        )
    }
}

/// Verification profile for a participant, fetched by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub government_id_uploaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UserProfile {
    /// Both identity and phone checks passed.
    pub fn is_verified(&self) -> bool {
        self.identity_verified && self.phone_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_tokens_parse_case_insensitively() {
        assert_eq!("Flight".parse::<TravelMode>(), Ok(TravelMode::Flight));
        assert_eq!(" PREMIUM ".parse::<InsuranceTier>(), Ok(InsuranceTier::Premium));
        assert_eq!("same-day".parse::<Urgency>(), Ok(Urgency::SameDay));
        assert_eq!("Large".parse::<SizeClass>(), Ok(SizeClass::Large));

        let err = "boat".parse::<TravelMode>().expect_err("boats are not a mode");
        assert!(err.to_string().contains("boat"));
    }

    #[test]
    fn trip_details_use_tagged_wire_shape() {
        let details = TripDetails::OnFlight(FlightDetails {
            flight_number: "6E-203".to_string(),
            airline: "IndiGo".to_string(),
            booking_pnr: "QX7PLM".to_string(),
            confirmed: true,
        });

        let json = serde_json::to_value(&details).expect("details serialize");
        assert_eq!(json["onFlight"]["bookingPNR"], "QX7PLM");
        assert_eq!(details.badge(), Some("Flight"));
    }

    #[test]
    fn bike_trips_accept_the_car_placeholder() {
        let placeholder = TripDetails::empty_car();
        assert!(placeholder.matches_mode(TravelMode::Bike));
        assert!(placeholder.matches_mode(TravelMode::Car));
        assert!(!placeholder.matches_mode(TravelMode::Train));
        assert_eq!(placeholder.badge(), None);
    }

    #[test]
    fn profile_verification_requires_identity_and_phone() {
        let mut profile = UserProfile {
            name: "Asha".to_string(),
            identity_verified: true,
            ..UserProfile::default()
        };
        assert!(!profile.is_verified());
        profile.phone_verified = true;
        assert!(profile.is_verified());
    }
}

use serde::Serialize;

use super::domain::{Principal, RemoteParcel, RemoteTrip, TravelMode, TripDetails};
use super::schema::{ParcelPayload, TripView};

const UNKNOWN_PLACE: &str = "Unknown";
const NO_DATE: &str = "No date";
const DEFAULT_PARCEL_TITLE: &str = "Parcel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSource {
    Structured,
    Legacy,
    Unstructured,
}

/// Display-ready parcel card. Every field has a defined fallback, so any opaque text renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelSummary {
    pub id: u64,
    pub title: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub price: f64,
    pub insured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub travel_mode: TravelMode,
    pub sender: Principal,
    pub source: PayloadSource,
}

impl ParcelSummary {
    pub fn from_parcel(parcel: &RemoteParcel) -> Self {
        let mut summary = Self {
            id: parcel.id,
            title: DEFAULT_PARCEL_TITLE.to_string(),
            from: UNKNOWN_PLACE.to_string(),
            to: UNKNOWN_PLACE.to_string(),
            date: NO_DATE.to_string(),
            price: 0.0,
            insured: false,
            description: None,
            travel_mode: parcel.travel_mode,
            sender: parcel.sender.clone(),
            source: PayloadSource::Unstructured,
        };

        match ParcelPayload::classify(&parcel.description) {
            ParcelPayload::Structured(view) => {
                summary.source = PayloadSource::Structured;
                summary.title = or_fallback(view.category, DEFAULT_PARCEL_TITLE);
                summary.from = or_fallback(view.from, UNKNOWN_PLACE);
                summary.to = or_fallback(view.to, UNKNOWN_PLACE);
                summary.date = or_fallback(view.date, NO_DATE);
                summary.price = view.price;
                summary.insured = view.insurance_tier.is_insured();
                summary.description = non_empty(view.description);
            }
            ParcelPayload::Legacy(legacy) => {
                summary.source = PayloadSource::Legacy;
                summary.price = legacy.price_amount().unwrap_or(0.0);
                summary.from = legacy.from;
                summary.to = legacy.to;
                summary.description = non_empty(legacy.description);
            }
            ParcelPayload::Unstructured => {}
        }

        summary
    }
}

/// Display-ready trip card.
///
/// The structured trip view is never stored remotely, so route, date, and rate normally show
/// their fallbacks unless the caller still holds the view it composed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub id: u64,
    pub travel_mode: TravelMode,
    pub carrier: Principal,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    pub from: String,
    pub to: String,
    pub date: String,
    pub price_per_kg: f64,
    pub capacity: f64,
    pub insured: bool,
}

impl TripSummary {
    pub fn from_trip(trip: &RemoteTrip, view: Option<&TripView>) -> Self {
        Self {
            id: trip.id,
            travel_mode: trip.travel_mode,
            carrier: trip.carrier.clone(),
            verified: trip.verified,
            badge: trip.details.badge(),
            vehicle: vehicle_line(&trip.details),
            from: view.map_or_else(
                || UNKNOWN_PLACE.to_string(),
                |view| or_fallback(view.from.clone(), UNKNOWN_PLACE),
            ),
            to: view.map_or_else(
                || UNKNOWN_PLACE.to_string(),
                |view| or_fallback(view.to.clone(), UNKNOWN_PLACE),
            ),
            date: view.map_or_else(
                || NO_DATE.to_string(),
                |view| or_fallback(view.date.clone(), NO_DATE),
            ),
            price_per_kg: view.map_or(0.0, |view| view.price_per_kg),
            capacity: view.map_or(0.0, |view| view.capacity),
            insured: view.is_some_and(|view| view.insurance_tier.is_insured()),
        }
    }
}

fn vehicle_line(details: &TripDetails) -> Option<String> {
    match details {
        TripDetails::OnCar(_) => None,
        TripDetails::OnBus(bus) => Some(format!("{}, seat {}", bus.operator, bus.seat_number)),
        TripDetails::OnTrain(train) => Some(format!(
            "{} - {}, seat {}",
            train.train_number, train.train_name, train.seat_berth
        )),
        TripDetails::OnFlight(flight) => {
            Some(format!("{} - {}", flight.flight_number, flight.airline))
        }
    }
}

fn or_fallback(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

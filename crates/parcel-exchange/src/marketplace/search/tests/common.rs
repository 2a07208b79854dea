use std::collections::HashMap;

use crate::marketplace::domain::{
    BusDetails, CarDetails, FlightDetails, InsuranceTier, Principal, RemoteParcel, RemoteTrip,
    SizeClass, TrainDetails, TravelMode, TripDetails, UserProfile,
};
use crate::marketplace::schema::{encode_parcel, ParcelView};

pub(super) fn principal(name: &str) -> Principal {
    Principal::new(name)
}

pub(super) fn view(from: &str, to: &str, price: f64, tier: InsuranceTier) -> ParcelView {
    ParcelView {
        from: from.to_string(),
        to: to.to_string(),
        category: "Electronics".to_string(),
        weight: 1.5,
        size: SizeClass::Medium,
        date: "2025-11-20".to_string(),
        price,
        description: format!("Parcel from {from} to {to}"),
        insurance_tier: tier,
    }
}

pub(super) fn structured_parcel(
    id: u64,
    sender: &str,
    mode: TravelMode,
    view: &ParcelView,
) -> RemoteParcel {
    RemoteParcel {
        id,
        description: encode_parcel(view).expect("fixture view encodes"),
        sender: principal(sender),
        travel_mode: mode,
    }
}

pub(super) fn raw_parcel(id: u64, sender: &str, mode: TravelMode, text: &str) -> RemoteParcel {
    RemoteParcel {
        id,
        description: text.to_string(),
        sender: principal(sender),
        travel_mode: mode,
    }
}

/// Mix of structured, legacy, and garbage parcels across senders and modes.
pub(super) fn parcels() -> Vec<RemoteParcel> {
    vec![
        structured_parcel(
            1,
            "asha",
            TravelMode::Car,
            &view("Mumbai", "Delhi", 900.0, InsuranceTier::Basic),
        ),
        structured_parcel(
            2,
            "bilal",
            TravelMode::Flight,
            &view("Delhi", "Chennai", 4200.0, InsuranceTier::Premium),
        ),
        structured_parcel(
            3,
            "chitra",
            TravelMode::Train,
            &view("Pune", "Mumbai", 300.0, InsuranceTier::None),
        ),
        structured_parcel(
            4,
            "asha",
            TravelMode::Bus,
            &view("Jaipur", "Delhi", 0.0, InsuranceTier::Premium),
        ),
        raw_parcel(
            5,
            "bilal",
            TravelMode::Car,
            "Old phone | From: Mumbai | To: Pune | Weight: 1kg | Price: ₹5000",
        ),
        raw_parcel(6, "dev", TravelMode::Bike, "not-a-valid-payload"),
    ]
}

pub(super) fn trips() -> Vec<RemoteTrip> {
    vec![
        RemoteTrip {
            id: 10,
            verified: true,
            details: TripDetails::OnCar(CarDetails {
                registration: "MH12AB1234".to_string(),
                verified: true,
            }),
            travel_mode: TravelMode::Car,
            carrier: principal("asha"),
        },
        RemoteTrip {
            id: 11,
            verified: false,
            details: TripDetails::OnBus(BusDetails {
                operator: "VRL Travels".to_string(),
                seat_number: 14,
                ticket_reference: None,
                verified: false,
            }),
            travel_mode: TravelMode::Bus,
            carrier: principal("bilal"),
        },
        RemoteTrip {
            id: 12,
            verified: true,
            details: TripDetails::OnTrain(TrainDetails {
                pnr: "4521378960".to_string(),
                train_number: "12951".to_string(),
                train_name: "Mumbai Rajdhani".to_string(),
                seat_berth: "B2-34".to_string(),
                verified: true,
            }),
            travel_mode: TravelMode::Train,
            carrier: principal("chitra"),
        },
        RemoteTrip {
            id: 13,
            verified: false,
            details: TripDetails::OnFlight(FlightDetails {
                flight_number: "AI-441".to_string(),
                airline: "Air India".to_string(),
                booking_pnr: "ZK81QP".to_string(),
                confirmed: true,
            }),
            travel_mode: TravelMode::Flight,
            carrier: principal("ghost"),
        },
    ]
}

/// asha fully verified, bilal phone only, chitra fully verified, dev identity only.
pub(super) fn profiles() -> HashMap<Principal, UserProfile> {
    let mut profiles = HashMap::new();
    profiles.insert(principal("asha"), profile("Asha", true, true));
    profiles.insert(principal("bilal"), profile("Bilal", false, true));
    profiles.insert(principal("chitra"), profile("Chitra", true, true));
    profiles.insert(principal("dev"), profile("Dev", true, false));
    profiles
}

fn profile(name: &str, identity_verified: bool, phone_verified: bool) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        identity_verified,
        phone_verified,
        email_verified: true,
        ..UserProfile::default()
    }
}

pub(super) fn ids<T, F>(items: &[T], id: F) -> Vec<u64>
where
    F: Fn(&T) -> u64,
{
    items.iter().map(id).collect()
}

pub(super) fn parcel_ids(items: &[RemoteParcel]) -> Vec<u64> {
    ids(items, |parcel| parcel.id)
}

pub(super) fn trip_ids(items: &[RemoteTrip]) -> Vec<u64> {
    ids(items, |trip| trip.id)
}

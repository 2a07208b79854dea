use std::io::Cursor;

use parcel_exchange::marketplace::pricing::insurance_multiplier;
use parcel_exchange::marketplace::{
    calculate_price, get_coverage, DistanceTable, InsuranceTier, QuoteRequest, RateEngine,
    SizeClass, TravelMode, Urgency, FALLBACK_DISTANCE_KM,
};

#[test]
fn pinned_quotes_for_mumbai_to_delhi() {
    assert_eq!(
        calculate_price(
            "Mumbai",
            "Delhi",
            10.0,
            Urgency::Normal,
            TravelMode::Car,
            SizeClass::Medium,
            false,
            false,
            InsuranceTier::None,
        ),
        7000
    );
    assert_eq!(
        calculate_price(
            "mumbai",
            "delhi",
            10.0,
            Urgency::SameDay,
            TravelMode::Flight,
            SizeClass::Large,
            true,
            true,
            InsuranceTier::Premium,
        ),
        50232
    );
}

#[test]
fn city_names_are_case_insensitive() {
    let engine = RateEngine::default();
    let lower = engine.price(&QuoteRequest::new("bangalore", "chennai", 3.0));
    let upper = engine.price(&QuoteRequest::new("BANGALORE", "Chennai", 3.0));
    assert_eq!(lower, upper);
    assert_eq!(lower, 525);
}

#[test]
fn insurance_cost_is_not_folded_into_the_price() {
    let engine = RateEngine::default();
    let uninsured = engine.price(&QuoteRequest::new("Delhi", "Jaipur", 10.0));
    let insured = engine.price(&QuoteRequest {
        insurance: InsuranceTier::Basic,
        ..QuoteRequest::new("Delhi", "Jaipur", 10.0)
    });

    // 280 × 10 × 0.5 = 1400, uplifted by 10%, never by the flat 50 rupee premium.
    assert_eq!(uninsured, 1400);
    assert_eq!(insured, 1540);
    let coverage = get_coverage(InsuranceTier::Basic, TravelMode::Car);
    assert_eq!(coverage.cost, 50);
    assert_ne!(insured, uninsured + u64::from(coverage.cost));
    assert_eq!(insurance_multiplier(InsuranceTier::Basic), 1.1);
}

#[test]
fn custom_distance_table_replaces_builtin_pairs() {
    let csv = "from,to,distance_km\nKochi,Goa,720\n";
    let table = DistanceTable::from_csv_reader(Cursor::new(csv)).expect("table parses");
    let engine = RateEngine::new(table);

    let kochi = engine.quote(&QuoteRequest::new("kochi", "GOA", 1.0));
    assert!(!kochi.fallback_distance);
    assert_eq!(kochi.total, 360);

    let metro = engine.quote(&QuoteRequest::new("Mumbai", "Delhi", 1.0));
    assert!(metro.fallback_distance);
    assert_eq!(metro.distance_km, FALLBACK_DISTANCE_KM);
    assert_eq!(metro.total, 500);
}

#[test]
fn quote_serializes_for_display() {
    let quote = RateEngine::default().quote(&QuoteRequest {
        urgency: Urgency::Express,
        door_pickup: true,
        ..QuoteRequest::new("Pune", "Mumbai", 2.0)
    });
    let json = serde_json::to_value(&quote).expect("quote serializes");

    assert_eq!(json["distance_km"], 150.0);
    assert_eq!(json["factors"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["factors"][4]["kind"], "door_pickup");
    // 150 × 2 × 0.5 × 1.5 × 1.15 = 258.75
    assert_eq!(json["total"], 259);
}

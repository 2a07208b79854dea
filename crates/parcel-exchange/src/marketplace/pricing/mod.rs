mod distance;

pub use distance::{DistanceTable, DistanceTableError, FALLBACK_DISTANCE_KM};

use serde::Serialize;
use tracing::debug;

use super::domain::{InsuranceTier, SizeClass, TravelMode, Urgency};

const FRAGILE_MULTIPLIER: f64 = 1.2;
const DOOR_PICKUP_MULTIPLIER: f64 = 1.15;

/// Rupees per kilometre per kilogram.
pub const fn base_rate(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Car => 0.5,
        TravelMode::Bus => 0.35,
        TravelMode::Train => 0.4,
        TravelMode::Flight => 0.8,
        TravelMode::Bike => 0.3,
    }
}

pub const fn urgency_multiplier(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::Normal => 1.0,
        Urgency::Express => 1.5,
        Urgency::SameDay => 2.0,
    }
}

pub const fn size_multiplier(size: SizeClass) -> f64 {
    match size {
        SizeClass::Small => 0.8,
        SizeClass::Medium => 1.0,
        SizeClass::Large => 1.3,
    }
}

/// Price uplift for an insurance tier. Independent of the flat cost in the coverage table.
pub const fn insurance_multiplier(tier: InsuranceTier) -> f64 {
    match tier {
        InsuranceTier::None => 1.0,
        InsuranceTier::Basic => 1.1,
        InsuranceTier::Premium => 1.25,
    }
}

/// Everything the rate engine needs to price one shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub urgency: Urgency,
    pub mode: TravelMode,
    pub size: SizeClass,
    pub fragile: bool,
    pub door_pickup: bool,
    pub insurance: InsuranceTier,
}

impl QuoteRequest {
    /// A normal-urgency, medium, uninsured car shipment.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight_kg,
            urgency: Urgency::Normal,
            mode: TravelMode::Car,
            size: SizeClass::Medium,
            fragile: false,
            door_pickup: false,
            insurance: InsuranceTier::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFactorKind {
    BaseRate,
    Urgency,
    Size,
    Fragile,
    DoorPickup,
    Insurance,
}

/// One multiplier applied to `distance × weight`, kept for display and audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceFactor {
    pub kind: PriceFactorKind,
    pub multiplier: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub distance_km: f64,
    pub fallback_distance: bool,
    /// Weight actually priced; invalid weights are floored to zero.
    pub weight_kg: f64,
    pub factors: Vec<PriceFactor>,
    pub total: u64,
}

/// Multi-factor price estimator over a distance table.
#[derive(Debug, Clone, Default)]
pub struct RateEngine {
    distances: DistanceTable,
}

impl RateEngine {
    pub fn new(distances: DistanceTable) -> Self {
        Self { distances }
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn quote(&self, request: &QuoteRequest) -> PriceQuote {
        let (distance_km, fallback_distance) = self
            .distances
            .distance_or_fallback(&request.origin, &request.destination);
        if fallback_distance {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                distance_km,
                "city pair not in distance table; using fallback distance"
            );
        }

        let weight_kg = effective_weight(request.weight_kg);

        let factors = vec![
            PriceFactor {
                kind: PriceFactorKind::BaseRate,
                multiplier: base_rate(request.mode),
                notes: format!("{} base rate", request.mode.label()),
            },
            PriceFactor {
                kind: PriceFactorKind::Urgency,
                multiplier: urgency_multiplier(request.urgency),
                notes: format!("{} delivery", request.urgency.label()),
            },
            PriceFactor {
                kind: PriceFactorKind::Size,
                multiplier: size_multiplier(request.size),
                notes: format!("{} parcel", request.size.label()),
            },
            PriceFactor {
                kind: PriceFactorKind::Fragile,
                multiplier: if request.fragile {
                    FRAGILE_MULTIPLIER
                } else {
                    1.0
                },
                notes: if request.fragile {
                    "fragile handling".to_string()
                } else {
                    "standard handling".to_string()
                },
            },
            PriceFactor {
                kind: PriceFactorKind::DoorPickup,
                multiplier: if request.door_pickup {
                    DOOR_PICKUP_MULTIPLIER
                } else {
                    1.0
                },
                notes: if request.door_pickup {
                    "door pickup".to_string()
                } else {
                    "drop-off by sender".to_string()
                },
            },
            PriceFactor {
                kind: PriceFactorKind::Insurance,
                multiplier: insurance_multiplier(request.insurance),
                notes: format!("{} insurance", request.insurance.label()),
            },
        ];

        let raw = factors
            .iter()
            .fold(distance_km * weight_kg, |acc, factor| acc * factor.multiplier);

        PriceQuote {
            distance_km,
            fallback_distance,
            weight_kg,
            factors,
            total: round_price(raw),
        }
    }

    pub fn price(&self, request: &QuoteRequest) -> u64 {
        self.quote(request).total
    }
}

/// Prices a shipment against the built-in distance table.
///
/// Non-positive or non-finite weights price at zero. Products too large for `u64` saturate at
/// `u64::MAX`.
#[allow(clippy::too_many_arguments)]
pub fn calculate_price(
    origin: &str,
    destination: &str,
    weight_kg: f64,
    urgency: Urgency,
    mode: TravelMode,
    size: SizeClass,
    fragile: bool,
    door_pickup: bool,
    insurance: InsuranceTier,
) -> u64 {
    let request = QuoteRequest {
        origin: origin.to_string(),
        destination: destination.to_string(),
        weight_kg,
        urgency,
        mode,
        size,
        fragile,
        door_pickup,
        insurance,
    };
    RateEngine::default().price(&request)
}

fn effective_weight(weight_kg: f64) -> f64 {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        weight_kg
    } else {
        0.0
    }
}

// Saturates on overflow; the raw product is never negative.
fn round_price(raw: f64) -> u64 {
    raw.round() as u64
}

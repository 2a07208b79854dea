use chrono::NaiveDate;
use parcel_exchange::config::AppConfig;
use parcel_exchange::error::AppError;
use parcel_exchange::marketplace::schema::LISTING_DATE_FORMAT;
use parcel_exchange::marketplace::{
    DistanceTable, Principal, RateEngine, RemoteParcel, RemoteTrip, UserProfile,
};
use parcel_exchange::telemetry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loaded configuration plus the rate engine every pricing command shares.
pub(crate) struct Session {
    pub(crate) engine: RateEngine,
}

impl Session {
    pub(crate) fn start(distance_table: Option<PathBuf>) -> Result<Self, AppError> {
        let mut config = AppConfig::load()?;
        if let Some(path) = distance_table {
            config.pricing.distance_table = Some(path);
        }

        telemetry::init(&config.telemetry)?;

        let distances = match &config.pricing.distance_table {
            Some(path) => {
                let table = DistanceTable::from_path(path)?;
                info!(path = %path.display(), pairs = table.len(), "loaded distance table");
                table
            }
            None => DistanceTable::builtin(),
        };

        info!(environment = ?config.environment, "parcel exchange session ready");
        Ok(Self {
            engine: RateEngine::new(distances),
        })
    }
}

/// Listings as fetched from the remote store, plus the caller's profile map.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListingSnapshot {
    pub(crate) parcels: Vec<RemoteParcel>,
    pub(crate) trips: Vec<RemoteTrip>,
    profiles: HashMap<Principal, Option<UserProfile>>,
}

impl ListingSnapshot {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Profiles the store reported as missing are dropped, so their owners never count as verified.
    pub(crate) fn known_profiles(&self) -> HashMap<Principal, UserProfile> {
        self.profiles
            .iter()
            .filter_map(|(identity, profile)| {
                profile
                    .as_ref()
                    .map(|profile| (identity.clone(), profile.clone()))
            })
            .collect()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), LISTING_DATE_FORMAT)
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-11-15 "),
            Ok(NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid date"))
        );
        assert!(parse_date("15/11/2025")
            .expect_err("wrong format")
            .contains("YYYY-MM-DD"));
    }

    #[test]
    fn snapshot_drops_missing_profiles() {
        let snapshot: ListingSnapshot = serde_json::from_str(
            r#"{
                "parcels": [
                    {"id": 1, "description": "x", "sender": "asha", "travelMode": "car"}
                ],
                "profiles": {
                    "asha": {"name": "Asha", "identityVerified": true, "phoneVerified": true},
                    "ghost": null
                }
            }"#,
        )
        .expect("snapshot parses");

        assert_eq!(snapshot.parcels.len(), 1);
        assert!(snapshot.trips.is_empty());
        let profiles = snapshot.known_profiles();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[&Principal::new("asha")].is_verified());
    }
}

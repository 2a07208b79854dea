//! Filters that narrow a snapshot of parcel or trip listings.
//!
//! Every filter is a pure function from a slice to a new vector and works on one listing kind
//! at a time. Policy differs by kind (parcels carry the opaque payload, trips do not), and the
//! kind comes from [`Listing::KIND`] rather than from inspecting the records.
//!
//! Two defaults are opposite: an undecodable parcel *passes* the price filter but
//! is *dropped* by the insurance filter.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use super::domain::{Principal, RemoteParcel, RemoteTrip, TravelMode, UserProfile};
use super::schema::decode_parcel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Parcel,
    Trip,
}

/// Capabilities the filters need from a listing record.
pub trait Listing {
    const KIND: ListingKind;

    fn travel_mode(&self) -> TravelMode;

    /// Sender for parcels, carrier for trips.
    fn owner(&self) -> &Principal;

    /// The opaque free-text field, when the record has one.
    fn opaque_text(&self) -> Option<&str>;
}

impl Listing for RemoteParcel {
    const KIND: ListingKind = ListingKind::Parcel;

    fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    fn owner(&self) -> &Principal {
        &self.sender
    }

    fn opaque_text(&self) -> Option<&str> {
        Some(&self.description)
    }
}

impl Listing for RemoteTrip {
    const KIND: ListingKind = ListingKind::Trip;

    fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    fn owner(&self) -> &Principal {
        &self.carrier
    }

    fn opaque_text(&self) -> Option<&str> {
        None
    }
}

/// Identity → verification profile map supplied by the caller.
pub trait ProfileLookup {
    fn profile(&self, identity: &Principal) -> Option<&UserProfile>;
}

impl<S: BuildHasher> ProfileLookup for HashMap<Principal, UserProfile, S> {
    fn profile(&self, identity: &Principal) -> Option<&UserProfile> {
        self.get(identity)
    }
}

impl ProfileLookup for BTreeMap<Principal, UserProfile> {
    fn profile(&self, identity: &Principal) -> Option<&UserProfile> {
        self.get(identity)
    }
}

/// Case-insensitive substring match of `from`/`to` against each parcel's opaque text.
/// Trips have no text to search, so a trip collection comes back unchanged.
pub fn filter_by_route<T: Listing + Clone>(items: &[T], from: &str, to: &str) -> Vec<T> {
    if T::KIND == ListingKind::Trip || (from.is_empty() && to.is_empty()) {
        return items.to_vec();
    }

    let from = from.to_lowercase();
    let to = to.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let text = item.opaque_text().unwrap_or_default().to_lowercase();
            (from.is_empty() || text.contains(&from)) && (to.is_empty() || text.contains(&to))
        })
        .cloned()
        .collect()
}

/// Keeps parcels priced at or below `max_price`.
///
/// Parcels that fail to decode, or whose price is zero (never set), pass. Trips pass unchanged.
pub fn filter_by_price<T: Listing + Clone>(items: &[T], max_price: f64) -> Vec<T> {
    if T::KIND == ListingKind::Trip {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            match item.opaque_text().and_then(decode_parcel) {
                Some(view) => view.price == 0.0 || view.price <= max_price,
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Keeps parcels whose decoded insurance tier is basic or premium.
///
/// Parcels that fail to decode are dropped. Trips are dropped entirely.
pub fn filter_by_insurance<T: Listing + Clone>(items: &[T]) -> Vec<T> {
    if T::KIND == ListingKind::Trip {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| {
            item.opaque_text()
                .and_then(decode_parcel)
                .is_some_and(|view| view.insurance_tier.is_insured())
        })
        .cloned()
        .collect()
}

/// Keeps listings whose owner is known and both identity- and phone-verified.
pub fn filter_by_verified<T, P>(items: &[T], profiles: &P) -> Vec<T>
where
    T: Listing + Clone,
    P: ProfileLookup + ?Sized,
{
    items
        .iter()
        .filter(|item| {
            profiles
                .profile(item.owner())
                .is_some_and(UserProfile::is_verified)
        })
        .cloned()
        .collect()
}

pub fn filter_by_travel_mode<T: Listing + Clone>(items: &[T], mode: TravelMode) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.travel_mode() == mode)
        .cloned()
        .collect()
}

/// Browse-screen criteria. Inactive criteria are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub from: String,
    pub to: String,
    pub max_price: Option<f64>,
    pub insured_only: bool,
    pub verified_only: bool,
    pub travel_mode: Option<TravelMode>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
            && self.to.is_empty()
            && self.max_price.is_none()
            && !self.insured_only
            && !self.verified_only
            && self.travel_mode.is_none()
    }

    /// Applies route, price, insurance, verification, then travel mode.
    pub fn apply<T, P>(&self, items: &[T], profiles: &P) -> Vec<T>
    where
        T: Listing + Clone,
        P: ProfileLookup + ?Sized,
    {
        let mut result = filter_by_route(items, &self.from, &self.to);
        if let Some(max_price) = self.max_price {
            result = filter_by_price(&result, max_price);
        }
        if self.insured_only {
            result = filter_by_insurance(&result);
        }
        if self.verified_only {
            result = filter_by_verified(&result, profiles);
        }
        if let Some(mode) = self.travel_mode {
            result = filter_by_travel_mode(&result, mode);
        }
        result
    }
}

//! Listing codec, pricing, insurance, and search for the parcel/trip marketplace.

pub mod domain;
pub mod drafts;
pub mod insurance;
pub mod pricing;
pub mod schema;
pub mod search;
pub mod summary;

pub use domain::{
    BusDetails, CarDetails, FlightDetails, InsuranceTier, ParseEnumError, Principal,
    RemoteParcel, RemoteTrip, SizeClass, TrainDetails, TravelMode, TripDetails, Urgency,
    UserProfile,
};
pub use drafts::{HandlingOptions, ParcelDraft, ParcelSubmission, TripDraft, TripSubmission};
pub use insurance::{coverage_options, get_coverage, InsuranceCoverage};
pub use pricing::{
    calculate_price, DistanceTable, DistanceTableError, PriceFactor, PriceFactorKind,
    PriceQuote, QuoteRequest, RateEngine, FALLBACK_DISTANCE_KM,
};
pub use schema::{
    decode_parcel, decode_trip, encode_parcel, encode_trip, LegacyParcel, ListingError,
    ParcelPayload, ParcelView, TripView,
};
pub use search::{
    filter_by_insurance, filter_by_price, filter_by_route, filter_by_travel_mode,
    filter_by_verified, Listing, ListingKind, ProfileLookup, SearchCriteria,
};
pub use summary::{ParcelSummary, PayloadSource, TripSummary};

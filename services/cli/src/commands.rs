use crate::infra::{print_json, ListingSnapshot, Session};
use chrono::{Local, NaiveDate};
use clap::Args;
use parcel_exchange::error::AppError;
use parcel_exchange::marketplace::schema::LISTING_DATE_FORMAT;
use parcel_exchange::marketplace::{
    coverage_options, get_coverage, HandlingOptions, InsuranceCoverage, InsuranceTier,
    ParcelDraft, ParcelSummary, ParcelView, PriceQuote, QuoteRequest, SearchCriteria, SizeClass,
    TravelMode, TripSummary, Urgency,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct HandlingArgs {
    /// Delivery urgency: normal, express, or same-day
    #[arg(long, default_value = "normal")]
    pub(crate) urgency: Urgency,
    /// Handle as fragile
    #[arg(long)]
    pub(crate) fragile: bool,
    /// Collect from the sender's door
    #[arg(long)]
    pub(crate) door_pickup: bool,
}

impl From<HandlingArgs> for HandlingOptions {
    fn from(args: HandlingArgs) -> Self {
        Self {
            urgency: args.urgency,
            fragile: args.fragile,
            door_pickup: args.door_pickup,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Origin city
    #[arg(long)]
    pub(crate) from: String,
    /// Destination city
    #[arg(long)]
    pub(crate) to: String,
    /// Parcel weight in kilograms
    #[arg(long)]
    pub(crate) weight: f64,
    #[arg(long, default_value = "car")]
    pub(crate) mode: TravelMode,
    #[arg(long, default_value = "medium")]
    pub(crate) size: SizeClass,
    #[arg(long, default_value = "none")]
    pub(crate) insurance: InsuranceTier,
    #[command(flatten)]
    pub(crate) handling: HandlingArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CoverageArgs {
    #[arg(long, default_value = "car")]
    pub(crate) mode: TravelMode,
}

#[derive(Args, Debug)]
pub(crate) struct ComposeParcelArgs {
    #[arg(long)]
    pub(crate) from: String,
    #[arg(long)]
    pub(crate) to: String,
    #[arg(long, default_value = "General")]
    pub(crate) category: String,
    /// Parcel weight in kilograms
    #[arg(long)]
    pub(crate) weight: f64,
    #[arg(long, default_value = "medium")]
    pub(crate) size: SizeClass,
    /// Travel date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Asking price in rupees. Defaults to the suggested price.
    #[arg(long)]
    pub(crate) price: Option<f64>,
    #[arg(long)]
    pub(crate) description: String,
    #[arg(long, default_value = "none")]
    pub(crate) insurance: InsuranceTier,
    #[arg(long, default_value = "car")]
    pub(crate) mode: TravelMode,
    #[command(flatten)]
    pub(crate) handling: HandlingArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BrowseArgs {
    /// JSON snapshot with `parcels`, `trips`, and `profiles`
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Case-insensitive origin text to match
    #[arg(long, default_value = "")]
    pub(crate) from: String,
    /// Case-insensitive destination text to match
    #[arg(long, default_value = "")]
    pub(crate) to: String,
    #[arg(long)]
    pub(crate) max_price: Option<f64>,
    /// Keep only basic or premium insured listings
    #[arg(long)]
    pub(crate) insured_only: bool,
    /// Keep only listings whose owner passed identity and phone checks
    #[arg(long)]
    pub(crate) verified_only: bool,
    #[arg(long)]
    pub(crate) mode: Option<TravelMode>,
}

impl BrowseArgs {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            from: self.from.clone(),
            to: self.to.clone(),
            max_price: self.max_price,
            insured_only: self.insured_only,
            verified_only: self.verified_only,
            travel_mode: self.mode,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput {
    quote: PriceQuote,
    coverage: InsuranceCoverage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComposedParcel {
    travel_mode: TravelMode,
    description: String,
    suggested_price: bool,
}

pub(crate) fn run_quote(session: &Session, args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        from,
        to,
        weight,
        mode,
        size,
        insurance,
        handling,
    } = args;

    let request = QuoteRequest {
        origin: from,
        destination: to,
        weight_kg: weight,
        urgency: handling.urgency,
        mode,
        size,
        fragile: handling.fragile,
        door_pickup: handling.door_pickup,
        insurance,
    };
    let quote = session.engine.quote(&request);
    info!(
        total = quote.total,
        fallback_distance = quote.fallback_distance,
        "quote complete"
    );

    print_json(&QuoteOutput {
        quote,
        coverage: get_coverage(insurance, mode),
    })
}

pub(crate) fn run_coverage(args: CoverageArgs) -> Result<(), AppError> {
    let options = coverage_options(args.mode);
    info!(mode = args.mode.label(), "coverage listed");
    print_json(&options)
}

pub(crate) fn run_compose_parcel(
    session: &Session,
    args: ComposeParcelArgs,
) -> Result<(), AppError> {
    let ComposeParcelArgs {
        from,
        to,
        category,
        weight,
        size,
        date,
        price,
        description,
        insurance,
        mode,
        handling,
    } = args;

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let view = ParcelView {
        from,
        to,
        category,
        weight,
        size,
        date: date.format(LISTING_DATE_FORMAT).to_string(),
        price: price.unwrap_or(0.0),
        description,
        insurance_tier: insurance,
    };

    let mut draft = ParcelDraft::new(view, mode);
    if price.is_none() {
        draft = draft.with_suggested_price(&session.engine, handling.into());
    }
    let submission = draft.submission()?;
    info!(
        mode = submission.travel_mode.label(),
        price = draft.view.price,
        "parcel composed"
    );

    print_json(&ComposedParcel {
        travel_mode: submission.travel_mode,
        description: submission.description,
        suggested_price: price.is_none(),
    })
}

pub(crate) fn run_browse_parcels(args: BrowseArgs) -> Result<(), AppError> {
    let snapshot = ListingSnapshot::load(&args.snapshot)?;
    let matches = args
        .criteria()
        .apply(&snapshot.parcels, &snapshot.known_profiles());
    info!(
        total = snapshot.parcels.len(),
        matched = matches.len(),
        "parcel browse complete"
    );

    let summaries: Vec<ParcelSummary> = matches.iter().map(ParcelSummary::from_parcel).collect();
    print_json(&summaries)
}

pub(crate) fn run_browse_trips(args: BrowseArgs) -> Result<(), AppError> {
    let snapshot = ListingSnapshot::load(&args.snapshot)?;
    let matches = args
        .criteria()
        .apply(&snapshot.trips, &snapshot.known_profiles());
    info!(
        total = snapshot.trips.len(),
        matched = matches.len(),
        "trip browse complete"
    );

    let summaries: Vec<TripSummary> = matches
        .iter()
        .map(|trip| TripSummary::from_trip(trip, None))
        .collect();
    print_json(&summaries)
}

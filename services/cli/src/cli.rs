use crate::commands::{
    run_browse_parcels, run_browse_trips, run_compose_parcel, run_coverage, run_quote, BrowseArgs,
    ComposeParcelArgs, CoverageArgs, QuoteArgs,
};
use crate::infra::Session;
use clap::{Parser, Subcommand};
use parcel_exchange::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "parcel-exchange",
    about = "Price, compose, and browse parcel and trip listings from the command line",
    version
)]
struct Cli {
    /// CSV of `from,to,distance_km` rows replacing the configured distance table
    #[arg(long, global = true)]
    distance_table: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote a shipment and show the coverage for its insurance tier
    Quote(QuoteArgs),
    /// List the three insurance tiers for a travel mode
    Coverage(CoverageArgs),
    /// Validate parcel fields and print the encoded listing text
    ComposeParcel(ComposeParcelArgs),
    /// Filter a JSON snapshot of listings
    Browse {
        #[command(subcommand)]
        command: BrowseCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BrowseCommand {
    /// Browse parcel listings
    Parcels(BrowseArgs),
    /// Browse trip listings
    Trips(BrowseArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let session = Session::start(cli.distance_table)?;

    match cli.command {
        Command::Quote(args) => run_quote(&session, args),
        Command::Coverage(args) => run_coverage(args),
        Command::ComposeParcel(args) => run_compose_parcel(&session, args),
        Command::Browse {
            command: BrowseCommand::Parcels(args),
        } => run_browse_parcels(args),
        Command::Browse {
            command: BrowseCommand::Trips(args),
        } => run_browse_trips(args),
    }
}

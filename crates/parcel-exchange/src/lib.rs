//! Domain layer for the parcel/trip marketplace client.
//!
//! The remote store only knows two thin record shapes. Everything richer (routes, weights,
//! prices, insurance tiers) lives in the `marketplace` module, which encodes structured listing
//! data into the parcel's free-text field, prices shipments, and narrows listing collections.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;

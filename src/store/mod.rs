pub mod json;
pub mod seed;
pub mod traits;

pub use json::JsonFileSource;
pub use seed::SeedSource;
pub use traits::ListingSource;

use crate::models::ApartmentListing;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Immutable collection of apartment listings for one session.
/// Built once from a source and read-only afterwards.
#[derive(Debug)]
pub struct ListingStore {
    listings: Vec<ApartmentListing>,
    loaded_at: DateTime<Utc>,
}

impl ListingStore {
    /// Build the store from a source, rejecting duplicate listing ids
    pub async fn from_source(source: &dyn ListingSource) -> Result<Self> {
        let listings = source.load().await?;
        Self::new(listings)
    }

    /// Build the store from an already loaded collection
    pub fn new(listings: Vec<ApartmentListing>) -> Result<Self> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id) {
                bail!("Duplicate listing id {} in source data", listing.id);
            }
        }

        Ok(Self {
            listings,
            loaded_at: Utc::now(),
        })
    }

    /// Listings in their original source order
    pub fn listings(&self) -> &[ApartmentListing] {
        &self.listings
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

use crate::models::ApartmentListing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This allows swapping the built-in seed data for a JSON file (or a real
/// backend later) without touching the filtering pipeline
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full listing collection from the source
    async fn load(&self) -> Result<Vec<ApartmentListing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

use crate::models::ApartmentListing;
use crate::store::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads listings from a JSON file, standing in for whatever backend
/// supplies the collection in production
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<ApartmentListing>> {
        info!("Loading listings from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        debug!("Read {} bytes of listing JSON", content.len());

        let listings: Vec<ApartmentListing> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

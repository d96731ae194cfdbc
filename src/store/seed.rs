use crate::models::{ApartmentListing, Contact, Location, PLACEHOLDER_IMAGE_MARKER};
use crate::store::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in Maadi listings used when no listings.json is supplied
pub struct SeedSource;

#[async_trait]
impl ListingSource for SeedSource {
    async fn load(&self) -> Result<Vec<ApartmentListing>> {
        info!("Using built-in seed listings");
        Ok(seed_listings())
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}

/// The static seed collection
pub fn seed_listings() -> Vec<ApartmentListing> {
    vec![
        ApartmentListing {
            id: 1,
            title: "Apartment #1".to_string(),
            description: "A nice furnished apartment.".to_string(),
            price: 45_000,
            bedrooms: 2,
            furnished: true,
            location: Location {
                lat: 30.0131,
                lng: 31.2244,
                address: "Degla".to_string(),
            },
            contact: Contact {
                name: "Amr".to_string(),
                phone: "01007701719".to_string(),
                email: String::new(),
            },
            images: vec![format!(
                "https://placehold.co/400x250?text={PLACEHOLDER_IMAGE_MARKER}"
            )],
        },
        ApartmentListing {
            id: 2,
            title: "Spacious 3 Bedroom Apartment".to_string(),
            description: "Unfurnished, great for families in Degla.".to_string(),
            price: 45_000,
            bedrooms: 3,
            furnished: false,
            location: Location {
                lat: 30.0200,
                lng: 31.2200,
                address: "Maadi Degla".to_string(),
            },
            contact: Contact {
                name: "Sara".to_string(),
                phone: "01000000002".to_string(),
                email: "sara@example.com".to_string(),
            },
            images: vec![
                "https://via.placeholder.com/300x200?text=Apartment+2+Image+1".to_string(),
                "https://via.placeholder.com/300x200?text=Apartment+2+Image+2".to_string(),
            ],
        },
        ApartmentListing {
            id: 3,
            title: "Modern Studio Apartment".to_string(),
            description: "Perfect for singles, furnished with AC.".to_string(),
            price: 20_000,
            bedrooms: 0,
            furnished: true,
            location: Location {
                lat: 30.0155,
                lng: 31.2255,
                address: "Zahraa Maadi".to_string(),
            },
            contact: Contact {
                name: "Mohamed".to_string(),
                phone: "01000000003".to_string(),
                email: "mohamed@example.com".to_string(),
            },
            images: vec![
                "https://via.placeholder.com/300x200?text=Apartment+3+Image+1".to_string(),
            ],
        },
    ]
}

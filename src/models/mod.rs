use serde::{Deserialize, Serialize};

/// URL fragment that marks the seed "no photos yet" placeholder image
pub const PLACEHOLDER_IMAGE_MARKER: &str = "Place%20your%20apartment%20here";

/// Geographic position and street address of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Contact details for whoever advertises the listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    /// May be empty; the card then skips the mailto link
    pub email: String,
}

/// One rental apartment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentListing {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Monthly rent (EGP), never negative
    pub price: i64,
    /// Bedroom count, 0 means studio
    pub bedrooms: u32,
    pub furnished: bool,
    pub location: Location,
    pub contact: Contact,
    /// Ordered image URLs, may be empty
    pub images: Vec<String>,
}

impl ApartmentListing {
    /// A lone placeholder image stands in for "no photos yet". It renders
    /// as the centered placeholder branch instead of a photo strip, but it
    /// is still a plain listing, not an error.
    pub fn has_placeholder_only(&self) -> bool {
        self.images.len() == 1 && self.images[0].contains(PLACEHOLDER_IMAGE_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with_images(images: Vec<String>) -> ApartmentListing {
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
            images,
        }
    }

    #[test]
    fn test_placeholder_detected_on_single_marker_image() {
        let listing = listing_with_images(vec![format!(
            "https://placehold.co/400x250?text={PLACEHOLDER_IMAGE_MARKER}"
        )]);
        assert!(listing.has_placeholder_only());
    }

    #[test]
    fn test_real_photos_are_not_placeholder() {
        let listing = listing_with_images(vec![
            "https://example.com/a.jpg".to_string(),
            "https://example.com/b.jpg".to_string(),
        ]);
        assert!(!listing.has_placeholder_only());
    }

    #[test]
    fn test_empty_image_list_is_not_the_sentinel() {
        let listing = listing_with_images(vec![]);
        assert!(!listing.has_placeholder_only());
    }
}

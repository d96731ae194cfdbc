use crate::filter::{self, FilterCriteria};
use crate::gallery::GalleryState;
use crate::models::ApartmentListing;
use serde::Serialize;
use tracing::debug;

/// A map annotation derived from one visible listing. The map collaborator
/// consumes this and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub popup_text: String,
}

/// External collaborator that draws the map surface
pub trait MapSurface {
    /// Replace the drawn markers with the current visible set
    fn update_markers(&mut self, markers: &[MapMarker]);
}

/// Render-ready form of one listing card
#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Formatted price, e.g. "45,000 EGP"
    pub price_label: String,
    /// "Studio" for zero bedrooms, the plain count otherwise
    pub bedrooms_label: String,
    pub furnished_label: String,
    pub address: String,
    /// "Name - phone" line
    pub contact_line: String,
    /// mailto link, absent when the listing has no email
    pub email_link: Option<String>,
    /// First image, shown as the gallery trigger
    pub thumbnail: Option<String>,
    /// True when the listing has no real photos yet
    pub placeholder: bool,
    /// Full image set handed to the gallery on click
    pub images: Vec<String>,
}

/// Everything the page needs for one render pass
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    /// Validation message shown next to the filters, red
    pub error: Option<String>,
    /// True only when criteria are valid and nothing matched; shows the
    /// "No apartments found" message instead of the error banner
    pub no_results: bool,
    pub listings: Vec<ListingCard>,
    pub markers: Vec<MapMarker>,
    pub gallery: GalleryState,
}

/// Format a price with grouped thousands and the currency suffix,
/// e.g. 45000 becomes "45,000 EGP". Cards and marker popups both go
/// through here so the two renderings cannot drift apart.
pub fn format_price(price: i64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} EGP")
}

/// "Studio" for zero bedrooms, the count otherwise
pub fn bedrooms_label(bedrooms: u32) -> String {
    if bedrooms == 0 {
        "Studio".to_string()
    } else {
        bedrooms.to_string()
    }
}

/// Compose the full render model from the current state.
///
/// Invalid criteria suppress filtering entirely: the model carries the
/// validation message and empty listing and marker sets, and the
/// no-results flag stays off so the two empty states read differently.
pub fn compose(
    listings: &[ApartmentListing],
    criteria: &FilterCriteria,
    gallery: &GalleryState,
) -> ViewModel {
    if let Err(error) = criteria.validate() {
        debug!("Composing error view: {error}");
        return ViewModel {
            error: Some(error.to_string()),
            no_results: false,
            listings: Vec::new(),
            markers: Vec::new(),
            gallery: gallery.clone(),
        };
    }

    let visible = filter::apply(listings, criteria);
    debug!("Composing view with {} visible listings", visible.len());

    let markers = visible.iter().map(marker_for).collect();
    let cards: Vec<ListingCard> = visible.iter().map(card_for).collect();

    ViewModel {
        error: None,
        no_results: cards.is_empty(),
        listings: cards,
        markers,
        gallery: gallery.clone(),
    }
}

fn marker_for(apartment: &ApartmentListing) -> MapMarker {
    MapMarker {
        id: apartment.id,
        lat: apartment.location.lat,
        lng: apartment.location.lng,
        popup_text: format!(
            "{}\n{}\nPrice: {}",
            apartment.title,
            apartment.location.address,
            format_price(apartment.price)
        ),
    }
}

fn card_for(apartment: &ApartmentListing) -> ListingCard {
    let email_link = if apartment.contact.email.is_empty() {
        None
    } else {
        Some(format!("mailto:{}", apartment.contact.email))
    };

    ListingCard {
        id: apartment.id,
        title: apartment.title.clone(),
        description: apartment.description.clone(),
        price_label: format_price(apartment.price),
        bedrooms_label: bedrooms_label(apartment.bedrooms),
        furnished_label: if apartment.furnished { "Yes" } else { "No" }.to_string(),
        address: apartment.location.address.clone(),
        contact_line: format!("{} - {}", apartment.contact.name, apartment.contact.phone),
        email_link,
        thumbnail: apartment.images.first().cloned(),
        placeholder: apartment.images.is_empty() || apartment.has_placeholder_only(),
        images: apartment.images.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterCriteria, Furnished};
    use crate::models::{Contact, Location};
    use crate::store::seed::seed_listings;

    fn degla_listing() -> ApartmentListing {
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
            images: vec![],
        }
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "0 EGP");
        assert_eq!(format_price(999), "999 EGP");
        assert_eq!(format_price(20_000), "20,000 EGP");
        assert_eq!(format_price(45_000), "45,000 EGP");
        assert_eq!(format_price(1_234_567), "1,234,567 EGP");
    }

    #[test]
    fn test_bedrooms_label_studio() {
        assert_eq!(bedrooms_label(0), "Studio");
        assert_eq!(bedrooms_label(3), "3");
    }

    #[test]
    fn test_matching_criteria_show_the_listing() {
        let listings = vec![degla_listing()];
        let criteria = FilterCriteria {
            min_price: Some(40_000),
            max_price: Some(50_000),
            bedrooms: Some(2),
            furnished: Furnished::Furnished,
        };

        let view = compose(&listings, &criteria, &GalleryState::default());
        assert!(view.error.is_none());
        assert!(!view.no_results);
        assert_eq!(view.listings.len(), 1);
        assert_eq!(view.listings[0].id, 1);
    }

    #[test]
    fn test_studio_filter_on_two_bedroom_gives_no_results_not_error() {
        let listings = vec![degla_listing()];
        let criteria = FilterCriteria {
            bedrooms: Some(0),
            ..Default::default()
        };

        let view = compose(&listings, &criteria, &GalleryState::default());
        assert!(view.error.is_none());
        assert!(view.no_results);
        assert!(view.listings.is_empty());
        assert!(view.markers.is_empty());
    }

    #[test]
    fn test_inverted_range_gives_error_not_no_results() {
        let listings = vec![degla_listing()];
        let criteria = FilterCriteria {
            min_price: Some(50_000),
            max_price: Some(10_000),
            ..Default::default()
        };

        let view = compose(&listings, &criteria, &GalleryState::default());
        assert_eq!(
            view.error.as_deref(),
            Some("Max price must be greater than or equal to min price")
        );
        assert!(!view.no_results);
        assert!(view.listings.is_empty());
        assert!(view.markers.is_empty());
    }

    #[test]
    fn test_markers_parallel_the_visible_listings() {
        let listings = seed_listings();
        let view = compose(&listings, &FilterCriteria::default(), &GalleryState::default());

        assert_eq!(view.markers.len(), view.listings.len());
        let card_ids: Vec<u64> = view.listings.iter().map(|card| card.id).collect();
        let marker_ids: Vec<u64> = view.markers.iter().map(|marker| marker.id).collect();
        assert_eq!(card_ids, marker_ids);
    }

    #[test]
    fn test_popup_text_reuses_the_card_price_format() {
        let listings = vec![degla_listing()];
        let view = compose(&listings, &FilterCriteria::default(), &GalleryState::default());

        let card = &view.listings[0];
        let marker = &view.markers[0];
        assert!(marker.popup_text.contains(&card.price_label));
        assert!(marker.popup_text.contains("Apartment #1"));
        assert!(marker.popup_text.contains("Degla"));
    }

    #[test]
    fn test_empty_email_omits_the_mailto_link() {
        let listings = vec![degla_listing()];
        let view = compose(&listings, &FilterCriteria::default(), &GalleryState::default());
        assert_eq!(view.listings[0].email_link, None);

        let listings = seed_listings();
        let view = compose(&listings, &FilterCriteria::default(), &GalleryState::default());
        assert_eq!(
            view.listings[1].email_link.as_deref(),
            Some("mailto:sara@example.com")
        );
    }

    #[test]
    fn test_placeholder_branch_for_no_photos() {
        let listings = seed_listings();
        let view = compose(&listings, &FilterCriteria::default(), &GalleryState::default());

        // Seed listing 1 has only the placeholder image
        assert!(view.listings[0].placeholder);
        assert!(!view.listings[1].placeholder);

        // A listing with no images at all also takes the placeholder branch
        let bare = vec![degla_listing()];
        let view = compose(&bare, &FilterCriteria::default(), &GalleryState::default());
        assert!(view.listings[0].placeholder);
        assert_eq!(view.listings[0].thumbnail, None);
    }

    #[test]
    fn test_gallery_state_rides_along_unchanged() {
        let gallery = GalleryState {
            is_open: true,
            images: vec!["a.jpg".to_string()],
            title: "Apt X".to_string(),
        };
        let view = compose(&seed_listings(), &FilterCriteria::default(), &gallery);
        assert_eq!(view.gallery, gallery);
    }

    #[test]
    fn test_compose_on_empty_store() {
        let view = compose(&[], &FilterCriteria::default(), &GalleryState::default());
        assert!(view.error.is_none());
        assert!(view.no_results);
        assert!(view.markers.is_empty());
    }
}

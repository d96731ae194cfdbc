mod filter;
mod gallery;
mod models;
mod store;
mod view;

use filter::{FilterCriteria, FilterInput};
use gallery::{ClickTarget, GalleryController};
use std::path::Path;
use store::{JsonFileSource, ListingSource, ListingStore, SeedSource};
use tracing::{info, Level};
use view::{MapMarker, MapSurface};

/// Map collaborator for the terminal build: logs what a tile renderer
/// would draw from the marker list
struct LogMapSurface;

impl MapSurface for LogMapSurface {
    fn update_markers(&mut self, markers: &[MapMarker]) {
        info!("Map updated with {} markers", markers.len());
        for marker in markers {
            info!("  [{}] ({:.4}, {:.4})", marker.id, marker.lat, marker.lng);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Maadi Apartments for Rent");
    info!("=============================");
    info!("");

    // Prefer a listings.json next to the binary, fall back to seed data
    let json_path = Path::new("listings.json");
    let source: Box<dyn ListingSource> = if json_path.exists() {
        Box::new(JsonFileSource::new(json_path))
    } else {
        Box::new(SeedSource)
    };

    info!("Loading listings from source: {}", source.source_name());
    let store = ListingStore::from_source(source.as_ref()).await?;
    info!("Loaded {} listings at {}", store.len(), store.loaded_at());
    info!("");

    let mut criteria = FilterCriteria::default();
    let mut gallery = GalleryController::new();
    let mut map = LogMapSurface;

    // Unconstrained render pass, every listing visible
    let view = view::compose(store.listings(), &criteria, gallery.current_state());
    print_view(&view);
    map.update_markers(&view.markers);

    // Walk the thumbnail click path on the first visible listing
    if let Some(card) = view.listings.first() {
        gallery.open(&card.images, &card.title);
        info!(
            "Gallery open: '{}' ({} images)",
            gallery.current_state().title,
            gallery.current_state().images.len()
        );
        // A click on the photos stays inside the overlay
        gallery.handle_click(ClickTarget::Surface);
        gallery.handle_click(ClickTarget::Backdrop);
        info!("Gallery dismissed");
    }

    // Tighten the price range and recompute, the same path a field edit takes
    criteria.update(FilterInput::MaxPrice(Some(30_000)));
    info!("");
    info!("Applying max price filter: 30,000 EGP");
    let view = view::compose(store.listings(), &criteria, gallery.current_state());
    print_view(&view);
    map.update_markers(&view.markers);

    // Save the render model
    let json = serde_json::to_string_pretty(&view)?;
    tokio::fs::write("view_model.json", json).await?;
    info!("💾 Saved render model to view_model.json");

    Ok(())
}

fn print_view(view: &view::ViewModel) {
    if let Some(error) = &view.error {
        println!("! {error}");
    } else if view.no_results {
        println!("No apartments found matching your criteria.");
    }

    for (i, card) in view.listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, card.title, card.price_label);
        println!("   {}", card.description);
        println!(
            "   Bedrooms: {} | Furnished: {}",
            card.bedrooms_label, card.furnished_label
        );
        println!("   Address: {}", card.address);
        match &card.email_link {
            Some(link) => println!("   Contact: {} - {}", card.contact_line, link),
            None => println!("   Contact: {}", card.contact_line),
        }
        if card.placeholder {
            println!("   (no photos yet)");
        } else {
            println!("   {} photo(s)", card.images.len());
        }
        println!();
    }
}
